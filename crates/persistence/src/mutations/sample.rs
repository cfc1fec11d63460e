// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Demonstration data set.
//!
//! Loads one small, complete tournament so the reporting views have
//! something to show. Everything is inserted in a single transaction; a
//! failure part-way leaves the database untouched.

use apda_tab_domain::{DebaterExperience, JudgeExperience, UserRole};
use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use time::Date;
use time::macros::date;
use tracing::info;

use crate::backend::PersistenceBackend;
use crate::data_models::SampleDataSummary;
use crate::diesel_schema::{
    debaters, judges, matchups, performances, rounds, teams, tournament_users, tournaments, users,
};
use crate::error::PersistenceError;

pub const SAMPLE_TOURNAMENT_NAME: &str = "Test Cup";
pub const SAMPLE_TOURNAMENT_DATE: Date = date!(2025 - 05 - 01);

const SAMPLE_TEAMS: [&str; 2] = ["Brown A", "Yale B"];

/// (name, experience, index into `SAMPLE_TEAMS`)
const SAMPLE_DEBATERS: [(&str, DebaterExperience, usize); 4] = [
    ("Avery Chen", DebaterExperience::Varsity, 0),
    ("Blake Morgan", DebaterExperience::Novice, 0),
    ("Casey Patel", DebaterExperience::Varsity, 1),
    ("Devon Ruiz", DebaterExperience::Novice, 1),
];

const SAMPLE_JUDGES: [(&str, JudgeExperience); 2] = [
    ("Harper Lee", JudgeExperience::Experienced),
    ("Jordan Kim", JudgeExperience::Novice),
];

const SAMPLE_USERS: [(&str, UserRole); 3] = [
    ("Morgan Ellis", UserRole::Organizer),
    ("Riley Shaw", UserRole::Administrator),
    ("Harper Lee", UserRole::Judge),
];

/// Speaks per debater, one column per round.
const SAMPLE_SPEAKS: [[f64; 2]; 4] = [[26.5, 27.0], [25.0, 25.5], [26.0, 26.25], [24.75, 25.25]];

backend_fn! {
/// Inserts the demonstration tournament and its participants.
///
/// Calling this twice creates a second, independent copy: names are not
/// unique anywhere in the schema.
///
/// # Errors
///
/// Returns an error if any insert fails; nothing is committed in that case.
pub fn load_sample_data(conn: &mut _) -> Result<SampleDataSummary, PersistenceError> {
    conn.transaction::<_, PersistenceError, _>(|conn| {
        let mut summary: SampleDataSummary = SampleDataSummary::default();

        diesel::insert_into(tournaments::table)
            .values((
                tournaments::name.eq(SAMPLE_TOURNAMENT_NAME),
                tournaments::date.eq(SAMPLE_TOURNAMENT_DATE),
            ))
            .execute(conn)?;
        let tournament_id: i64 = conn.get_last_insert_rowid()?;
        summary.tournament_ids.push(tournament_id);

        for round_number in 1..=2_i32 {
            diesel::insert_into(rounds::table)
                .values((
                    rounds::tournament_id.eq(tournament_id),
                    rounds::round_number.eq(round_number),
                ))
                .execute(conn)?;
            let round_id: i64 = conn.get_last_insert_rowid()?;
            summary.round_ids.push(round_id);

            diesel::insert_into(matchups::table)
                .values(matchups::round_id.eq(round_id))
                .execute(conn)?;
            summary.matchup_ids.push(conn.get_last_insert_rowid()?);
        }

        for team in SAMPLE_TEAMS {
            diesel::insert_into(teams::table)
                .values(teams::name.eq(team))
                .execute(conn)?;
            summary.team_ids.push(conn.get_last_insert_rowid()?);
        }

        for (name, experience, team_index) in SAMPLE_DEBATERS {
            let team_id: Option<i64> = summary.team_ids.get(team_index).copied();
            diesel::insert_into(debaters::table)
                .values((
                    debaters::name.eq(name),
                    debaters::experience_level.eq(experience.as_str()),
                    debaters::team_id.eq(team_id),
                ))
                .execute(conn)?;
            summary.debater_ids.push(conn.get_last_insert_rowid()?);
        }

        for (name, experience) in SAMPLE_JUDGES {
            diesel::insert_into(judges::table)
                .values((
                    judges::name.eq(name),
                    judges::experience_level.eq(experience.as_str()),
                ))
                .execute(conn)?;
            summary.judge_ids.push(conn.get_last_insert_rowid()?);
        }

        for (name, role) in SAMPLE_USERS {
            diesel::insert_into(users::table)
                .values((users::name.eq(name), users::role.eq(role.as_str())))
                .execute(conn)?;
            summary.user_ids.push(conn.get_last_insert_rowid()?);
        }

        let debater_ids: Vec<i64> = summary.debater_ids.clone();
        let round_ids: Vec<i64> = summary.round_ids.clone();
        for (debater_id, speaks_by_round) in debater_ids.iter().zip(SAMPLE_SPEAKS) {
            for (round_id, speaks) in round_ids.iter().zip(speaks_by_round) {
                diesel::insert_into(performances::table)
                    .values((
                        performances::debater_id.eq(*debater_id),
                        performances::round_id.eq(*round_id),
                        performances::speaks.eq(speaks),
                        performances::feedback.eq(Some("Clear extensions, watch time.")),
                    ))
                    .execute(conn)?;
                summary.performance_ids.push(conn.get_last_insert_rowid()?);
            }
        }

        for user_id in &summary.user_ids {
            diesel::insert_into(tournament_users::table)
                .values((
                    tournament_users::tournament_id.eq(tournament_id),
                    tournament_users::user_id.eq(*user_id),
                ))
                .execute(conn)?;
        }

        info!(
            tournament_id,
            debaters = summary.debater_ids.len(),
            performances = summary.performance_ids.len(),
            "Loaded sample data"
        );

        Ok(summary)
    })
}
}
