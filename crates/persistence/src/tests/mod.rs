// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

mod assignment_tests;
mod cascade_tests;
mod initialization_tests;
mod tournament_tests;

use apda_tab_domain::{DebaterExperience, Speaks, UserRole};
use time::{Date, Month};

use crate::SqlitePersistence;

/// Builds a calendar date for tests.
pub fn test_date(year: i32, month: Month, day: u8) -> Date {
    Date::from_calendar_date(year, month, day).expect("Valid test date")
}

/// Builds a `Speaks` value for tests.
pub fn speaks(value: f64) -> Speaks {
    Speaks::new(value).expect("Valid test speaks")
}

/// IDs created by [`create_scored_tournament`].
pub struct ScoredTournament {
    pub tournament_id: i64,
    pub round_ids: Vec<i64>,
    pub matchup_ids: Vec<i64>,
    pub team_id: i64,
    pub debater_id: i64,
    pub performance_ids: Vec<i64>,
}

/// Creates a tournament with two rounds (one matchup each), a team with one
/// debater, and one performance per round.
pub fn create_scored_tournament(
    persistence: &mut SqlitePersistence,
    name: &str,
) -> ScoredTournament {
    let tournament_id = persistence
        .add_tournament(name, test_date(2025, Month::May, 1))
        .unwrap();

    let mut round_ids = Vec::new();
    let mut matchup_ids = Vec::new();
    for round_number in 1..=2 {
        let round_id = persistence.add_round(tournament_id, round_number).unwrap();
        matchup_ids.push(persistence.add_matchup(round_id).unwrap());
        round_ids.push(round_id);
    }

    let team_id = persistence.add_team(&format!("{name} Team")).unwrap();
    let debater_id = persistence
        .add_debater(
            &format!("{name} Debater"),
            DebaterExperience::Varsity,
            Some(team_id),
        )
        .unwrap();

    let performance_ids = round_ids
        .iter()
        .map(|round_id| {
            persistence
                .record_performance(debater_id, *round_id, speaks(25.5), None)
                .unwrap()
        })
        .collect();

    ScoredTournament {
        tournament_id,
        round_ids,
        matchup_ids,
        team_id,
        debater_id,
        performance_ids,
    }
}

/// Creates a user with the given role.
pub fn create_user(persistence: &mut SqlitePersistence, name: &str, role: UserRole) -> i64 {
    persistence.add_user(name, role).unwrap()
}
