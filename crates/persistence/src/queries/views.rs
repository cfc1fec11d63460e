// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Reporting view queries.
//!
//! `TournamentDetails` and `DebaterPerformanceOverview` are computed by the
//! database on every read. Nothing here caches or materializes them.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use num_traits::ToPrimitive;
use time::Date;

use crate::data_models::{DebaterPerformanceRow, TournamentDetailsRow};
use crate::diesel_schema::{debater_performance_overview, tournament_details};
use crate::error::PersistenceError;

#[derive(Queryable, Selectable)]
#[diesel(table_name = tournament_details)]
struct TournamentDetailsViewRow {
    tournament_id: i64,
    tournament_name: String,
    tournament_date: Date,
    number_of_rounds: i64,
}

impl TryFrom<TournamentDetailsViewRow> for TournamentDetailsRow {
    type Error = PersistenceError;

    fn try_from(row: TournamentDetailsViewRow) -> Result<Self, Self::Error> {
        let number_of_rounds: usize = row.number_of_rounds.to_usize().ok_or_else(|| {
            PersistenceError::InvalidData(format!(
                "Negative round count {} for tournament {}",
                row.number_of_rounds, row.tournament_id
            ))
        })?;

        Ok(Self {
            tournament_id: row.tournament_id,
            tournament_name: row.tournament_name,
            tournament_date: row.tournament_date,
            number_of_rounds,
        })
    }
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = debater_performance_overview)]
struct DebaterPerformanceViewRow {
    debater_id: i64,
    debater_name: String,
    tournament_id: i64,
    tournament_name: String,
    avg_speaks: f64,
}

impl From<DebaterPerformanceViewRow> for DebaterPerformanceRow {
    fn from(row: DebaterPerformanceViewRow) -> Self {
        Self {
            debater_id: row.debater_id,
            debater_name: row.debater_name,
            tournament_id: row.tournament_id,
            tournament_name: row.tournament_name,
            avg_speaks: row.avg_speaks,
        }
    }
}

backend_fn! {
/// Reads `TournamentDetails`: one row per tournament with its round count.
///
/// Tournaments without rounds report a count of zero.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn tournament_details(conn: &mut _) -> Result<Vec<TournamentDetailsRow>, PersistenceError> {
    let rows: Vec<TournamentDetailsViewRow> = tournament_details::table
        .select(TournamentDetailsViewRow::as_select())
        .order(tournament_details::tournament_id.asc())
        .load(conn)?;

    rows.into_iter().map(TournamentDetailsRow::try_from).collect()
}
}

backend_fn! {
/// Reads `DebaterPerformanceOverview`: one row per (debater, tournament)
/// pair with at least one recorded performance.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn debater_performance_overview(
    conn: &mut _,
) -> Result<Vec<DebaterPerformanceRow>, PersistenceError> {
    let rows: Vec<DebaterPerformanceViewRow> = debater_performance_overview::table
        .select(DebaterPerformanceViewRow::as_select())
        .order((
            debater_performance_overview::debater_id.asc(),
            debater_performance_overview::tournament_id.asc(),
        ))
        .load(conn)?;

    Ok(rows.into_iter().map(DebaterPerformanceRow::from).collect())
}
}

backend_fn! {
/// Reads `DebaterPerformanceOverview` restricted to one tournament.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn debater_performance_for_tournament(
    conn: &mut _,
    tournament_id: i64,
) -> Result<Vec<DebaterPerformanceRow>, PersistenceError> {
    let rows: Vec<DebaterPerformanceViewRow> = debater_performance_overview::table
        .filter(debater_performance_overview::tournament_id.eq(tournament_id))
        .select(DebaterPerformanceViewRow::as_select())
        .order(debater_performance_overview::debater_id.asc())
        .load(conn)?;

    Ok(rows.into_iter().map(DebaterPerformanceRow::from).collect())
}
}
