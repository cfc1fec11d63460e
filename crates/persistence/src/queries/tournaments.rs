// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tournament, round and matchup queries.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use time::Date;
use tracing::debug;

use crate::data_models::{MatchupData, RoundData, TournamentData};
use crate::diesel_schema::{matchups, rounds, tournaments};
use crate::error::PersistenceError;

/// Diesel Queryable struct for tournament rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = tournaments)]
struct TournamentRow {
    tournament_id: i64,
    name: String,
    date: Date,
}

impl From<TournamentRow> for TournamentData {
    fn from(row: TournamentRow) -> Self {
        Self {
            tournament_id: row.tournament_id,
            name: row.name,
            date: row.date,
        }
    }
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = rounds)]
struct RoundRow {
    round_id: i64,
    tournament_id: i64,
    round_number: i32,
}

impl From<RoundRow> for RoundData {
    fn from(row: RoundRow) -> Self {
        Self {
            round_id: row.round_id,
            tournament_id: row.tournament_id,
            round_number: row.round_number,
        }
    }
}

backend_fn! {
/// Retrieves a tournament by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the tournament does not exist.
pub fn get_tournament(
    conn: &mut _,
    tournament_id: i64,
) -> Result<Option<TournamentData>, PersistenceError> {
    debug!("Looking up tournament ID: {}", tournament_id);

    let row: Option<TournamentRow> = tournaments::table
        .filter(tournaments::tournament_id.eq(tournament_id))
        .select(TournamentRow::as_select())
        .first(conn)
        .optional()?;

    Ok(row.map(TournamentData::from))
}
}

backend_fn! {
/// Lists all tournaments ordered by date, then ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_tournaments(conn: &mut _) -> Result<Vec<TournamentData>, PersistenceError> {
    let rows: Vec<TournamentRow> = tournaments::table
        .select(TournamentRow::as_select())
        .order((tournaments::date.asc(), tournaments::tournament_id.asc()))
        .load(conn)?;

    Ok(rows.into_iter().map(TournamentData::from).collect())
}
}

backend_fn! {
/// Lists the rounds of a tournament ordered by round number.
///
/// Duplicate round numbers are permitted by the schema; ties are ordered
/// by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_rounds(conn: &mut _, tournament_id: i64) -> Result<Vec<RoundData>, PersistenceError> {
    let rows: Vec<RoundRow> = rounds::table
        .filter(rounds::tournament_id.eq(tournament_id))
        .select(RoundRow::as_select())
        .order((rounds::round_number.asc(), rounds::round_id.asc()))
        .load(conn)?;

    Ok(rows.into_iter().map(RoundData::from).collect())
}
}

backend_fn! {
/// Retrieves a round by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn get_round(conn: &mut _, round_id: i64) -> Result<Option<RoundData>, PersistenceError> {
    let row: Option<RoundRow> = rounds::table
        .filter(rounds::round_id.eq(round_id))
        .select(RoundRow::as_select())
        .first(conn)
        .optional()?;

    Ok(row.map(RoundData::from))
}
}

backend_fn! {
/// Lists the matchups of a round.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_matchups(conn: &mut _, round_id: i64) -> Result<Vec<MatchupData>, PersistenceError> {
    let rows: Vec<(i64, i64)> = matchups::table
        .filter(matchups::round_id.eq(round_id))
        .select((matchups::matchup_id, matchups::round_id))
        .order(matchups::matchup_id.asc())
        .load(conn)?;

    Ok(rows
        .into_iter()
        .map(|(matchup_id, round_id)| MatchupData {
            matchup_id,
            round_id,
        })
        .collect())
}
}
