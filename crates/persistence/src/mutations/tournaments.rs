// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tournament, round and matchup mutations.
//!
//! `add_tournament` performs the same single insert as the `AddTournament`
//! stored procedure shipped in the `MySQL` migrations, so both backends share
//! one code path.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use time::Date;
use tracing::info;

use crate::backend::PersistenceBackend;
use crate::diesel_schema::{matchups, rounds, tournaments};
use crate::error::PersistenceError;

backend_fn! {
/// Creates a tournament.
///
/// No uniqueness is enforced: two tournaments may share a name and date.
/// The name is not checked beyond the column constraints, so an empty name
/// is stored as given.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `name` - The tournament name
/// * `date` - The date the tournament is held
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn add_tournament(conn: &mut _, name: &str, date: Date) -> Result<i64, PersistenceError> {
    info!("Creating tournament '{}' on {}", name, date);

    diesel::insert_into(tournaments::table)
        .values((tournaments::name.eq(name), tournaments::date.eq(date)))
        .execute(conn)?;

    let tournament_id: i64 = conn.get_last_insert_rowid()?;

    info!(tournament_id, "Tournament created");

    Ok(tournament_id)
}
}

backend_fn! {
/// Deletes a tournament.
///
/// Its rounds, their matchups and performances, and its user assignments are
/// removed by the schema's cascading foreign keys.
///
/// # Errors
///
/// Returns `NotFound` if no tournament has this ID.
pub fn delete_tournament(conn: &mut _, tournament_id: i64) -> Result<(), PersistenceError> {
    info!("Deleting tournament ID: {}", tournament_id);

    let deleted: usize = diesel::delete(
        tournaments::table.filter(tournaments::tournament_id.eq(tournament_id)),
    )
    .execute(conn)?;

    if deleted == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Tournament {tournament_id} not found"
        )));
    }

    Ok(())
}
}

backend_fn! {
/// Adds a round to a tournament.
///
/// Any integer is accepted as the round number, including zero, negatives
/// and a number already used in the same tournament.
///
/// # Errors
///
/// Returns `ForeignKeyViolation` if the tournament does not exist.
pub fn add_round(
    conn: &mut _,
    tournament_id: i64,
    round_number: i32,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(rounds::table)
        .values((
            rounds::tournament_id.eq(tournament_id),
            rounds::round_number.eq(round_number),
        ))
        .execute(conn)?;

    let round_id: i64 = conn.get_last_insert_rowid()?;

    info!(round_id, tournament_id, round_number, "Round created");

    Ok(round_id)
}
}

backend_fn! {
/// Deletes a round together with its matchups and performances.
///
/// # Errors
///
/// Returns `NotFound` if no round has this ID.
pub fn delete_round(conn: &mut _, round_id: i64) -> Result<(), PersistenceError> {
    info!("Deleting round ID: {}", round_id);

    let deleted: usize = diesel::delete(rounds::table.filter(rounds::round_id.eq(round_id)))
        .execute(conn)?;

    if deleted == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Round {round_id} not found"
        )));
    }

    Ok(())
}
}

backend_fn! {
/// Adds a matchup to a round.
///
/// # Errors
///
/// Returns `ForeignKeyViolation` if the round does not exist.
pub fn add_matchup(conn: &mut _, round_id: i64) -> Result<i64, PersistenceError> {
    diesel::insert_into(matchups::table)
        .values(matchups::round_id.eq(round_id))
        .execute(conn)?;

    let matchup_id: i64 = conn.get_last_insert_rowid()?;

    info!(matchup_id, round_id, "Matchup created");

    Ok(matchup_id)
}
}
