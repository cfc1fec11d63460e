// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tournament/user assignment mutations.
//!
//! Both entry points end in the same `Tournament_User` insert. A repeated
//! pair is normally rejected by the `before_tournament_user_insert` trigger,
//! which surfaces here as `PersistenceError::DuplicateAssignment`. A pair
//! that gets past the trigger, such as two concurrent inserts on `MariaDB`,
//! hits the primary key instead and surfaces as `UniqueViolation`.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::{info, warn};

use crate::diesel_schema::tournament_users;
use crate::error::PersistenceError;

backend_fn! {
/// Assigns a user to a tournament.
///
/// # Errors
///
/// Returns `DuplicateAssignment` or `UniqueViolation` if the pair already
/// exists, or `ForeignKeyViolation` if either side does not exist.
pub fn assign_user_to_tournament(
    conn: &mut _,
    tournament_id: i64,
    user_id: i64,
) -> Result<(), PersistenceError> {
    let result: Result<usize, PersistenceError> = diesel::insert_into(tournament_users::table)
        .values((
            tournament_users::tournament_id.eq(tournament_id),
            tournament_users::user_id.eq(user_id),
        ))
        .execute(conn)
        .map_err(PersistenceError::from);

    match result {
        Ok(_) => {
            info!(tournament_id, user_id, "User assigned to tournament");
            Ok(())
        }
        Err(e) => {
            warn!(tournament_id, user_id, "Assignment rejected: {}", e);
            Err(e)
        }
    }
}
}

backend_fn! {
/// Assigns a judge to a tournament.
///
/// `judge_id` is stored as the `user_id` of the assignment, so it must be
/// the ID of a `User` row. Neither the `Judge` table nor the user's role is
/// consulted.
///
/// Mirrors the `AssignJudgeToTournament` stored procedure.
///
/// # Errors
///
/// Same as `assign_user_to_tournament`.
pub fn assign_judge_to_tournament(
    conn: &mut _,
    judge_id: i64,
    tournament_id: i64,
) -> Result<(), PersistenceError> {
    info!("Assigning judge {} to tournament {}", judge_id, tournament_id);

    let result: Result<usize, PersistenceError> = diesel::insert_into(tournament_users::table)
        .values((
            tournament_users::tournament_id.eq(tournament_id),
            tournament_users::user_id.eq(judge_id),
        ))
        .execute(conn)
        .map_err(PersistenceError::from);

    match result {
        Ok(_) => Ok(()),
        Err(e) => {
            warn!(judge_id, tournament_id, "Judge assignment rejected: {}", e);
            Err(e)
        }
    }
}
}
