// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tournament/user assignment queries.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};

use crate::data_models::UserData;
use crate::diesel_schema::{tournament_users, users};
use crate::error::PersistenceError;
use crate::queries::participants::users_from_rows;

backend_fn! {
/// Lists the users assigned to a tournament, ordered by user ID.
///
/// Every assigned user is returned regardless of role.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_tournament_users(
    conn: &mut _,
    tournament_id: i64,
) -> Result<Vec<UserData>, PersistenceError> {
    let rows: Vec<(i64, String, String)> = tournament_users::table
        .inner_join(users::table)
        .filter(tournament_users::tournament_id.eq(tournament_id))
        .select((users::user_id, users::name, users::role))
        .order(users::user_id.asc())
        .load(conn)?;

    users_from_rows(rows)
}
}

backend_fn! {
/// Returns whether a user is assigned to a tournament.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn is_user_assigned(
    conn: &mut _,
    tournament_id: i64,
    user_id: i64,
) -> Result<bool, PersistenceError> {
    let count: i64 = tournament_users::table
        .filter(tournament_users::tournament_id.eq(tournament_id))
        .filter(tournament_users::user_id.eq(user_id))
        .count()
        .get_result(conn)?;

    Ok(count > 0)
}
}
