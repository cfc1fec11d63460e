// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Team, debater, judge, speaking role and user queries.
//!
//! Enum columns are stored as text; rows whose text no longer maps to a
//! domain variant are reported as `InvalidData` rather than skipped.

use std::str::FromStr;

use apda_tab_domain::{DebaterExperience, JudgeExperience, SpeakingRole, UserRole};
use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::debug;

use crate::data_models::{DebaterData, JudgeData, SpeakingRoleData, TeamData, UserData};
use crate::diesel_schema::{debaters, judges, speaking_roles, teams, users};
use crate::error::PersistenceError;

#[derive(Queryable, Selectable)]
#[diesel(table_name = debaters)]
struct DebaterRow {
    debater_id: i64,
    name: String,
    experience_level: String,
    team_id: Option<i64>,
}

impl TryFrom<DebaterRow> for DebaterData {
    type Error = PersistenceError;

    fn try_from(row: DebaterRow) -> Result<Self, Self::Error> {
        let experience_level: DebaterExperience =
            DebaterExperience::from_str(&row.experience_level)
                .map_err(|e| PersistenceError::InvalidData(e.to_string()))?;

        Ok(Self {
            debater_id: row.debater_id,
            name: row.name,
            experience_level,
            team_id: row.team_id,
        })
    }
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = judges)]
struct JudgeRow {
    judge_id: i64,
    name: String,
    experience_level: String,
}

impl TryFrom<JudgeRow> for JudgeData {
    type Error = PersistenceError;

    fn try_from(row: JudgeRow) -> Result<Self, Self::Error> {
        let experience_level: JudgeExperience = JudgeExperience::from_str(&row.experience_level)
            .map_err(|e| PersistenceError::InvalidData(e.to_string()))?;

        Ok(Self {
            judge_id: row.judge_id,
            name: row.name,
            experience_level,
        })
    }
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = users)]
struct UserRow {
    user_id: i64,
    name: String,
    role: String,
}

impl TryFrom<UserRow> for UserData {
    type Error = PersistenceError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let role: UserRole = UserRole::from_str(&row.role)
            .map_err(|e| PersistenceError::InvalidData(e.to_string()))?;

        Ok(Self {
            user_id: row.user_id,
            name: row.name,
            role,
        })
    }
}

/// Converts user rows, failing on the first unmappable role.
pub(crate) fn users_from_rows(
    rows: Vec<(i64, String, String)>,
) -> Result<Vec<UserData>, PersistenceError> {
    rows.into_iter()
        .map(|(user_id, name, role)| UserData::try_from(UserRow { user_id, name, role }))
        .collect()
}

backend_fn! {
/// Lists all teams ordered by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_teams(conn: &mut _) -> Result<Vec<TeamData>, PersistenceError> {
    let rows: Vec<(i64, String)> = teams::table
        .select((teams::team_id, teams::name))
        .order(teams::team_id.asc())
        .load(conn)?;

    Ok(rows
        .into_iter()
        .map(|(team_id, name)| TeamData { team_id, name })
        .collect())
}
}

backend_fn! {
/// Retrieves a debater by ID.
///
/// # Errors
///
/// Returns an error if the database query fails or the stored experience
/// level is not recognized.
pub fn get_debater(
    conn: &mut _,
    debater_id: i64,
) -> Result<Option<DebaterData>, PersistenceError> {
    debug!("Looking up debater ID: {}", debater_id);

    let row: Option<DebaterRow> = debaters::table
        .filter(debaters::debater_id.eq(debater_id))
        .select(DebaterRow::as_select())
        .first(conn)
        .optional()?;

    row.map(DebaterData::try_from).transpose()
}
}

backend_fn! {
/// Lists debaters, optionally restricted to one team.
///
/// # Errors
///
/// Returns an error if the database query fails or a stored experience
/// level is not recognized.
pub fn list_debaters(
    conn: &mut _,
    team_id: Option<i64>,
) -> Result<Vec<DebaterData>, PersistenceError> {
    let mut query = debaters::table
        .select(DebaterRow::as_select())
        .order(debaters::debater_id.asc())
        .into_boxed();

    if let Some(team_id) = team_id {
        query = query.filter(debaters::team_id.eq(team_id));
    }

    let rows: Vec<DebaterRow> = query.load(conn)?;
    rows.into_iter().map(DebaterData::try_from).collect()
}
}

backend_fn! {
/// Lists all judges ordered by ID.
///
/// # Errors
///
/// Returns an error if the database query fails or a stored experience
/// level is not recognized.
pub fn list_judges(conn: &mut _) -> Result<Vec<JudgeData>, PersistenceError> {
    let rows: Vec<JudgeRow> = judges::table
        .select(JudgeRow::as_select())
        .order(judges::judge_id.asc())
        .load(conn)?;

    rows.into_iter().map(JudgeData::try_from).collect()
}
}

backend_fn! {
/// Lists the rows of the `Role` reference table.
///
/// # Errors
///
/// Returns an error if the database query fails or a stored role name is
/// not one of the four speaking positions.
pub fn list_speaking_roles(conn: &mut _) -> Result<Vec<SpeakingRoleData>, PersistenceError> {
    let rows: Vec<(i64, String)> = speaking_roles::table
        .select((speaking_roles::role_id, speaking_roles::role_name))
        .order(speaking_roles::role_id.asc())
        .load(conn)?;

    rows.into_iter()
        .map(|(role_id, role_name)| {
            let role: SpeakingRole = SpeakingRole::from_str(&role_name)
                .map_err(|e| PersistenceError::InvalidData(e.to_string()))?;
            Ok(SpeakingRoleData { role_id, role })
        })
        .collect()
}
}

backend_fn! {
/// Retrieves a user by ID.
///
/// # Errors
///
/// Returns an error if the database query fails or the stored role is not
/// recognized.
pub fn get_user(conn: &mut _, user_id: i64) -> Result<Option<UserData>, PersistenceError> {
    debug!("Looking up user ID: {}", user_id);

    let row: Option<UserRow> = users::table
        .filter(users::user_id.eq(user_id))
        .select(UserRow::as_select())
        .first(conn)
        .optional()?;

    row.map(UserData::try_from).transpose()
}
}

backend_fn! {
/// Lists all users ordered by ID.
///
/// # Errors
///
/// Returns an error if the database query fails or a stored role is not
/// recognized.
pub fn list_users(conn: &mut _) -> Result<Vec<UserData>, PersistenceError> {
    let rows: Vec<UserRow> = users::table
        .select(UserRow::as_select())
        .order(users::user_id.asc())
        .load(conn)?;

    rows.into_iter().map(UserData::try_from).collect()
}
}
