// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Team, debater, judge and user mutations.

use apda_tab_domain::{DebaterExperience, JudgeExperience, UserRole, validate_name};
use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::info;

use crate::backend::PersistenceBackend;
use crate::data_models::NewDebater;
use crate::diesel_schema::{debaters, judges, teams, users};
use crate::error::PersistenceError;

backend_fn! {
/// Creates a team.
///
/// # Errors
///
/// Returns an error if the name is invalid or the insert fails.
pub fn add_team(conn: &mut _, name: &str) -> Result<i64, PersistenceError> {
    validate_name("Team", name)?;

    diesel::insert_into(teams::table)
        .values(teams::name.eq(name))
        .execute(conn)?;

    let team_id: i64 = conn.get_last_insert_rowid()?;

    info!(team_id, "Created team '{}'", name);

    Ok(team_id)
}
}

backend_fn! {
/// Deletes a team.
///
/// Debaters on the team are kept with their team cleared.
///
/// # Errors
///
/// Returns `NotFound` if no team has this ID.
pub fn delete_team(conn: &mut _, team_id: i64) -> Result<(), PersistenceError> {
    info!("Deleting team ID: {}", team_id);

    let deleted: usize =
        diesel::delete(teams::table.filter(teams::team_id.eq(team_id))).execute(conn)?;

    if deleted == 0 {
        return Err(PersistenceError::NotFound(format!("Team {team_id} not found")));
    }

    Ok(())
}
}

backend_fn! {
/// Creates a debater, optionally on a team.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `name` - The debater's name
/// * `experience_level` - Novice or Varsity
/// * `team_id` - The team, or `None` for an unaffiliated debater
///
/// # Errors
///
/// Returns an error if the name is invalid, or `ForeignKeyViolation` if the
/// team does not exist.
pub fn add_debater(
    conn: &mut _,
    name: &str,
    experience_level: DebaterExperience,
    team_id: Option<i64>,
) -> Result<i64, PersistenceError> {
    validate_name("Debater", name)?;

    diesel::insert_into(debaters::table)
        .values((
            debaters::name.eq(name),
            debaters::experience_level.eq(experience_level.as_str()),
            debaters::team_id.eq(team_id),
        ))
        .execute(conn)?;

    let debater_id: i64 = conn.get_last_insert_rowid()?;

    info!(debater_id, ?team_id, "Created {} debater '{}'", experience_level, name);

    Ok(debater_id)
}
}

backend_fn! {
/// Inserts several debaters in one transaction, returning their IDs in
/// input order.
///
/// # Errors
///
/// Returns the first failing insert's error (an invalid name, or
/// `ForeignKeyViolation` for an unknown team). Nothing is committed in
/// that case.
pub fn add_debaters(
    conn: &mut _,
    new_debaters: &[NewDebater],
) -> Result<Vec<i64>, PersistenceError> {
    conn.transaction::<_, PersistenceError, _>(|conn| {
        let mut ids: Vec<i64> = Vec::with_capacity(new_debaters.len());

        for debater in new_debaters {
            validate_name("Debater", &debater.name)?;

            diesel::insert_into(debaters::table)
                .values((
                    debaters::name.eq(&debater.name),
                    debaters::experience_level.eq(debater.experience_level.as_str()),
                    debaters::team_id.eq(debater.team_id),
                ))
                .execute(conn)?;

            ids.push(conn.get_last_insert_rowid()?);
        }

        info!(count = ids.len(), "Created debaters in one batch");

        Ok(ids)
    })
}
}

backend_fn! {
/// Deletes a debater together with their performances.
///
/// # Errors
///
/// Returns `NotFound` if no debater has this ID.
pub fn delete_debater(conn: &mut _, debater_id: i64) -> Result<(), PersistenceError> {
    info!("Deleting debater ID: {}", debater_id);

    let deleted: usize = diesel::delete(debaters::table.filter(debaters::debater_id.eq(debater_id)))
        .execute(conn)?;

    if deleted == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Debater {debater_id} not found"
        )));
    }

    Ok(())
}
}

backend_fn! {
/// Creates a judge.
///
/// Judges are independent of users; see `assign_judge_to_tournament`.
///
/// # Errors
///
/// Returns an error if the name is invalid or the insert fails.
pub fn add_judge(
    conn: &mut _,
    name: &str,
    experience_level: JudgeExperience,
) -> Result<i64, PersistenceError> {
    validate_name("Judge", name)?;

    diesel::insert_into(judges::table)
        .values((
            judges::name.eq(name),
            judges::experience_level.eq(experience_level.as_str()),
        ))
        .execute(conn)?;

    let judge_id: i64 = conn.get_last_insert_rowid()?;

    info!(judge_id, "Created {} judge '{}'", experience_level, name);

    Ok(judge_id)
}
}

backend_fn! {
/// Deletes a judge.
///
/// # Errors
///
/// Returns `NotFound` if no judge has this ID.
pub fn delete_judge(conn: &mut _, judge_id: i64) -> Result<(), PersistenceError> {
    info!("Deleting judge ID: {}", judge_id);

    let deleted: usize =
        diesel::delete(judges::table.filter(judges::judge_id.eq(judge_id))).execute(conn)?;

    if deleted == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Judge {judge_id} not found"
        )));
    }

    Ok(())
}
}

backend_fn! {
/// Creates a system user.
///
/// # Errors
///
/// Returns an error if the name is invalid or the insert fails.
pub fn add_user(conn: &mut _, name: &str, role: UserRole) -> Result<i64, PersistenceError> {
    validate_name("User", name)?;

    diesel::insert_into(users::table)
        .values((users::name.eq(name), users::role.eq(role.as_str())))
        .execute(conn)?;

    let user_id: i64 = conn.get_last_insert_rowid()?;

    info!(user_id, "Created {} user '{}'", role, name);

    Ok(user_id)
}
}

backend_fn! {
/// Deletes a user and all of their tournament assignments.
///
/// # Errors
///
/// Returns `NotFound` if no user has this ID.
pub fn delete_user(conn: &mut _, user_id: i64) -> Result<(), PersistenceError> {
    info!("Deleting user ID: {}", user_id);

    let deleted: usize =
        diesel::delete(users::table.filter(users::user_id.eq(user_id))).execute(conn)?;

    if deleted == 0 {
        return Err(PersistenceError::NotFound(format!("User {user_id} not found")));
    }

    Ok(())
}
}
