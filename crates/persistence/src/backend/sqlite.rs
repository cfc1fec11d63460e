// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! SQLite-specific backend utilities.
//!
//! `SQLite` needs two things the `MySQL` schema gets for free: foreign key
//! enforcement must be switched on per connection (otherwise none of the
//! cascades fire), and there are no stored procedures, so the procedure
//! contracts are carried by the Rust adapter alone.

use diesel::dsl::sql;
use diesel::prelude::*;
use diesel::sql_types::{BigInt, Integer, Text};
use diesel::{Connection, RunQueryDsl, SqliteConnection};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::{debug, info};

use super::{DUPLICATE_GUARD_TRIGGER, REQUIRED_VIEWS};
use crate::error::PersistenceError;

/// SQLite-specific migrations.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Helper row struct for PRAGMA queries.
///
/// Diesel has no PRAGMA DSL.
#[derive(QueryableByName)]
struct PragmaRow {
    #[diesel(sql_type = Integer)]
    foreign_keys: i32,
}

#[derive(QueryableByName)]
struct CatalogCount {
    #[diesel(sql_type = BigInt)]
    count: i64,
}

/// Helper function to get the last inserted row ID.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn get_last_insert_rowid(conn: &mut SqliteConnection) -> Result<i64, PersistenceError> {
    Ok(diesel::select(sql::<BigInt>("last_insert_rowid()")).get_result(conn)?)
}

/// Verifies that foreign key enforcement is enabled.
///
/// # Errors
///
/// Returns an error if foreign key enforcement is not enabled.
pub fn verify_foreign_key_enforcement(conn: &mut SqliteConnection) -> Result<(), PersistenceError> {
    let foreign_keys_enabled: i32 = diesel::sql_query("PRAGMA foreign_keys")
        .get_result::<PragmaRow>(conn)?
        .foreign_keys;

    if foreign_keys_enabled == 0 {
        return Err(PersistenceError::ForeignKeyEnforcementNotEnabled);
    }

    info!("SQLite foreign key enforcement is enabled");
    Ok(())
}

fn count_catalog_objects(
    conn: &mut SqliteConnection,
    object_type: &str,
    name: &str,
) -> Result<i64, PersistenceError> {
    let row: CatalogCount = diesel::sql_query(
        "SELECT COUNT(*) AS count FROM sqlite_master WHERE type = ? AND name = ?",
    )
    .bind::<Text, _>(object_type)
    .bind::<Text, _>(name)
    .get_result(conn)?;
    Ok(row.count)
}

/// Verifies that the duplicate-guard trigger and the reporting views exist.
///
/// # Errors
///
/// Returns an error if any of them is missing.
pub fn verify_schema_objects(conn: &mut SqliteConnection) -> Result<(), PersistenceError> {
    if count_catalog_objects(conn, "trigger", DUPLICATE_GUARD_TRIGGER)? == 0 {
        return Err(PersistenceError::InitializationError(format!(
            "Trigger {DUPLICATE_GUARD_TRIGGER} is missing"
        )));
    }

    for view in REQUIRED_VIEWS {
        if count_catalog_objects(conn, "view", view)? == 0 {
            return Err(PersistenceError::InitializationError(format!(
                "View {view} is missing"
            )));
        }
    }

    debug!("SQLite schema objects present");
    Ok(())
}

/// Run pending migrations on the provided connection.
///
/// # Errors
///
/// Returns an error if migration execution fails.
pub fn run_migrations(
    conn: &mut SqliteConnection,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    info!("Running SQLite database migrations");
    conn.run_pending_migrations(MIGRATIONS)?;
    Ok(())
}

/// Initialize a `SQLite` database at the given URL and run migrations.
///
/// # Arguments
///
/// * `database_url` - The `SQLite` database URL (e.g., `":memory:"` or file path)
///
/// # Errors
///
/// Returns an error if connection or migration fails.
pub fn initialize_database(database_url: &str) -> Result<SqliteConnection, PersistenceError> {
    info!("Initializing SQLite database at: {}", database_url);

    let mut conn: SqliteConnection = SqliteConnection::establish(database_url)
        .map_err(|e| PersistenceError::DatabaseConnectionFailed(e.to_string()))?;

    // Per-connection setting; must precede any write.
    diesel::sql_query("PRAGMA foreign_keys = ON")
        .execute(&mut conn)
        .map_err(|e| PersistenceError::QueryFailed(e.to_string()))?;

    run_migrations(&mut conn).map_err(|e| PersistenceError::MigrationFailed(e.to_string()))?;

    Ok(conn)
}

/// Enable WAL mode for file-based `SQLite` databases.
///
/// # Errors
///
/// Returns an error if the PRAGMA statement fails.
pub fn enable_wal_mode(conn: &mut SqliteConnection) -> Result<(), PersistenceError> {
    diesel::sql_query("PRAGMA journal_mode = WAL")
        .execute(conn)
        .map_err(|e| PersistenceError::QueryFailed(e.to_string()))?;
    Ok(())
}
