// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Database backend-specific code.
//!
//! Connection setup, migrations and the handful of catalog queries that
//! Diesel DSL cannot express live here. Everything that touches tournament
//! data lives in `queries/` and `mutations/` and must run unchanged on
//! every backend.
//!
//! ## Backend Support
//!
//! - `sqlite`: `SQLite` backend (default for development and testing)
//! - `mysql`: MySQL/MariaDB backend (validated via opt-in tests)
//!
//! The stored procedures `AddTournament` and `AssignJudgeToTournament` only
//! exist on `MySQL`; `SQLite` has no procedure support. The Rust adapter
//! performs the same single-row inserts on both backends, so callers never
//! depend on the procedures being present.

pub mod mysql;
pub mod sqlite;

use diesel::{Connection, MysqlConnection, SqliteConnection};

use crate::error::PersistenceError;

/// Name of the duplicate-guard trigger on `Tournament_User`.
pub const DUPLICATE_GUARD_TRIGGER: &str = "before_tournament_user_insert";

/// Views every backend must provide.
pub const REQUIRED_VIEWS: [&str; 2] = ["TournamentDetails", "DebaterPerformanceOverview"];

/// Trait for backend-specific operations.
///
/// Implemented for both `SqliteConnection` and `MysqlConnection` so that
/// query and mutation bodies generated by `backend_fn!` can call these
/// helpers without knowing which backend they run on.
pub trait PersistenceBackend: Connection {
    /// Retrieves the last inserted row ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    fn get_last_insert_rowid(&mut self) -> Result<i64, PersistenceError>;

    /// Verifies that foreign key enforcement is enabled.
    ///
    /// Cascades and set-null actions are silently skipped without it, so
    /// this is checked before any adapter is handed out.
    ///
    /// # Errors
    ///
    /// Returns an error if foreign key enforcement is not enabled.
    fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError>;

    /// Verifies that the duplicate-guard trigger and both views exist.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first missing schema object.
    fn verify_schema_objects(&mut self) -> Result<(), PersistenceError>;
}

impl PersistenceBackend for SqliteConnection {
    fn get_last_insert_rowid(&mut self) -> Result<i64, PersistenceError> {
        sqlite::get_last_insert_rowid(self)
    }

    fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError> {
        sqlite::verify_foreign_key_enforcement(self)
    }

    fn verify_schema_objects(&mut self) -> Result<(), PersistenceError> {
        sqlite::verify_schema_objects(self)
    }
}

impl PersistenceBackend for MysqlConnection {
    fn get_last_insert_rowid(&mut self) -> Result<i64, PersistenceError> {
        mysql::get_last_insert_rowid(self)
    }

    fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError> {
        mysql::verify_foreign_key_enforcement(self)
    }

    fn verify_schema_objects(&mut self) -> Result<(), PersistenceError> {
        mysql::verify_schema_objects(self)
    }
}
