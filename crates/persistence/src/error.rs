// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use apda_tab_domain::DomainError;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// Message raised by the `before_tournament_user_insert` trigger.
///
/// Must match the text in both migration directories.
pub const DUPLICATE_ASSIGNMENT_MESSAGE: &str = "User is already assigned to this tournament";

/// Errors that can occur during persistence operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// A database error occurred.
    DatabaseError(String),
    /// Database connection failed.
    DatabaseConnectionFailed(String),
    /// Database migration failed.
    MigrationFailed(String),
    /// Query execution failed.
    QueryFailed(String),
    /// Initialization error.
    InitializationError(String),
    /// Foreign key enforcement is not enabled.
    ForeignKeyEnforcementNotEnabled,
    /// An insert or update referenced a row that does not exist.
    ForeignKeyViolation(String),
    /// A primary key or unique constraint rejected a duplicate.
    UniqueViolation(String),
    /// The tournament/user duplicate guard rejected an assignment.
    DuplicateAssignment(String),
    /// A required column was given no value.
    NotNullViolation(String),
    /// A value fell outside a column's permitted domain.
    CheckViolation(String),
    /// An input value failed domain validation before reaching the database.
    Validation(DomainError),
    /// A stored value could not be mapped to a domain type.
    InvalidData(String),
    /// The requested resource was not found.
    NotFound(String),
    /// A general error occurred.
    Other(String),
}

impl PersistenceError {
    /// Returns whether this error is a constraint violation raised by the
    /// database engine (as opposed to an infrastructure failure).
    #[must_use]
    pub const fn is_constraint_violation(&self) -> bool {
        matches!(
            self,
            Self::ForeignKeyViolation(_)
                | Self::UniqueViolation(_)
                | Self::DuplicateAssignment(_)
                | Self::NotNullViolation(_)
                | Self::CheckViolation(_)
        )
    }
}

impl std::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DatabaseError(msg) => write!(f, "Database error: {msg}"),
            Self::DatabaseConnectionFailed(msg) => {
                write!(f, "Database connection failed: {msg}")
            }
            Self::MigrationFailed(msg) => write!(f, "Migration failed: {msg}"),
            Self::QueryFailed(msg) => write!(f, "Query failed: {msg}"),
            Self::InitializationError(msg) => write!(f, "Initialization error: {msg}"),
            Self::ForeignKeyEnforcementNotEnabled => {
                write!(f, "Foreign key enforcement is not enabled")
            }
            Self::ForeignKeyViolation(msg) => write!(f, "Foreign key violation: {msg}"),
            Self::UniqueViolation(msg) => write!(f, "Duplicate key: {msg}"),
            Self::DuplicateAssignment(msg) => write!(f, "{msg}"),
            Self::NotNullViolation(msg) => write!(f, "Missing required value: {msg}"),
            Self::CheckViolation(msg) => write!(f, "Value out of domain: {msg}"),
            Self::Validation(err) => write!(f, "Validation failed: {err}"),
            Self::InvalidData(msg) => write!(f, "Invalid stored data: {msg}"),
            Self::NotFound(msg) => write!(f, "Not found: {msg}"),
            Self::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for PersistenceError {}

impl From<DieselError> for PersistenceError {
    fn from(err: DieselError) -> Self {
        match err {
            DieselError::NotFound => Self::NotFound("Record not found".to_string()),
            DieselError::DatabaseError(kind, info) => {
                let message: String = info.message().to_string();

                // Trigger aborts surface as an unclassified error on both
                // backends; the message text is the only reliable marker.
                if message.contains(DUPLICATE_ASSIGNMENT_MESSAGE) {
                    return Self::DuplicateAssignment(DUPLICATE_ASSIGNMENT_MESSAGE.to_string());
                }

                match kind {
                    DatabaseErrorKind::ForeignKeyViolation => Self::ForeignKeyViolation(message),
                    DatabaseErrorKind::UniqueViolation => Self::UniqueViolation(message),
                    DatabaseErrorKind::NotNullViolation => Self::NotNullViolation(message),
                    DatabaseErrorKind::CheckViolation => Self::CheckViolation(message),
                    _ => Self::DatabaseError(message),
                }
            }
            other => Self::DatabaseError(other.to_string()),
        }
    }
}

impl From<diesel::ConnectionError> for PersistenceError {
    fn from(err: diesel::ConnectionError) -> Self {
        Self::DatabaseConnectionFailed(err.to_string())
    }
}

impl From<DomainError> for PersistenceError {
    fn from(err: DomainError) -> Self {
        Self::Validation(err)
    }
}
