// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A name field is empty or invalid.
    InvalidName {
        /// The kind of entity the name belongs to (e.g. "tournament").
        entity: &'static str,
        /// Description of the problem.
        reason: String,
    },
    /// A tournament date could not be parsed.
    InvalidDate(String),
    /// A debater experience level is not one of the known values.
    InvalidDebaterExperience(String),
    /// A judge experience level is not one of the known values.
    InvalidJudgeExperience(String),
    /// A user role is not one of the known values.
    InvalidUserRole(String),
    /// A speaking role is not one of the four parliamentary positions.
    InvalidSpeakingRole(String),
    /// A speaker score is not representable as `DECIMAL(4,2)`.
    InvalidSpeaks(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidName { entity, reason } => {
                write!(f, "Invalid {entity} name: {reason}")
            }
            Self::InvalidDate(msg) => write!(f, "Invalid date: {msg}"),
            Self::InvalidDebaterExperience(value) => {
                write!(
                    f,
                    "Invalid debater experience level '{value}'. Must be Novice or Varsity"
                )
            }
            Self::InvalidJudgeExperience(value) => {
                write!(
                    f,
                    "Invalid judge experience level '{value}'. Must be Novice or Experienced"
                )
            }
            Self::InvalidUserRole(value) => {
                write!(
                    f,
                    "Invalid user role '{value}'. Must be Organizer, Administrator or Judge"
                )
            }
            Self::InvalidSpeakingRole(value) => write!(f, "Invalid speaking role '{value}'"),
            Self::InvalidSpeaks(msg) => write!(f, "Invalid speaks: {msg}"),
        }
    }
}

impl std::error::Error for DomainError {}
