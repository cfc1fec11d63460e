// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Domain types for APDA debate tournament tracking.
//!
//! These types sit between callers and the persistence layer: they hold the
//! enumerated column domains (experience levels, roles) and the value rules
//! the database expresses as column types (`DECIMAL(4,2)` speaks, `DATE`).

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod speaks;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use error::DomainError;
pub use speaks::Speaks;
pub use types::{DebaterExperience, JudgeExperience, SpeakingRole, UserRole};
pub use validation::{MAX_NAME_LENGTH, parse_tournament_date, validate_name};
