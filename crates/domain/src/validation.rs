// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::Date;
use time::macros::format_description;

use crate::error::DomainError;

/// Longest name accepted for any entity. Matches `VARCHAR(255)` on `MySQL`.
pub const MAX_NAME_LENGTH: usize = 255;

/// Validates a display name for a tournament, team, debater, judge or user.
///
/// Names must contain at least one non-whitespace character and fit in the
/// `VARCHAR(255)` columns used by the `MySQL` schema.
///
/// # Arguments
///
/// * `entity` - The kind of entity, used in the error message
/// * `name` - The candidate name
///
/// # Errors
///
/// Returns an error if the name is blank or too long.
pub fn validate_name(entity: &'static str, name: &str) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::InvalidName {
            entity,
            reason: String::from("Name cannot be empty"),
        });
    }

    // Rule: length is measured in characters, as VARCHAR does
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(DomainError::InvalidName {
            entity,
            reason: format!("Name cannot exceed {MAX_NAME_LENGTH} characters"),
        });
    }

    Ok(())
}

/// Parses a tournament date in `YYYY-MM-DD` form.
///
/// # Errors
///
/// Returns an error if the input is not a valid calendar date.
pub fn parse_tournament_date(value: &str) -> Result<Date, DomainError> {
    let format = format_description!("[year]-[month]-[day]");
    Date::parse(value.trim(), &format)
        .map_err(|e| DomainError::InvalidDate(format!("'{value}': {e}")))
}
