// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Speaker scores.
//!
//! Speaks are stored in a `DECIMAL(4,2)` column, so the representable range
//! is `-99.99..=99.99` with two fractional digits. MySQL rounds on insert
//! while `SQLite` stores whatever it is given; normalizing here keeps both
//! backends holding the same value.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Largest magnitude a `DECIMAL(4,2)` column can hold, in hundredths.
const MAX_HUNDREDTHS: i32 = 9_999;

/// A speaker score with hundredths precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Speaks {
    hundredths: i32,
}

impl Speaks {
    /// Creates a score from a floating point value, rounding half away from
    /// zero to the nearest hundredth.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not finite or does not fit in
    /// `DECIMAL(4,2)` after rounding.
    pub fn new(value: f64) -> Result<Self, DomainError> {
        if !value.is_finite() {
            return Err(DomainError::InvalidSpeaks(format!(
                "{value} is not a finite number"
            )));
        }

        let scaled: f64 = (value * 100.0).round();
        if scaled.abs() > f64::from(MAX_HUNDREDTHS) {
            return Err(DomainError::InvalidSpeaks(format!(
                "{value} does not fit in DECIMAL(4,2)"
            )));
        }

        // Bounded by MAX_HUNDREDTHS above.
        #[allow(clippy::cast_possible_truncation)]
        let hundredths: i32 = scaled as i32;
        Ok(Self { hundredths })
    }

    /// Creates a score from a whole number of hundredths.
    ///
    /// # Errors
    ///
    /// Returns an error if the magnitude exceeds 9999 hundredths.
    pub fn from_hundredths(hundredths: i32) -> Result<Self, DomainError> {
        if hundredths.abs() > MAX_HUNDREDTHS {
            return Err(DomainError::InvalidSpeaks(format!(
                "{hundredths} hundredths does not fit in DECIMAL(4,2)"
            )));
        }
        Ok(Self { hundredths })
    }

    /// Returns the score in hundredths.
    #[must_use]
    pub const fn hundredths(&self) -> i32 {
        self.hundredths
    }

    /// Returns the score as a floating point value for binding to SQL.
    #[must_use]
    pub fn value(&self) -> f64 {
        f64::from(self.hundredths) / 100.0
    }
}

impl TryFrom<f64> for Speaks {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Speaks> for f64 {
    fn from(speaks: Speaks) -> Self {
        speaks.value()
    }
}

impl std::fmt::Display for Speaks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign: &str = if self.hundredths < 0 { "-" } else { "" };
        let magnitude: u32 = self.hundredths.unsigned_abs();
        write!(f, "{sign}{}.{:02}", magnitude / 100, magnitude % 100)
    }
}
