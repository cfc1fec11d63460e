// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Experience level of a debater.
///
/// Stored in the `Debater.experience_level` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DebaterExperience {
    /// First-year competitor.
    Novice,
    /// Open-division competitor.
    Varsity,
}

impl DebaterExperience {
    /// Converts this experience level to its stored string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Novice => "Novice",
            Self::Varsity => "Varsity",
        }
    }
}

impl FromStr for DebaterExperience {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Novice" => Ok(Self::Novice),
            "Varsity" => Ok(Self::Varsity),
            _ => Err(DomainError::InvalidDebaterExperience(s.to_string())),
        }
    }
}

impl std::fmt::Display for DebaterExperience {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Experience level of a judge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JudgeExperience {
    Novice,
    Experienced,
}

impl JudgeExperience {
    /// Converts this experience level to its stored string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Novice => "Novice",
            Self::Experienced => "Experienced",
        }
    }
}

impl FromStr for JudgeExperience {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Novice" => Ok(Self::Novice),
            "Experienced" => Ok(Self::Experienced),
            _ => Err(DomainError::InvalidJudgeExperience(s.to_string())),
        }
    }
}

impl std::fmt::Display for JudgeExperience {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// System-access role of a user.
///
/// This is unrelated to [`SpeakingRole`]: it governs what a person may do
/// in the tabulation system, not where they speak in a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserRole {
    /// Runs a tournament.
    Organizer,
    /// Manages the system as a whole.
    Administrator,
    /// Adjudicates rounds.
    Judge,
}

impl UserRole {
    /// Converts this role to its stored string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Organizer => "Organizer",
            Self::Administrator => "Administrator",
            Self::Judge => "Judge",
        }
    }
}

impl FromStr for UserRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Organizer" => Ok(Self::Organizer),
            "Administrator" => Ok(Self::Administrator),
            "Judge" => Ok(Self::Judge),
            _ => Err(DomainError::InvalidUserRole(s.to_string())),
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The four speaking positions of an APDA parliamentary round.
///
/// Government opens and closes the round; opposition speaks second and
/// third. These are the fixed rows of the `Role` reference table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpeakingRole {
    PrimeMinister,
    MemberOfGovernment,
    LeaderOfOpposition,
    MemberOfOpposition,
}

impl SpeakingRole {
    /// All speaking roles in speaking order.
    pub const ALL: [Self; 4] = [
        Self::PrimeMinister,
        Self::MemberOfGovernment,
        Self::LeaderOfOpposition,
        Self::MemberOfOpposition,
    ];

    /// Converts this role to its stored string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::PrimeMinister => "Prime Minister",
            Self::MemberOfGovernment => "Member of Government",
            Self::LeaderOfOpposition => "Leader of Opposition",
            Self::MemberOfOpposition => "Member of Opposition",
        }
    }

    /// Returns whether this role sits on the government bench.
    #[must_use]
    pub const fn is_government(&self) -> bool {
        matches!(self, Self::PrimeMinister | Self::MemberOfGovernment)
    }
}

impl FromStr for SpeakingRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| DomainError::InvalidSpeakingRole(s.to_string()))
    }
}

impl std::fmt::Display for SpeakingRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
