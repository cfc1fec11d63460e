// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use apda_tab_domain::{DebaterExperience, JudgeExperience, SpeakingRole, Speaks, UserRole};
use serde::{Deserialize, Serialize};
use time::Date;

/// A persisted tournament.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentData {
    pub tournament_id: i64,
    pub name: String,
    pub date: Date,
}

/// A persisted round within a tournament.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundData {
    pub round_id: i64,
    pub tournament_id: i64,
    pub round_number: i32,
}

/// A persisted matchup within a round.
///
/// Matchups carry no team linkage in the schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchupData {
    pub matchup_id: i64,
    pub round_id: i64,
}

/// A persisted team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamData {
    pub team_id: i64,
    pub name: String,
}

/// A persisted debater.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebaterData {
    pub debater_id: i64,
    pub name: String,
    pub experience_level: DebaterExperience,
    /// `None` when the debater never had a team or the team was deleted.
    pub team_id: Option<i64>,
}

/// A debater that has not been inserted yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewDebater {
    pub name: String,
    pub experience_level: DebaterExperience,
    pub team_id: Option<i64>,
}

/// A row of the `Role` reference table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeakingRoleData {
    pub role_id: i64,
    pub role: SpeakingRole,
}

/// A persisted judge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JudgeData {
    pub judge_id: i64,
    pub name: String,
    pub experience_level: JudgeExperience,
}

/// A debater's scored appearance in a round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceData {
    pub performance_id: i64,
    pub debater_id: i64,
    pub round_id: i64,
    pub speaks: Speaks,
    pub feedback: Option<String>,
}

/// A persisted system user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserData {
    pub user_id: i64,
    pub name: String,
    pub role: UserRole,
}

/// One row of the `TournamentDetails` view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentDetailsRow {
    pub tournament_id: i64,
    pub tournament_name: String,
    pub tournament_date: Date,
    pub number_of_rounds: usize,
}

/// One row of the `DebaterPerformanceOverview` view.
///
/// `avg_speaks` is the raw engine average and is not rounded to hundredths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebaterPerformanceRow {
    pub debater_id: i64,
    pub debater_name: String,
    pub tournament_id: i64,
    pub tournament_name: String,
    pub avg_speaks: f64,
}

/// Identifiers created by [`crate::Persistence::load_sample_data`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleDataSummary {
    pub tournament_ids: Vec<i64>,
    pub round_ids: Vec<i64>,
    pub matchup_ids: Vec<i64>,
    pub team_ids: Vec<i64>,
    pub debater_ids: Vec<i64>,
    pub judge_ids: Vec<i64>,
    pub user_ids: Vec<i64>,
    pub performance_ids: Vec<i64>,
}
