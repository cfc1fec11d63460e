// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Backend-agnostic mutation modules.
//!
//! This module contains all state-changing operations for the persistence layer.
//! Mutations use Diesel DSL exclusively; the only backend-specific helper is
//! `get_last_insert_rowid()`, reached through the `PersistenceBackend` trait.
//!
//! ## Module Organization
//!
//! - `tournaments`: Tournaments, rounds and matchups
//! - `participants`: Teams, debaters, judges and users
//! - `performances`: Recording speaker points
//! - `assignments`: Tournament/user assignments, including judges
//! - `sample`: The demonstration data set

pub mod assignments;
pub mod participants;
pub mod performances;
pub mod sample;
pub mod tournaments;

pub use assignments::{
    assign_judge_to_tournament_mysql, assign_judge_to_tournament_sqlite,
    assign_user_to_tournament_mysql, assign_user_to_tournament_sqlite,
};
pub use participants::{
    add_debater_mysql, add_debater_sqlite, add_debaters_mysql, add_debaters_sqlite,
    add_judge_mysql, add_judge_sqlite, add_team_mysql, add_team_sqlite, add_user_mysql,
    add_user_sqlite, delete_debater_mysql, delete_debater_sqlite, delete_judge_mysql,
    delete_judge_sqlite, delete_team_mysql, delete_team_sqlite, delete_user_mysql,
    delete_user_sqlite,
};
pub use performances::{record_performance_mysql, record_performance_sqlite};
pub use sample::{
    SAMPLE_TOURNAMENT_DATE, SAMPLE_TOURNAMENT_NAME, load_sample_data_mysql,
    load_sample_data_sqlite,
};
pub use tournaments::{
    add_matchup_mysql, add_matchup_sqlite, add_round_mysql, add_round_sqlite,
    add_tournament_mysql, add_tournament_sqlite, delete_round_mysql, delete_round_sqlite,
    delete_tournament_mysql, delete_tournament_sqlite,
};
