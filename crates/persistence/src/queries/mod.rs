// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Query modules for persistence layer.
//!
//! This module contains all read-only queries for the persistence layer.
//!
//! ## Module Organization
//!
//! - `tournaments`: Tournaments, rounds and matchups
//! - `participants`: Teams, debaters, judges, speaking roles and users
//! - `performances`: Speaker points per debater and round
//! - `assignments`: Tournament/user assignments
//! - `views`: `TournamentDetails` and `DebaterPerformanceOverview`
//!
//! ## Backend-Specific Functions
//!
//! All query functions are generated in backend-specific monomorphic versions:
//! - Functions suffixed with `_sqlite` for `SQLite`
//! - Functions suffixed with `_mysql` for `MySQL`/`MariaDB`
//!
//! The `Persistence` adapter in `lib.rs` dispatches to the appropriate version
//! based on the active backend connection.

pub mod assignments;
pub mod participants;
pub mod performances;
pub mod tournaments;
pub mod views;

pub use assignments::{
    is_user_assigned_mysql, is_user_assigned_sqlite, list_tournament_users_mysql,
    list_tournament_users_sqlite,
};
pub use participants::{
    get_debater_mysql, get_debater_sqlite, get_user_mysql, get_user_sqlite, list_debaters_mysql,
    list_debaters_sqlite, list_judges_mysql, list_judges_sqlite, list_speaking_roles_mysql,
    list_speaking_roles_sqlite, list_teams_mysql, list_teams_sqlite, list_users_mysql,
    list_users_sqlite,
};
pub use performances::{
    list_performances_for_debater_mysql, list_performances_for_debater_sqlite,
    list_performances_for_round_mysql, list_performances_for_round_sqlite,
};
pub use tournaments::{
    get_round_mysql, get_round_sqlite, get_tournament_mysql, get_tournament_sqlite,
    list_matchups_mysql, list_matchups_sqlite, list_rounds_mysql, list_rounds_sqlite,
    list_tournaments_mysql, list_tournaments_sqlite,
};
pub use views::{
    debater_performance_for_tournament_mysql, debater_performance_for_tournament_sqlite,
    debater_performance_overview_mysql, debater_performance_overview_sqlite,
    tournament_details_mysql, tournament_details_sqlite,
};
