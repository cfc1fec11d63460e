// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Backend initialization tests.
//!
//! Every other test module also exercises initialization implicitly through
//! `SqlitePersistence::new_in_memory()`. These tests pin the startup checks
//! themselves.

use apda_tab_domain::SpeakingRole;
use time::Month;

use super::test_date;
use crate::SqlitePersistence;
use crate::backend::sqlite;

#[test]
fn test_persistence_initialization() {
    let result: Result<SqlitePersistence, crate::error::PersistenceError> =
        SqlitePersistence::new_in_memory();
    assert!(result.is_ok());
}

#[test]
fn test_multiple_in_memory_instances_are_isolated() {
    let mut db1 = SqlitePersistence::new_in_memory().unwrap();
    let mut db2 = SqlitePersistence::new_in_memory().unwrap();

    db1.add_tournament("Isolated Cup", test_date(2025, Month::May, 1))
        .unwrap();

    assert_eq!(db1.list_tournaments().unwrap().len(), 1);
    assert_eq!(
        db2.list_tournaments().unwrap().len(),
        0,
        "db2 should not see db1's tournament"
    );
}

#[test]
fn test_foreign_key_enforcement_is_enabled() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();
    assert!(persistence.verify_foreign_key_enforcement().is_ok());
}

#[test]
fn test_trigger_and_views_exist_after_migrations() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();
    assert!(persistence.verify_schema_objects().is_ok());
    assert!(!persistence.is_mysql());
}

#[test]
fn test_speaking_roles_are_seeded() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();

    let roles = persistence.list_speaking_roles().unwrap();

    assert_eq!(roles.len(), 4);
    let seeded: Vec<SpeakingRole> = roles.iter().map(|r| r.role).collect();
    assert_eq!(seeded, SpeakingRole::ALL.to_vec());
}

#[test]
fn test_running_migrations_twice_is_a_no_op() {
    let persistence = SqlitePersistence::new_in_memory().unwrap();
    let crate::BackendConnection::Sqlite(mut conn) = persistence.conn else {
        panic!("new_in_memory must produce a SQLite connection");
    };

    sqlite::run_migrations(&mut conn).unwrap();
    sqlite::verify_schema_objects(&mut conn).unwrap();
}

#[test]
fn test_file_database_survives_reopen() {
    let path = std::env::temp_dir().join(format!(
        "apda_tab_reopen_{}_{}.db",
        std::process::id(),
        line!()
    ));
    let _ = std::fs::remove_file(&path);

    {
        let mut persistence = SqlitePersistence::new_with_file(&path).unwrap();
        persistence
            .add_tournament("Durable Cup", test_date(2025, Month::September, 20))
            .unwrap();
    }

    let mut reopened = SqlitePersistence::new_with_file(&path).unwrap();
    let tournaments = reopened.list_tournaments().unwrap();
    assert_eq!(tournaments.len(), 1);
    assert_eq!(tournaments[0].name, "Durable Cup");
    drop(reopened);

    let _ = std::fs::remove_file(&path);
    let _ = std::fs::remove_file(path.with_extension("db-wal"));
    let _ = std::fs::remove_file(path.with_extension("db-shm"));
}
