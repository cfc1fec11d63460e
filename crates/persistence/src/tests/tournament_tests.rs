// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tournament, round and matchup persistence tests.

use time::Month;

use super::test_date;
use crate::{PersistenceError, SqlitePersistence};

#[test]
fn test_add_tournament_twice_yields_distinct_rows() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();

    let first = persistence
        .add_tournament("Test Cup", test_date(2025, Month::May, 1))
        .unwrap();
    let second = persistence
        .add_tournament("Test Cup 2", test_date(2025, Month::June, 1))
        .unwrap();

    assert_ne!(first, second);

    let tournaments = persistence.list_tournaments().unwrap();
    assert_eq!(tournaments.len(), 2);
    assert_eq!(tournaments[0].tournament_id, first);
    assert_eq!(tournaments[0].name, "Test Cup");
    assert_eq!(tournaments[0].date, test_date(2025, Month::May, 1));
    assert_eq!(tournaments[1].tournament_id, second);
    assert_eq!(tournaments[1].name, "Test Cup 2");
    assert_eq!(tournaments[1].date, test_date(2025, Month::June, 1));
}

#[test]
fn test_same_name_and_date_is_not_deduplicated() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();
    let date = test_date(2025, Month::May, 1);

    let first = persistence.add_tournament("Test Cup", date).unwrap();
    let second = persistence.add_tournament("Test Cup", date).unwrap();

    assert_ne!(first, second);
    assert_eq!(persistence.list_tournaments().unwrap().len(), 2);
}

#[test]
fn test_list_tournaments_orders_by_date() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();

    let later = persistence
        .add_tournament("Autumn Open", test_date(2025, Month::October, 4))
        .unwrap();
    let earlier = persistence
        .add_tournament("Spring Open", test_date(2025, Month::March, 8))
        .unwrap();

    let ids: Vec<i64> = persistence
        .list_tournaments()
        .unwrap()
        .iter()
        .map(|t| t.tournament_id)
        .collect();
    assert_eq!(ids, vec![earlier, later]);
}

#[test]
fn test_get_tournament_returns_none_for_unknown_id() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();
    assert!(persistence.get_tournament(42).unwrap().is_none());
}

#[test]
fn test_add_tournament_stores_empty_name() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();

    let tournament_id = persistence
        .add_tournament("", test_date(2025, Month::May, 1))
        .unwrap();

    let tournament = persistence.get_tournament(tournament_id).unwrap().unwrap();
    assert_eq!(tournament.name, "");
    assert_eq!(persistence.tournament_details().unwrap().len(), 1);
}

#[test]
fn test_duplicate_round_numbers_are_allowed() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();
    let tournament_id = persistence
        .add_tournament("Test Cup", test_date(2025, Month::May, 1))
        .unwrap();

    let first = persistence.add_round(tournament_id, 1).unwrap();
    let second = persistence.add_round(tournament_id, 1).unwrap();

    let rounds = persistence.list_rounds(tournament_id).unwrap();
    assert_eq!(rounds.len(), 2);
    assert!(rounds.iter().all(|r| r.round_number == 1));
    assert_eq!(rounds[0].round_id, first);
    assert_eq!(rounds[1].round_id, second);
}

#[test]
fn test_add_round_accepts_zero_and_negative_round_numbers() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();
    let tournament_id = persistence
        .add_tournament("Test Cup", test_date(2025, Month::May, 1))
        .unwrap();

    let zero = persistence.add_round(tournament_id, 0).unwrap();
    let negative = persistence.add_round(tournament_id, -2).unwrap();

    assert_eq!(persistence.get_round(zero).unwrap().unwrap().round_number, 0);
    assert_eq!(
        persistence.get_round(negative).unwrap().unwrap().round_number,
        -2
    );
    assert_eq!(persistence.tournament_details().unwrap()[0].number_of_rounds, 2);
}

#[test]
fn test_add_round_for_missing_tournament_is_foreign_key_violation() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();

    let result = persistence.add_round(999, 1);

    assert!(
        matches!(result, Err(PersistenceError::ForeignKeyViolation(_))),
        "unexpected result: {result:?}"
    );
}

#[test]
fn test_rounds_are_listed_by_round_number() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();
    let tournament_id = persistence
        .add_tournament("Test Cup", test_date(2025, Month::May, 1))
        .unwrap();

    persistence.add_round(tournament_id, 3).unwrap();
    persistence.add_round(tournament_id, 1).unwrap();
    persistence.add_round(tournament_id, 2).unwrap();

    let numbers: Vec<i32> = persistence
        .list_rounds(tournament_id)
        .unwrap()
        .iter()
        .map(|r| r.round_number)
        .collect();
    assert_eq!(numbers, vec![1, 2, 3]);
}

#[test]
fn test_matchups_belong_to_their_round() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();
    let tournament_id = persistence
        .add_tournament("Test Cup", test_date(2025, Month::May, 1))
        .unwrap();
    let round_one = persistence.add_round(tournament_id, 1).unwrap();
    let round_two = persistence.add_round(tournament_id, 2).unwrap();

    let m1 = persistence.add_matchup(round_one).unwrap();
    let m2 = persistence.add_matchup(round_one).unwrap();
    let m3 = persistence.add_matchup(round_two).unwrap();

    let round_one_ids: Vec<i64> = persistence
        .list_matchups(round_one)
        .unwrap()
        .iter()
        .map(|m| m.matchup_id)
        .collect();
    assert_eq!(round_one_ids, vec![m1, m2]);

    let round_two_matchups = persistence.list_matchups(round_two).unwrap();
    assert_eq!(round_two_matchups.len(), 1);
    assert_eq!(round_two_matchups[0].matchup_id, m3);
    assert_eq!(round_two_matchups[0].round_id, round_two);
}

#[test]
fn test_add_matchup_for_missing_round_is_foreign_key_violation() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();

    let result = persistence.add_matchup(12345);

    assert!(matches!(
        result,
        Err(PersistenceError::ForeignKeyViolation(_))
    ));
}

#[test]
fn test_delete_unknown_tournament_is_not_found() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();

    let result = persistence.delete_tournament(7);

    assert!(matches!(result, Err(PersistenceError::NotFound(_))));
}
