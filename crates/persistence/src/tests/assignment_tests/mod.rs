// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tournament/user assignment tests, including the duplicate guard.

use apda_tab_domain::{JudgeExperience, UserRole};
use time::Month;

use super::{create_user, test_date};
use crate::{DUPLICATE_ASSIGNMENT_MESSAGE, PersistenceError, SqlitePersistence};

fn create_tournament(persistence: &mut SqlitePersistence) -> i64 {
    persistence
        .add_tournament("Test Cup", test_date(2025, Month::May, 1))
        .unwrap()
}

#[test]
fn test_assign_user_then_list() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();
    let tournament_id = create_tournament(&mut persistence);
    let organizer = create_user(&mut persistence, "Morgan", UserRole::Organizer);
    let judge = create_user(&mut persistence, "Harper", UserRole::Judge);

    persistence
        .assign_user_to_tournament(tournament_id, judge)
        .unwrap();
    persistence
        .assign_user_to_tournament(tournament_id, organizer)
        .unwrap();

    let assigned: Vec<i64> = persistence
        .list_tournament_users(tournament_id)
        .unwrap()
        .iter()
        .map(|u| u.user_id)
        .collect();
    assert_eq!(assigned, vec![organizer, judge]);
}

#[test]
fn test_duplicate_direct_assignment_is_rejected_with_guard_message() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();
    let tournament_id = create_tournament(&mut persistence);
    let user_id = create_user(&mut persistence, "Harper", UserRole::Judge);

    persistence
        .assign_user_to_tournament(tournament_id, user_id)
        .unwrap();
    let result = persistence.assign_user_to_tournament(tournament_id, user_id);

    assert_eq!(
        result,
        Err(PersistenceError::DuplicateAssignment(
            DUPLICATE_ASSIGNMENT_MESSAGE.to_string()
        ))
    );
    assert_eq!(
        persistence.list_tournament_users(tournament_id).unwrap().len(),
        1
    );
}

#[test]
fn test_assign_judge_twice_fails_on_second_call() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();
    let tournament_id = create_tournament(&mut persistence);
    let mut judge_user = 0;
    for name in ["A", "B", "C", "D", "E"] {
        judge_user = create_user(&mut persistence, name, UserRole::Judge);
    }

    persistence
        .assign_judge_to_tournament(judge_user, tournament_id)
        .unwrap();
    let second = persistence.assign_judge_to_tournament(judge_user, tournament_id);

    assert!(matches!(
        second,
        Err(PersistenceError::DuplicateAssignment(_))
    ));
    assert!(second.unwrap_err().is_constraint_violation());
}

#[test]
fn test_direct_and_judge_assignment_share_the_guard() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();
    let tournament_id = create_tournament(&mut persistence);
    let user_id = create_user(&mut persistence, "Harper", UserRole::Judge);

    persistence
        .assign_user_to_tournament(tournament_id, user_id)
        .unwrap();

    assert!(matches!(
        persistence.assign_judge_to_tournament(user_id, tournament_id),
        Err(PersistenceError::DuplicateAssignment(_))
    ));
}

#[test]
fn test_duplicate_error_displays_fixed_message() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();
    let tournament_id = create_tournament(&mut persistence);
    let user_id = create_user(&mut persistence, "Harper", UserRole::Judge);
    persistence
        .assign_judge_to_tournament(user_id, tournament_id)
        .unwrap();

    let err = persistence
        .assign_judge_to_tournament(user_id, tournament_id)
        .unwrap_err();

    assert_eq!(err.to_string(), "User is already assigned to this tournament");
}

#[test]
fn test_assignment_to_missing_tournament_is_foreign_key_violation() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();
    let user_id = create_user(&mut persistence, "Harper", UserRole::Judge);

    let result = persistence.assign_judge_to_tournament(user_id, 999);

    assert!(matches!(
        result,
        Err(PersistenceError::ForeignKeyViolation(_))
    ));
}

#[test]
fn test_assignment_of_missing_user_is_foreign_key_violation() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();
    let tournament_id = create_tournament(&mut persistence);

    let result = persistence.assign_user_to_tournament(tournament_id, 999);

    assert!(matches!(
        result,
        Err(PersistenceError::ForeignKeyViolation(_))
    ));
    assert!(!persistence.is_user_assigned(tournament_id, 999).unwrap());
}

#[test]
fn test_assign_judge_accepts_non_judge_user() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();
    let tournament_id = create_tournament(&mut persistence);
    let organizer = create_user(&mut persistence, "Morgan", UserRole::Organizer);

    persistence
        .assign_judge_to_tournament(organizer, tournament_id)
        .unwrap();

    let assigned = persistence.list_tournament_users(tournament_id).unwrap();
    assert_eq!(assigned.len(), 1);
    assert_eq!(assigned[0].role, UserRole::Organizer);
}

#[test]
fn test_assign_judge_uses_user_ids_not_judge_ids() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();
    let tournament_id = create_tournament(&mut persistence);
    let judge_id = persistence
        .add_judge("Harper Lee", JudgeExperience::Experienced)
        .unwrap();

    // A Judge row with no matching User row cannot be assigned.
    let result = persistence.assign_judge_to_tournament(judge_id, tournament_id);

    assert!(matches!(
        result,
        Err(PersistenceError::ForeignKeyViolation(_))
    ));
}

#[test]
fn test_same_user_may_join_several_tournaments() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();
    let first = create_tournament(&mut persistence);
    let second = create_tournament(&mut persistence);
    let user_id = create_user(&mut persistence, "Harper", UserRole::Judge);

    persistence.assign_user_to_tournament(first, user_id).unwrap();
    persistence.assign_user_to_tournament(second, user_id).unwrap();

    assert!(persistence.is_user_assigned(first, user_id).unwrap());
    assert!(persistence.is_user_assigned(second, user_id).unwrap());
}
