// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Cascading delete behavior.
//!
//! Deleting an ancestor removes every dependent row in the same statement;
//! deleting a team only detaches its debaters.

use apda_tab_domain::UserRole;

use super::{create_scored_tournament, create_user};
use crate::SqlitePersistence;

#[test]
fn test_deleting_tournament_removes_rounds_matchups_and_performances() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();
    let scored = create_scored_tournament(&mut persistence, "Test Cup");

    persistence.delete_tournament(scored.tournament_id).unwrap();

    assert!(persistence.get_tournament(scored.tournament_id).unwrap().is_none());
    assert!(persistence.list_rounds(scored.tournament_id).unwrap().is_empty());
    for round_id in &scored.round_ids {
        assert!(persistence.get_round(*round_id).unwrap().is_none());
        assert!(persistence.list_matchups(*round_id).unwrap().is_empty());
        assert!(
            persistence
                .list_performances_for_round(*round_id)
                .unwrap()
                .is_empty()
        );
    }
    assert!(
        persistence
            .list_performances_for_debater(scored.debater_id)
            .unwrap()
            .is_empty()
    );
}

#[test]
fn test_deleting_tournament_keeps_debaters_and_teams() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();
    let scored = create_scored_tournament(&mut persistence, "Test Cup");

    persistence.delete_tournament(scored.tournament_id).unwrap();

    let debater = persistence.get_debater(scored.debater_id).unwrap().unwrap();
    assert_eq!(debater.team_id, Some(scored.team_id));
    assert_eq!(persistence.list_teams().unwrap().len(), 1);
}

#[test]
fn test_deleting_tournament_removes_its_assignments_only() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();
    let doomed = create_scored_tournament(&mut persistence, "Doomed Cup");
    let kept = create_scored_tournament(&mut persistence, "Kept Cup");
    let user_id = create_user(&mut persistence, "Morgan", UserRole::Organizer);

    persistence
        .assign_user_to_tournament(doomed.tournament_id, user_id)
        .unwrap();
    persistence
        .assign_user_to_tournament(kept.tournament_id, user_id)
        .unwrap();

    persistence.delete_tournament(doomed.tournament_id).unwrap();

    assert!(!persistence
        .is_user_assigned(doomed.tournament_id, user_id)
        .unwrap());
    assert!(persistence
        .is_user_assigned(kept.tournament_id, user_id)
        .unwrap());
    assert!(persistence.get_user(user_id).unwrap().is_some());
    assert_eq!(persistence.list_rounds(kept.tournament_id).unwrap().len(), 2);
}

#[test]
fn test_deleting_round_removes_its_matchups_and_performances() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();
    let scored = create_scored_tournament(&mut persistence, "Test Cup");
    let doomed_round = scored.round_ids[0];
    let kept_round = scored.round_ids[1];

    persistence.delete_round(doomed_round).unwrap();

    assert!(persistence.list_matchups(doomed_round).unwrap().is_empty());
    assert_eq!(persistence.list_matchups(kept_round).unwrap().len(), 1);

    let remaining = persistence
        .list_performances_for_debater(scored.debater_id)
        .unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].round_id, kept_round);
    assert_eq!(remaining[0].performance_id, scored.performance_ids[1]);
}

#[test]
fn test_deleting_debater_removes_their_performances() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();
    let scored = create_scored_tournament(&mut persistence, "Test Cup");

    persistence.delete_debater(scored.debater_id).unwrap();

    for round_id in &scored.round_ids {
        assert!(
            persistence
                .list_performances_for_round(*round_id)
                .unwrap()
                .is_empty()
        );
    }
    assert_eq!(persistence.list_rounds(scored.tournament_id).unwrap().len(), 2);
}

#[test]
fn test_deleting_team_clears_debater_team() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();
    let scored = create_scored_tournament(&mut persistence, "Test Cup");

    persistence.delete_team(scored.team_id).unwrap();

    let debater = persistence.get_debater(scored.debater_id).unwrap().unwrap();
    assert_eq!(debater.team_id, None);
    assert_eq!(
        persistence
            .list_performances_for_debater(scored.debater_id)
            .unwrap()
            .len(),
        2,
        "performances survive a team delete"
    );
}

#[test]
fn test_deleting_user_removes_assignments() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();
    let scored = create_scored_tournament(&mut persistence, "Test Cup");
    let user_id = create_user(&mut persistence, "Harper", UserRole::Judge);
    persistence
        .assign_user_to_tournament(scored.tournament_id, user_id)
        .unwrap();

    persistence.delete_user(user_id).unwrap();

    assert!(
        persistence
            .list_tournament_users(scored.tournament_id)
            .unwrap()
            .is_empty()
    );
    assert!(persistence.get_tournament(scored.tournament_id).unwrap().is_some());
}
