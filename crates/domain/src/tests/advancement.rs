// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    Bracket, DomainError, MatchId, MatchStatus, Slot, TournamentId, TournamentMode, build_bracket,
};

use super::helpers::{TOURNAMENT, match_id, named, pid, seeded};

fn four_team_bracket() -> Bracket {
    build_bracket(
        TOURNAMENT,
        &named(&["A", "B", "C", "D"]),
        TournamentMode::SingleElimination,
    )
    .unwrap()
}

#[test]
fn test_record_result_sets_winner_scores_and_verifier() {
    let mut bracket = four_team_bracket();

    let advancement = bracket.record_result(match_id(1), 2, 0, "ref-1").unwrap();

    assert_eq!(advancement.winner, pid("A"));
    assert_eq!(advancement.loser, pid("D"));
    assert_eq!(advancement.eliminated, Some(pid("D")));
    assert!(advancement.newly_ready.is_empty());

    let recorded = bracket.get_match(match_id(1)).unwrap();
    assert_eq!(recorded.status, MatchStatus::Completed);
    assert_eq!(recorded.winner, Some(pid("A")));
    assert_eq!(recorded.score_a, Some(2));
    assert_eq!(recorded.score_b, Some(0));
    assert_eq!(recorded.verified_by.as_deref(), Some("ref-1"));
    assert_eq!(recorded.loser(), Some(&pid("D")));
}

#[test]
fn test_slot_b_can_win() {
    let mut bracket = four_team_bracket();

    let advancement = bracket.record_result(match_id(2), 0, 3, "ref-1").unwrap();

    assert_eq!(advancement.winner, pid("C"));
    assert_eq!(
        bracket.get_match(match_id(3)).unwrap().slot_b,
        Slot::Participant(pid("C"))
    );
}

#[test]
fn test_final_becomes_ready_when_both_semis_complete() {
    let mut bracket = four_team_bracket();

    bracket.record_result(match_id(1), 2, 0, "ref").unwrap();
    assert_eq!(
        bracket.get_match(match_id(3)).unwrap().status,
        MatchStatus::Pending
    );

    let advancement = bracket.record_result(match_id(2), 2, 1, "ref").unwrap();
    assert_eq!(advancement.newly_ready, vec![match_id(3)]);
    assert_eq!(
        bracket.get_match(match_id(3)).unwrap().status,
        MatchStatus::ReadyToPlay
    );
}

#[test]
fn test_record_result_unknown_match() {
    let mut bracket = four_team_bracket();

    let err = bracket
        .record_result(match_id(42), 1, 0, "ref")
        .unwrap_err();
    assert_eq!(err, DomainError::MatchNotFound(match_id(42)));

    let foreign = MatchId::new(TournamentId::new(1), 1);
    let err = bracket.record_result(foreign, 1, 0, "ref").unwrap_err();
    assert_eq!(err, DomainError::MatchNotFound(foreign));
}

#[test]
fn test_record_result_on_pending_match_fails_without_mutation() {
    let mut bracket = four_team_bracket();
    let before = bracket.clone();

    let err = bracket.record_result(match_id(3), 2, 0, "ref").unwrap_err();

    assert_eq!(
        err,
        DomainError::MatchNotReady {
            match_id: match_id(3),
            status: MatchStatus::Pending,
        }
    );
    assert_eq!(bracket, before);
}

#[test]
fn test_record_result_on_completed_match_fails_without_mutation() {
    let mut bracket = four_team_bracket();
    bracket.record_result(match_id(1), 2, 0, "ref").unwrap();
    let before = bracket.clone();

    let err = bracket.record_result(match_id(1), 0, 2, "ref").unwrap_err();

    assert_eq!(
        err,
        DomainError::MatchNotReady {
            match_id: match_id(1),
            status: MatchStatus::Completed,
        }
    );
    assert_eq!(bracket, before);
}

#[test]
fn test_record_result_on_bye_fails() {
    let mut bracket = build_bracket(
        TOURNAMENT,
        &named(&["A", "B", "C"]),
        TournamentMode::SingleElimination,
    )
    .unwrap();

    let err = bracket.record_result(match_id(1), 1, 0, "ref").unwrap_err();

    assert!(matches!(err, DomainError::MatchNotReady { .. }));
}

#[test]
fn test_draw_is_rejected_without_mutation() {
    let mut bracket = four_team_bracket();
    let before = bracket.clone();

    let err = bracket.record_result(match_id(1), 2, 2, "ref").unwrap_err();

    assert_eq!(
        err,
        DomainError::DrawNotAllowed {
            match_id: match_id(1),
            score: 2,
        }
    );
    assert_eq!(bracket, before);
}

#[test]
fn test_negative_score_is_rejected() {
    let mut bracket = four_team_bracket();
    let before = bracket.clone();

    let err = bracket.record_result(match_id(1), -1, 2, "ref").unwrap_err();

    assert!(matches!(err, DomainError::InvalidScore { .. }));
    assert_eq!(bracket, before);
}

#[test]
fn test_oversized_score_is_rejected() {
    let mut bracket = four_team_bracket();

    let err = bracket
        .record_result(match_id(1), i64::from(u32::MAX) + 1, 0, "ref")
        .unwrap_err();

    assert!(matches!(err, DomainError::InvalidScore { .. }));
}

#[test]
fn test_not_ready_is_reported_before_invalid_score() {
    let mut bracket = four_team_bracket();

    let err = bracket.record_result(match_id(3), -5, -5, "ref").unwrap_err();

    assert!(matches!(err, DomainError::MatchNotReady { .. }));
}

#[test]
fn test_champion_is_stable_across_queries() {
    let mut bracket = four_team_bracket();
    bracket.record_result(match_id(1), 2, 0, "ref").unwrap();
    bracket.record_result(match_id(2), 2, 0, "ref").unwrap();
    bracket.record_result(match_id(3), 2, 0, "ref").unwrap();

    let first = bracket.champion().cloned();
    let second = bracket.champion().cloned();

    assert_eq!(first, Some(pid("A")));
    assert_eq!(first, second);
}

#[test]
fn test_reopen_requires_completed_match() {
    let mut bracket = four_team_bracket();

    let err = bracket.reopen_match(match_id(1)).unwrap_err();

    assert!(matches!(err, DomainError::MatchNotReopenable { .. }));
}

#[test]
fn test_reopen_rejects_bye() {
    let mut bracket = build_bracket(TOURNAMENT, &seeded(3), TournamentMode::SingleElimination)
        .unwrap();

    let err = bracket.reopen_match(match_id(1)).unwrap_err();

    assert!(matches!(
        err,
        DomainError::MatchNotReopenable { reason, .. } if reason.contains("byes")
    ));
}

#[test]
fn test_reopen_invalidates_downstream_results() {
    let mut bracket = four_team_bracket();
    bracket.record_result(match_id(1), 2, 0, "ref").unwrap();
    bracket.record_result(match_id(2), 2, 0, "ref").unwrap();
    bracket.record_result(match_id(3), 2, 0, "ref").unwrap();
    assert_eq!(bracket.champion(), Some(&pid("A")));

    let invalidated = bracket.reopen_match(match_id(1)).unwrap();

    assert_eq!(invalidated, vec![match_id(3)]);
    assert_eq!(bracket.champion(), None);

    let reopened = bracket.get_match(match_id(1)).unwrap();
    assert_eq!(reopened.status, MatchStatus::ReadyToPlay);
    assert_eq!(reopened.winner, None);
    assert_eq!(reopened.score_a, None);

    let final_match = bracket.get_match(match_id(3)).unwrap();
    assert_eq!(final_match.status, MatchStatus::Pending);
    assert_eq!(final_match.slot_a, Slot::WinnerOf(match_id(1)));
    assert_eq!(final_match.slot_b, Slot::Participant(pid("B")));
    assert_eq!(final_match.winner, None);
}

#[test]
fn test_reopen_then_recomplete_with_corrected_result() {
    let mut bracket = four_team_bracket();
    bracket.record_result(match_id(1), 2, 0, "ref").unwrap();
    bracket.record_result(match_id(2), 2, 0, "ref").unwrap();

    bracket.reopen_match(match_id(1)).unwrap();
    bracket.record_result(match_id(1), 0, 2, "ref").unwrap();

    let final_match = bracket.get_match(match_id(3)).unwrap();
    assert_eq!(final_match.slot_a, Slot::Participant(pid("D")));
    assert_eq!(final_match.status, MatchStatus::ReadyToPlay);
    assert_eq!(bracket.losses(&pid("A")), 1);
    assert_eq!(bracket.losses(&pid("D")), 0);
}

#[test]
fn test_reopen_leaves_unrelated_matches_alone() {
    let mut bracket = build_bracket(TOURNAMENT, &seeded(8), TournamentMode::SingleElimination)
        .unwrap();
    for number in 1..=4 {
        bracket.record_result(match_id(number), 2, 1, "ref").unwrap();
    }
    bracket.record_result(match_id(5), 2, 1, "ref").unwrap();
    bracket.record_result(match_id(6), 2, 1, "ref").unwrap();

    let invalidated = bracket.reopen_match(match_id(1)).unwrap();

    assert_eq!(invalidated, vec![match_id(5), match_id(7)]);
    let other_semi = bracket.get_match(match_id(6)).unwrap();
    assert_eq!(other_semi.status, MatchStatus::Completed);
    assert_eq!(
        bracket.get_match(match_id(7)).unwrap().slot_b,
        Slot::Participant(other_semi.winner.clone().unwrap())
    );
}

#[test]
fn test_byes_cascade_through_reopen() {
    let mut bracket = build_bracket(TOURNAMENT, &seeded(3), TournamentMode::SingleElimination)
        .unwrap();
    bracket.record_result(match_id(2), 2, 0, "ref").unwrap();
    bracket.record_result(match_id(3), 2, 0, "ref").unwrap();

    bracket.reopen_match(match_id(2)).unwrap();

    let final_match = bracket.get_match(match_id(3)).unwrap();
    assert_eq!(final_match.slot_a, Slot::Participant(pid("S1")));
    assert_eq!(final_match.slot_b, Slot::WinnerOf(match_id(2)));
    assert_eq!(
        bracket.get_match(match_id(1)).unwrap().status,
        MatchStatus::Completed
    );
}
