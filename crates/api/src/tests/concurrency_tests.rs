// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Concurrent access tests.
//!
//! Writers to one tournament are serialized by its lock; readers must only
//! ever observe complete states.

use std::thread;

use bracketcraft_domain::{BracketSide, TournamentId};

use crate::{
    BracketView, MatchInfo, RegisterParticipantRequest, SubmitResultRequest, TournamentService,
};

use super::helpers::{
    create_test_cause, create_test_organizer, create_test_referee, match_id, setup_draft,
    setup_locked,
};

const PARTICIPANTS: [&str; 8] = ["A", "B", "C", "D", "E", "F", "G", "H"];

#[test]
fn test_concurrent_registrations_are_all_applied_once() {
    let service = TournamentService::new();
    let tournament_id: TournamentId = setup_draft(&service, "single", &[]);

    thread::scope(|scope| {
        for worker in 0..4 {
            let service = &service;
            scope.spawn(move || {
                for n in 0..4 {
                    service
                        .register_participant(
                            RegisterParticipantRequest {
                                tournament_id: tournament_id.value(),
                                participant_id: format!("w{worker}-{n}"),
                                display_name: format!("Worker {worker} team {n}"),
                            },
                            &create_test_organizer(),
                            create_test_cause(),
                        )
                        .unwrap();
                }
            });
        }
    });

    assert_eq!(service.list_participants(tournament_id).unwrap().len(), 16);
    let ids: Vec<Option<u64>> = service
        .audit_log(tournament_id)
        .unwrap()
        .iter()
        .map(|e| e.event_id)
        .collect();
    assert_eq!(ids, (1..=17).map(Some).collect::<Vec<_>>());
}

#[test]
fn test_duplicate_submissions_race_to_a_single_result() {
    let service = TournamentService::new();
    let tournament_id: TournamentId = setup_locked(&service, "single", &PARTICIPANTS);

    let successes: usize = thread::scope(|scope| {
        let handles: Vec<_> = (0..6)
            .map(|attempt| {
                let service = &service;
                scope.spawn(move || {
                    let (score_a, score_b) = if attempt % 2 == 0 { (2, 0) } else { (0, 2) };
                    service
                        .submit_result(
                            SubmitResultRequest {
                                match_id: match_id(tournament_id, 1),
                                score_a,
                                score_b,
                            },
                            &create_test_referee(),
                            create_test_cause(),
                        )
                        .is_ok()
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .filter(|ok| *ok)
            .count()
    });

    assert_eq!(successes, 1);
    let submitted: usize = service
        .audit_log(tournament_id)
        .unwrap()
        .iter()
        .filter(|e| e.action.name == "SubmitResult")
        .count();
    assert_eq!(submitted, 1);
}

#[test]
fn test_readers_observe_consistent_brackets_during_play() {
    let service = TournamentService::new();
    let tournament_id: TournamentId = setup_locked(&service, "double", &PARTICIPANTS);

    thread::scope(|scope| {
        let service = &service;

        scope.spawn(move || {
            loop {
                let view: BracketView = service.get_bracket(tournament_id).unwrap();
                let Some(next) = view
                    .winners
                    .iter()
                    .chain(&view.losers)
                    .chain(&view.finals)
                    .flat_map(|round| &round.matches)
                    .find(|m| m.status == "ReadyToPlay")
                    .cloned()
                else {
                    break;
                };
                service
                    .submit_result(
                        SubmitResultRequest {
                            match_id: match_id(tournament_id, next.number),
                            score_a: 3,
                            score_b: 1,
                        },
                        &create_test_referee(),
                        create_test_cause(),
                    )
                    .unwrap();
            }
        });

        for _ in 0..3 {
            scope.spawn(move || {
                for _ in 0..200 {
                    let view: BracketView = service.get_bracket(tournament_id).unwrap();
                    let all: Vec<&MatchInfo> = view
                        .winners
                        .iter()
                        .chain(&view.losers)
                        .chain(&view.finals)
                        .flat_map(|round| &round.matches)
                        .collect();

                    for m in &all {
                        if m.status == "Completed" && !m.bye {
                            let winner: &String = m.winner.as_ref().unwrap();
                            assert!(m.slot_a == *winner || m.slot_b == *winner);
                            assert!(m.score_a.is_some() && m.score_b.is_some());
                        }
                        if m.status == "ReadyToPlay" {
                            for slot in [&m.slot_a, &m.slot_b] {
                                assert!(!slot.starts_with("winner of"));
                                assert!(!slot.starts_with("loser of"));
                            }
                        }
                    }
                    assert_eq!(view.champion.is_some(), view.tournament.lifecycle == "Completed");
                }
            });
        }
    });

    assert!(service.get_champion(tournament_id).unwrap().is_some());
    let losers_round = service
        .get_round(tournament_id, BracketSide::Losers, 0)
        .unwrap();
    assert!(losers_round.iter().all(|m| m.status == "Completed"));
}
