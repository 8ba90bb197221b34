// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    Bracket, BracketSide, Match, MatchStatus, Slot, TournamentMode, build_bracket,
};

use super::helpers::{TOURNAMENT, better_seed_wins, match_id, pid, play_out, seed_number, seeded};

fn double(count: usize) -> Bracket {
    build_bracket(TOURNAMENT, &seeded(count), TournamentMode::DoubleElimination).unwrap()
}

fn round_sizes(bracket: &Bracket, side: BracketSide) -> Vec<usize> {
    (0..bracket.round_count(side))
        .map(|r| bracket.get_round(side, r).unwrap().len())
        .collect()
}

/// Plays out a bracket and checks after every result that no participant
/// with two losses still occupies an unfinished match.
fn play_checking_eliminations(bracket: &mut Bracket, slot_a_wins: impl Fn(&Match) -> bool) {
    loop {
        let Some(next) = bracket.ready_matches().first().map(|m| (*m).clone()) else {
            break;
        };
        let (a, b) = if slot_a_wins(&next) { (3, 1) } else { (1, 3) };
        bracket.record_result(next.id, a, b, "referee").unwrap();

        for out in bracket.eliminated() {
            assert_eq!(bracket.losses(out), 2);
            for m in bracket.matches() {
                if m.status != MatchStatus::Completed {
                    assert!(!m.involves(out), "{out} still placed in {}", m.id);
                }
            }
        }
    }
}

#[test]
fn test_structure_for_eight_participants() {
    let bracket = double(8);

    assert_eq!(round_sizes(&bracket, BracketSide::Winners), vec![4, 2, 1]);
    assert_eq!(round_sizes(&bracket, BracketSide::Losers), vec![2, 2, 1, 1]);
    assert_eq!(round_sizes(&bracket, BracketSide::Final), vec![1, 1]);
    assert_eq!(bracket.matches().len(), 15);
}

#[test]
fn test_losers_bracket_feeds_for_eight_participants() {
    let bracket = double(8);
    let source = |n: u32| {
        let m = bracket.get_match(match_id(n)).unwrap();
        (m.source_a.clone(), m.source_b.clone())
    };

    assert_eq!(
        source(8),
        (Slot::LoserOf(match_id(1)), Slot::LoserOf(match_id(2)))
    );
    assert_eq!(
        source(10),
        (Slot::WinnerOf(match_id(8)), Slot::LoserOf(match_id(6)))
    );
    assert_eq!(
        source(11),
        (Slot::WinnerOf(match_id(9)), Slot::LoserOf(match_id(5)))
    );
    assert_eq!(
        source(12),
        (Slot::WinnerOf(match_id(10)), Slot::WinnerOf(match_id(11)))
    );
    assert_eq!(
        source(13),
        (Slot::WinnerOf(match_id(12)), Slot::LoserOf(match_id(7)))
    );
    assert_eq!(
        source(14),
        (Slot::WinnerOf(match_id(7)), Slot::WinnerOf(match_id(13)))
    );
    assert_eq!(
        source(15),
        (Slot::WinnerOf(match_id(14)), Slot::LoserOf(match_id(14)))
    );
}

#[test]
fn test_losers_rounds_are_twice_winners_rounds_minus_two() {
    for count in 3..=40 {
        let bracket = double(count);
        let winners = bracket.round_count(BracketSide::Winners);
        assert_eq!(
            bracket.round_count(BracketSide::Losers),
            2 * (winners - 1),
            "participants: {count}"
        );
    }
}

#[test]
fn test_two_participants_go_straight_to_grand_final() {
    let mut bracket = double(2);

    assert_eq!(bracket.round_count(BracketSide::Losers), 0);
    let grand_final = bracket.deciding_match().clone();
    assert_eq!(grand_final.source_a, Slot::WinnerOf(match_id(1)));
    assert_eq!(grand_final.source_b, Slot::LoserOf(match_id(1)));

    bracket.record_result(match_id(1), 2, 0, "ref").unwrap();
    let grand_final = bracket.deciding_match();
    assert_eq!(grand_final.status, MatchStatus::ReadyToPlay);
    assert_eq!(grand_final.slot_a, Slot::Participant(pid("S1")));
    assert_eq!(grand_final.slot_b, Slot::Participant(pid("S2")));
}

#[test]
fn test_winners_champion_wins_grand_final_without_reset() {
    let mut bracket = double(4);
    play_out(&mut bracket, better_seed_wins);

    assert_eq!(bracket.champion(), Some(&pid("S1")));
    let reset = bracket.reset_match().unwrap();
    assert!(reset.is_void());
    assert_eq!(reset.slot_a, Slot::Bye);
    assert_eq!(reset.slot_b, Slot::Bye);
    assert_eq!(bracket.losses(&pid("S1")), 0);
}

#[test]
fn test_bracket_reset_when_losers_champion_wins_grand_final() {
    let mut bracket = double(4);
    // M1 S1-S4, M2 S2-S3, M3 winners final, M4/M5 losers, M6 grand final, M7 reset
    bracket.record_result(match_id(1), 2, 0, "ref").unwrap();
    bracket.record_result(match_id(2), 2, 0, "ref").unwrap();
    bracket.record_result(match_id(3), 2, 0, "ref").unwrap();
    bracket.record_result(match_id(4), 0, 2, "ref").unwrap();
    bracket.record_result(match_id(5), 0, 2, "ref").unwrap();

    let grand_final = bracket.get_match(match_id(6)).unwrap();
    assert_eq!(grand_final.slot_a, Slot::Participant(pid("S1")));
    assert_eq!(grand_final.slot_b, Slot::Participant(pid("S2")));

    let advancement = bracket.record_result(match_id(6), 1, 2, "ref").unwrap();
    assert_eq!(advancement.champion, None);
    assert_eq!(advancement.eliminated, None);
    assert_eq!(advancement.newly_ready, vec![match_id(7)]);

    let reset = bracket.get_match(match_id(7)).unwrap();
    assert_eq!(reset.slot_a, Slot::Participant(pid("S2")));
    assert_eq!(reset.slot_b, Slot::Participant(pid("S1")));
    assert_eq!(bracket.champion(), None);

    let advancement = bracket.record_result(match_id(7), 2, 1, "ref").unwrap();
    assert_eq!(advancement.champion, Some(pid("S2")));
    assert_eq!(advancement.eliminated, Some(pid("S1")));
    assert_eq!(bracket.champion(), Some(&pid("S2")));
}

#[test]
fn test_three_participant_flow() {
    let mut bracket = double(3);

    // S1 has a bye; the bye's missing loser walks S3 through its first losers match.
    assert!(bracket.get_match(match_id(1)).unwrap().is_bye());
    assert_eq!(
        bracket.get_match(match_id(4)).unwrap().slot_a,
        Slot::Bye
    );

    bracket.record_result(match_id(2), 2, 0, "ref").unwrap();
    let losers_opening = bracket.get_match(match_id(4)).unwrap();
    assert!(losers_opening.is_bye());
    assert_eq!(losers_opening.winner, Some(pid("S3")));

    bracket.record_result(match_id(3), 2, 0, "ref").unwrap();
    let losers_final = bracket.get_match(match_id(5)).unwrap();
    assert_eq!(losers_final.status, MatchStatus::ReadyToPlay);
    assert_eq!(losers_final.slot_a, Slot::Participant(pid("S3")));
    assert_eq!(losers_final.slot_b, Slot::Participant(pid("S2")));
}

#[test]
fn test_elimination_happens_on_second_loss() {
    let mut bracket = double(4);

    let first = bracket.record_result(match_id(1), 2, 0, "ref").unwrap();
    assert_eq!(first.eliminated, None);
    assert_eq!(bracket.losses(&pid("S4")), 1);
    assert!(bracket.eliminated().is_empty());

    bracket.record_result(match_id(2), 2, 0, "ref").unwrap();
    let second = bracket.record_result(match_id(4), 0, 2, "ref").unwrap();
    assert_eq!(second.eliminated, Some(pid("S4")));
    assert_eq!(bracket.eliminated(), vec![&pid("S4")]);
}

#[test]
fn test_no_participant_plays_after_second_loss() {
    let rules: [fn(&Match) -> bool; 4] = [
        better_seed_wins,
        |m| !better_seed_wins(m),
        |_| true,
        |m| (seed_number(m.slot_a.participant().unwrap()) + m.id.number as usize) % 3 != 0,
    ];

    for count in 2..=16 {
        for rule in rules {
            let mut bracket = double(count);
            play_checking_eliminations(&mut bracket, rule);

            let champion = bracket.champion().cloned().unwrap();
            assert!(bracket.losses(&champion) <= 1, "participants: {count}");
            assert_eq!(bracket.eliminated().len(), count - 1);
            assert!(bracket.matches().iter().all(|m| m.status == MatchStatus::Completed));

            let played = bracket.matches().iter().filter(|m| m.is_played()).count();
            let expected = 2 * (count - 1) + usize::from(bracket.losses(&champion));
            assert_eq!(played, expected, "participants: {count}");
        }
    }
}

#[test]
fn test_double_elimination_placements() {
    let mut bracket = double(4);
    play_out(&mut bracket, better_seed_wins);

    let placements = bracket.placements().unwrap();
    let ranks: Vec<(usize, Vec<usize>)> = placements
        .iter()
        .map(|p| (p.rank, p.participants.iter().map(seed_number).collect()))
        .collect();

    assert_eq!(
        ranks,
        vec![(1, vec![1]), (2, vec![2]), (3, vec![3]), (4, vec![4])]
    );
}

#[test]
fn test_reopen_grand_final_restores_pending_reset() {
    let mut bracket = double(2);
    bracket.record_result(match_id(1), 2, 0, "ref").unwrap();
    bracket.record_result(match_id(2), 2, 0, "ref").unwrap();
    assert_eq!(bracket.champion(), Some(&pid("S1")));

    let invalidated = bracket.reopen_match(match_id(2)).unwrap();

    assert_eq!(invalidated, vec![match_id(3)]);
    assert_eq!(bracket.champion(), None);
    let reset = bracket.get_match(match_id(3)).unwrap();
    assert_eq!(reset.status, MatchStatus::Pending);
    assert_eq!(reset.slot_a, Slot::WinnerOf(match_id(2)));
    assert_eq!(reset.slot_b, Slot::LoserOf(match_id(2)));

    bracket.record_result(match_id(2), 0, 2, "ref").unwrap();
    assert_eq!(
        bracket.get_match(match_id(3)).unwrap().status,
        MatchStatus::ReadyToPlay
    );
}

#[test]
fn test_reopen_winners_match_pulls_back_dropped_loser() {
    let mut bracket = double(4);
    bracket.record_result(match_id(1), 2, 0, "ref").unwrap();
    bracket.record_result(match_id(2), 2, 0, "ref").unwrap();
    bracket.record_result(match_id(4), 2, 0, "ref").unwrap();

    let invalidated = bracket.reopen_match(match_id(1)).unwrap();

    assert!(invalidated.contains(&match_id(3)));
    assert!(invalidated.contains(&match_id(4)));
    let losers_opening = bracket.get_match(match_id(4)).unwrap();
    assert_eq!(losers_opening.slot_a, Slot::LoserOf(match_id(1)));
    assert_eq!(losers_opening.slot_b, Slot::Participant(pid("S3")));
    assert_eq!(losers_opening.winner, None);
    assert_eq!(bracket.losses(&pid("S4")), 0);
}
