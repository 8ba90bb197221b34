// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Bracket, Match, MatchId, Participant, ParticipantId, TournamentId};

pub const TOURNAMENT: TournamentId = TournamentId::new(7);

pub fn participant(id: &str) -> Participant {
    Participant::new(ParticipantId::new(id), &format!("Team {id}"))
}

pub fn named(ids: &[&str]) -> Vec<Participant> {
    ids.iter().map(|id| participant(id)).collect()
}

/// Participants `S1..=Sn`, where `Sk` is seed `k`.
pub fn seeded(count: usize) -> Vec<Participant> {
    (1..=count).map(|k| participant(&format!("S{k}"))).collect()
}

pub fn seed_number(id: &ParticipantId) -> usize {
    id.value()[1..].parse().unwrap()
}

pub fn match_id(number: u32) -> MatchId {
    MatchId::new(TOURNAMENT, number)
}

pub fn pid(id: &str) -> ParticipantId {
    ParticipantId::new(id)
}

/// Plays every ready match until none remain, letting `slot_a_wins` decide each one.
pub fn play_out(bracket: &mut Bracket, slot_a_wins: impl Fn(&Match) -> bool) {
    loop {
        let Some(next) = bracket.ready_matches().first().map(|m| (*m).clone()) else {
            break;
        };
        let (a, b) = if slot_a_wins(&next) { (2, 1) } else { (0, 2) };
        bracket.record_result(next.id, a, b, "referee").unwrap();
    }
}

/// Decides a match in favour of the better (lower-numbered) seed.
pub fn better_seed_wins(m: &Match) -> bool {
    let a = seed_number(m.slot_a.participant().unwrap());
    let b = seed_number(m.slot_b.participant().unwrap());
    a < b
}
