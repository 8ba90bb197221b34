// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Command, State, apply, apply_create};
use bracketcraft_audit::{Actor, Cause};
use bracketcraft_domain::{
    MatchId, Participant, ParticipantId, SeedingPolicy, TournamentId, TournamentMode,
    TournamentSettings,
};

pub const TOURNAMENT: TournamentId = TournamentId::new(1);

pub fn create_test_actor() -> Actor {
    Actor::new(String::from("org-1"), String::from("organizer"))
}

pub fn create_test_referee() -> Actor {
    Actor::new(String::from("ref-7"), String::from("referee"))
}

pub fn create_test_cause() -> Cause {
    Cause::new(String::from("req-1"), String::from("Organizer request"))
}

pub fn create_test_settings(max_participants: u16) -> TournamentSettings {
    TournamentSettings::new("Spring Cup", TournamentMode::SingleElimination, max_participants)
}

pub fn create_test_participant(id: &str) -> Participant {
    Participant::new(ParticipantId::new(id), &format!("Team {id}"))
}

pub fn match_id(number: u32) -> MatchId {
    MatchId::new(TOURNAMENT, number)
}

pub fn run(state: &State, command: Command) -> State {
    apply(state, command, create_test_actor(), create_test_cause())
        .unwrap()
        .new_state
}

/// A Draft tournament with the given participants registered in order.
pub fn draft_with(ids: &[&str]) -> State {
    let mut state: State = apply_create(
        TOURNAMENT,
        create_test_settings(16),
        create_test_actor(),
        create_test_cause(),
    )
    .unwrap()
    .new_state;
    for id in ids {
        state = run(
            &state,
            Command::RegisterParticipant {
                participant: create_test_participant(id),
            },
        );
    }
    state
}

/// A Locked tournament with a freshly built bracket.
pub fn locked_with(ids: &[&str], mode: TournamentMode) -> State {
    let state: State = run(
        &draft_with(ids),
        Command::CloseRegistration {
            seeding: SeedingPolicy::RegistrationOrder,
        },
    );
    run(&state, Command::BuildBracket { mode })
}

pub fn submit(state: &State, number: u32, score_a: i64, score_b: i64) -> State {
    run(
        state,
        Command::SubmitResult {
            match_id: match_id(number),
            score_a,
            score_b,
        },
    )
}
