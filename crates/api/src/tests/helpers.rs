// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use bracketcraft_audit::Cause;
use bracketcraft_domain::{MatchId, TournamentId};

use crate::{
    AuthenticatedActor, BuildBracketRequest, CloseRegistrationRequest, CreateTournamentRequest,
    RegisterParticipantRequest, Role, SubmitResultRequest, SubmitResultResponse,
    TournamentService,
};

pub fn create_test_organizer() -> AuthenticatedActor {
    AuthenticatedActor::new(String::from("org-123"), Role::Organizer)
}

pub fn create_test_referee() -> AuthenticatedActor {
    AuthenticatedActor::new(String::from("ref-456"), Role::Referee)
}

pub fn create_test_cause() -> Cause {
    Cause::new(String::from("api-req-456"), String::from("API request"))
}

pub fn create_tournament_request(mode: &str, max_participants: u16) -> CreateTournamentRequest {
    CreateTournamentRequest {
        name: String::from("Autumn Open"),
        organizer: Some(String::from("Riverside Esports Club")),
        description: None,
        mode: String::from(mode),
        max_participants,
        starts_on: None,
        ends_on: None,
    }
}

pub fn match_id(tournament: TournamentId, number: u32) -> MatchId {
    MatchId::new(tournament, number)
}

/// Creates a tournament and registers the given participant ids in order.
pub fn setup_draft(service: &TournamentService, mode: &str, ids: &[&str]) -> TournamentId {
    let created = service
        .create_tournament(
            create_tournament_request(mode, 16),
            &create_test_organizer(),
            create_test_cause(),
        )
        .expect("Failed to create tournament");
    let tournament_id: TournamentId = TournamentId::new(created.response.tournament_id);

    for id in ids {
        service
            .register_participant(
                RegisterParticipantRequest {
                    tournament_id: tournament_id.value(),
                    participant_id: String::from(*id),
                    display_name: format!("Team {id}"),
                },
                &create_test_organizer(),
                create_test_cause(),
            )
            .expect("Failed to register participant");
    }
    tournament_id
}

/// Creates a tournament, registers participants, closes registration and builds the bracket.
pub fn setup_locked(service: &TournamentService, mode: &str, ids: &[&str]) -> TournamentId {
    let tournament_id: TournamentId = setup_draft(service, mode, ids);
    service
        .close_registration(
            CloseRegistrationRequest {
                tournament_id: tournament_id.value(),
                shuffle_seed: None,
            },
            &create_test_organizer(),
            create_test_cause(),
        )
        .expect("Failed to close registration");
    service
        .build_bracket(
            BuildBracketRequest {
                tournament_id: tournament_id.value(),
                mode: None,
            },
            &create_test_organizer(),
            create_test_cause(),
        )
        .expect("Failed to build bracket");
    tournament_id
}

pub fn submit(
    service: &TournamentService,
    tournament_id: TournamentId,
    number: u32,
    score_a: i64,
    score_b: i64,
) -> SubmitResultResponse {
    service
        .submit_result(
            SubmitResultRequest {
                match_id: match_id(tournament_id, number),
                score_a,
                score_b,
            },
            &create_test_referee(),
            create_test_cause(),
        )
        .expect("Failed to submit result")
        .response
}
