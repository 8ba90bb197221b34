// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use std::path::PathBuf;

use bracketcraft_api::{AuthenticatedActor, BracketView, Role, TournamentService};

use crate::script::{Script, ScriptParticipant, ScriptResult, ScriptSeeding, run_script};

pub fn demo_path(file: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../demos")
        .join(file)
}

pub fn create_test_actor() -> AuthenticatedActor {
    AuthenticatedActor::new(String::from("cli-test"), Role::Organizer)
}

/// A script with participants `ids` and no results.
pub fn create_script(mode: &str, ids: &[&str]) -> Script {
    Script {
        name: String::from("Test Cup"),
        organizer: None,
        description: None,
        mode: String::from(mode),
        max_participants: 16,
        seeding: ScriptSeeding::RegistrationOrder,
        participants: ids
            .iter()
            .map(|id| ScriptParticipant {
                id: String::from(*id),
                display_name: format!("Team {id}"),
            })
            .collect(),
        roster_csv: None,
        results: Vec::new(),
        roster_content: None,
    }
}

pub const fn result(number: u32, score_a: i64, score_b: i64) -> ScriptResult {
    ScriptResult {
        number,
        score_a,
        score_b,
    }
}

/// Runs a script on a fresh service and returns the final bracket.
pub fn run_to_bracket(script: &Script) -> BracketView {
    let service = TournamentService::new();
    run_script(script, &service, &create_test_actor())
        .expect("Script failed")
        .bracket
}
