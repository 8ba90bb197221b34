// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tournament scripts.
//!
//! A script describes one tournament from creation to its last recorded
//! result. Running it drives a [`TournamentService`] through the same
//! operations an interactive host would call, in order, and stops at the
//! first rejected step.

use std::path::{Path, PathBuf};

use bracketcraft_api::{
    ApiError, AuthenticatedActor, BracketView, BuildBracketRequest, CloseRegistrationRequest,
    CreateTournamentRequest, ImportRosterRequest, ImportRosterResponse,
    RegisterParticipantRequest, RosterImportRowStatus, SubmitResultRequest, TournamentService,
};
use bracketcraft_audit::Cause;
use bracketcraft_domain::{MatchId, TournamentId};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

/// Errors raised while loading or running a script.
#[derive(Debug, Error)]
pub enum ScriptError {
    /// A file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The script is not valid JSON for the script format.
    #[error("Failed to parse script {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The script lists participants inline and also names a roster file.
    #[error("Script supplies both 'participants' and 'roster_csv'")]
    ConflictingRoster,

    /// A roster row was not imported.
    #[error("Roster row {row_number} was {status}: {reason}")]
    RosterRow {
        row_number: usize,
        status: &'static str,
        reason: String,
    },

    /// A service call was rejected.
    #[error("{step} failed: {source}")]
    Step {
        step: String,
        #[source]
        source: ApiError,
    },
}

/// How participants are ordered into seeds when registration closes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "kebab-case")]
pub enum ScriptSeeding {
    /// Seeds follow registration order.
    #[default]
    RegistrationOrder,
    /// Seeds are a reproducible shuffle of the registrations.
    Shuffled { seed: u64 },
}

impl ScriptSeeding {
    const fn shuffle_seed(self) -> Option<u64> {
        match self {
            Self::RegistrationOrder => None,
            Self::Shuffled { seed } => Some(seed),
        }
    }
}

/// A participant listed inline in a script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptParticipant {
    pub id: String,
    pub display_name: String,
}

/// A result to record, addressed by match number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptResult {
    #[serde(rename = "match")]
    pub number: u32,
    pub score_a: i64,
    pub score_b: i64,
}

/// A tournament script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Script {
    pub name: String,
    #[serde(default)]
    pub organizer: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub mode: String,
    pub max_participants: u16,
    #[serde(default)]
    pub seeding: ScriptSeeding,
    #[serde(default)]
    pub participants: Vec<ScriptParticipant>,
    /// Path to a roster CSV, relative to the script file.
    #[serde(default)]
    pub roster_csv: Option<PathBuf>,
    #[serde(default)]
    pub results: Vec<ScriptResult>,
    /// Contents of `roster_csv`, filled in by [`Script::from_path`].
    #[serde(skip)]
    pub roster_content: Option<String>,
}

impl Script {
    /// Reads a script and the roster file it names, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if either file cannot be read, the script does not
    /// parse, or it supplies both inline participants and a roster file.
    pub fn from_path(path: &Path) -> Result<Self, ScriptError> {
        let content: String = read_file(path)?;
        let mut script: Self =
            serde_json::from_str(&content).map_err(|source| ScriptError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        if let Some(roster) = &script.roster_csv {
            if !script.participants.is_empty() {
                return Err(ScriptError::ConflictingRoster);
            }
            let base: &Path = path.parent().unwrap_or_else(|| Path::new("."));
            script.roster_content = Some(read_file(&base.join(roster))?);
        }

        debug!(path = %path.display(), name = %script.name, "Loaded script");
        Ok(script)
    }
}

/// Reads a file to a string.
///
/// # Errors
///
/// Returns [`ScriptError::Io`] naming the path on failure.
pub fn read_file(path: &Path) -> Result<String, ScriptError> {
    std::fs::read_to_string(path).map_err(|source| ScriptError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// What a finished script run produced.
#[derive(Debug, Clone)]
pub struct ScriptOutcome {
    pub tournament_id: TournamentId,
    pub bracket: BracketView,
    pub results_recorded: usize,
}

fn step<T>(name: impl Into<String>, result: Result<T, ApiError>) -> Result<T, ScriptError> {
    result.map_err(|source| ScriptError::Step {
        step: name.into(),
        source,
    })
}

fn check_import(response: &ImportRosterResponse) -> Result<(), ScriptError> {
    response
        .results
        .iter()
        .find(|row| row.status != RosterImportRowStatus::Imported)
        .map_or(Ok(()), |row| {
            Err(ScriptError::RosterRow {
                row_number: row.row_number,
                status: row.status.as_str(),
                reason: row.error.clone().unwrap_or_default(),
            })
        })
}

/// Runs a script against a service.
///
/// Registration, seeding, bracket construction and every listed result are
/// applied in order as `actor`.
///
/// # Errors
///
/// Returns the first rejected step.
pub fn run_script(
    script: &Script,
    service: &TournamentService,
    actor: &AuthenticatedActor,
) -> Result<ScriptOutcome, ScriptError> {
    let cause = || {
        Cause::new(
            format!("script:{}", script.name),
            String::from("Tournament script"),
        )
    };

    let created = step(
        "create tournament",
        service.create_tournament(
            CreateTournamentRequest {
                name: script.name.clone(),
                organizer: script.organizer.clone(),
                description: script.description.clone(),
                mode: script.mode.clone(),
                max_participants: script.max_participants,
                starts_on: None,
                ends_on: None,
            },
            actor,
            cause(),
        ),
    )?;
    let tournament_id: TournamentId = TournamentId::new(created.response.tournament_id);
    info!(tournament_id = %tournament_id, name = %script.name, "Created tournament");

    if let Some(csv_content) = &script.roster_content {
        let response: ImportRosterResponse = step(
            "import roster",
            service.import_roster_csv(
                &ImportRosterRequest {
                    tournament_id: tournament_id.value(),
                    csv_content: csv_content.clone(),
                },
                actor,
                &cause(),
            ),
        )?;
        check_import(&response)?;
    }

    for participant in &script.participants {
        step(
            format!("register '{}'", participant.id),
            service.register_participant(
                RegisterParticipantRequest {
                    tournament_id: tournament_id.value(),
                    participant_id: participant.id.clone(),
                    display_name: participant.display_name.clone(),
                },
                actor,
                cause(),
            ),
        )?;
    }

    step(
        "close registration",
        service.close_registration(
            CloseRegistrationRequest {
                tournament_id: tournament_id.value(),
                shuffle_seed: script.seeding.shuffle_seed(),
            },
            actor,
            cause(),
        ),
    )?;

    let built = step(
        "build bracket",
        service.build_bracket(
            BuildBracketRequest {
                tournament_id: tournament_id.value(),
                mode: None,
            },
            actor,
            cause(),
        ),
    )?;
    info!(
        tournament_id = %tournament_id,
        match_count = built.response.match_count,
        bye_count = built.response.bye_count,
        "Built bracket"
    );

    for result in &script.results {
        let match_id: MatchId = MatchId::new(tournament_id, result.number);
        let recorded = step(
            format!("submit {match_id}"),
            service.submit_result(
                SubmitResultRequest {
                    match_id,
                    score_a: result.score_a,
                    score_b: result.score_b,
                },
                actor,
                cause(),
            ),
        )?;
        debug!(match_id = %match_id, winner = %recorded.response.winner, "Recorded result");
    }

    let bracket: BracketView = step("read bracket", service.get_bracket(tournament_id))?;
    Ok(ScriptOutcome {
        tournament_id,
        bracket,
        results_recorded: script.results.len(),
    })
}
