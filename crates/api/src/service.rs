// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The tournament service: a registry of tournaments behind per-tournament locks.
//!
//! Every mutation follows the same flow:
//! - authorize the actor
//! - translate the request into a core command
//! - apply the command to the current state under the tournament's write lock
//! - append the audit event and swap in the new state
//!
//! Readers take the tournament's read lock and therefore always observe a
//! complete state, either before or after any given mutation.

use std::collections::BTreeMap;
use std::sync::{Arc, PoisonError, RwLock};

use bracketcraft::{Command, CoreError, Outcome, State, TransitionResult, apply, apply_create};
use bracketcraft_audit::{AuditEvent, Cause};
use bracketcraft_domain::{
    Bracket, BracketSide, DomainError, MatchId, Participant, ParticipantId, SeedingPolicy,
    TournamentId, TournamentMode, TournamentSettings,
};
use tracing::{debug, info, warn};

use crate::auth::{AuthenticatedActor, AuthorizationService};
use crate::error::{ApiError, translate_core_error, translate_domain_error};
use crate::request_response::{
    BracketView, BuildBracketRequest, BuildBracketResponse, CloseRegistrationRequest,
    CloseRegistrationResponse, CreateTournamentRequest, CreateTournamentResponse,
    ImportRosterRequest, ImportRosterResponse, MatchInfo, ParticipantInfo, PlacementInfo,
    RegisterParticipantRequest, RegisterParticipantResponse, ReopenMatchRequest,
    ReopenMatchResponse, RosterImportRowResult, RosterImportRowStatus, RoundInfo,
    SubmitResultRequest, SubmitResultResponse, TournamentSummary, WithdrawParticipantRequest,
    WithdrawParticipantResponse,
};
use crate::roster::{RosterPreview, RosterRowStatus, preview_roster_csv};

/// The result of an API operation that includes both the response and the audit event.
///
/// This ensures that successful API operations always produce an audit trail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResult<T> {
    /// The API response.
    pub response: T,
    /// The audit event generated by this operation, as recorded in the log.
    pub audit_event: AuditEvent,
}

/// One tournament's state together with its audit trail.
#[derive(Debug)]
struct TournamentEntry {
    state: State,
    audit_log: Vec<AuditEvent>,
}

impl TournamentEntry {
    /// Numbers the event, appends it to the log and swaps in the new state.
    fn commit(&mut self, new_state: State, event: AuditEvent) -> Result<AuditEvent, ApiError> {
        let event_id: u64 =
            u64::try_from(self.audit_log.len() + 1).map_err(|_| ApiError::Internal {
                message: String::from("audit log is full"),
            })?;
        let recorded: AuditEvent = event.recorded(event_id);
        self.audit_log.push(recorded.clone());
        self.state = new_state;
        Ok(recorded)
    }
}

type SharedEntry = Arc<RwLock<TournamentEntry>>;

fn poisoned<T>(_: PoisonError<T>) -> ApiError {
    ApiError::Internal {
        message: String::from("tournament lock poisoned by a panicked writer"),
    }
}

fn unexpected_outcome(action: &str) -> ApiError {
    ApiError::Internal {
        message: format!("'{action}' produced an unexpected outcome"),
    }
}

fn seed_of(state: &State, id: &ParticipantId) -> Option<usize> {
    state
        .seeds
        .iter()
        .position(|p| &p.id == id)
        .map(|index| index + 1)
}

fn participant_info(state: &State, participant: &Participant) -> ParticipantInfo {
    ParticipantInfo::new(participant, seed_of(state, &participant.id))
}

fn summarize(state: &State) -> TournamentSummary {
    TournamentSummary {
        tournament_id: state.id.value(),
        name: state.settings.name.clone(),
        organizer: state.settings.organizer.clone(),
        mode: state.settings.mode.to_string(),
        lifecycle: state.lifecycle.to_string(),
        participant_count: state.participants.len(),
        max_participants: state.settings.max_participants,
        starts_on: state.settings.starts_on,
        ends_on: state.settings.ends_on,
        champion: state.champion().map(|p| p.id.value().to_string()),
    }
}

fn rounds(bracket: &Bracket, side: BracketSide) -> Vec<RoundInfo> {
    (0..bracket.round_count(side))
        .filter_map(|index| {
            bracket.get_round(side, index).map(|matches| RoundInfo {
                side: side.to_string(),
                index,
                matches: matches.into_iter().map(MatchInfo::from).collect(),
            })
        })
        .collect()
}

fn match_ids(ids: &[MatchId]) -> Vec<String> {
    ids.iter().map(ToString::to_string).collect()
}

/// Registry of tournaments.
///
/// The outer lock only guards the directory of tournaments. Each tournament
/// has its own lock, so writers to different tournaments never contend and
/// readers of one tournament never wait on writers to another.
#[derive(Debug, Default)]
pub struct TournamentService {
    tournaments: RwLock<BTreeMap<TournamentId, SharedEntry>>,
}

impl TournamentService {
    /// Creates an empty service.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn entry(&self, tournament_id: TournamentId) -> Result<SharedEntry, ApiError> {
        let directory = self.tournaments.read().map_err(poisoned)?;
        directory
            .get(&tournament_id)
            .cloned()
            .ok_or_else(|| translate_domain_error(DomainError::TournamentNotFound(tournament_id)))
    }

    /// Runs a read-only query against one tournament under its read lock.
    fn read<T>(
        &self,
        tournament_id: TournamentId,
        query: &'static str,
        f: impl FnOnce(&TournamentEntry) -> Result<T, ApiError>,
    ) -> Result<T, ApiError> {
        debug!(tournament_id = %tournament_id, query, "Query");
        let entry: SharedEntry = self.entry(tournament_id)?;
        let guard = entry.read().map_err(poisoned)?;
        f(&guard)
    }

    /// Applies a command to one tournament under its write lock.
    ///
    /// `respond` builds the response from the new state before it is
    /// committed; if it fails nothing is committed.
    fn mutate<T>(
        &self,
        tournament_id: TournamentId,
        command: Command,
        actor: &AuthenticatedActor,
        cause: Cause,
        respond: impl FnOnce(&State, Outcome) -> Result<T, ApiError>,
    ) -> Result<ApiResult<T>, ApiError> {
        let action: &'static str = command.name();
        let entry: SharedEntry = self.entry(tournament_id)?;
        let mut guard = entry.write().map_err(poisoned)?;

        let TransitionResult {
            new_state,
            audit_event,
            outcome,
        } = apply(&guard.state, command, actor.to_audit_actor(), cause).map_err(
            |err: CoreError| {
                warn!(
                    tournament_id = %tournament_id,
                    action,
                    actor = %actor.id,
                    error = %err,
                    "Command rejected"
                );
                translate_core_error(err)
            },
        )?;

        let response: T = respond(&new_state, outcome)?;
        let audit_event: AuditEvent = guard.commit(new_state, audit_event)?;
        drop(guard);

        info!(
            tournament_id = %tournament_id,
            action,
            actor = %actor.id,
            event_id = ?audit_event.event_id,
            "Command applied"
        );
        Ok(ApiResult {
            response,
            audit_event,
        })
    }

    /// Creates a new Draft tournament.
    ///
    /// Tournament ids are assigned sequentially starting at 1.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The actor is not an Organizer
    /// - The mode is unknown
    /// - The settings fail validation (name, participant cap, schedule)
    pub fn create_tournament(
        &self,
        request: CreateTournamentRequest,
        actor: &AuthenticatedActor,
        cause: Cause,
    ) -> Result<ApiResult<CreateTournamentResponse>, ApiError> {
        AuthorizationService::authorize_create_tournament(actor)?;

        let mode: TournamentMode = request.mode.parse().map_err(translate_domain_error)?;
        let mut settings: TournamentSettings =
            TournamentSettings::new(&request.name, mode, request.max_participants);
        settings.organizer = request.organizer;
        settings.description = request.description;
        settings.starts_on = request.starts_on;
        settings.ends_on = request.ends_on;

        let mut directory = self.tournaments.write().map_err(poisoned)?;
        let id: TournamentId = TournamentId::new(
            directory
                .keys()
                .next_back()
                .map_or(1, |last| last.value() + 1),
        );

        let transition: TransitionResult =
            apply_create(id, settings, actor.to_audit_actor(), cause).map_err(|err| {
                warn!(actor = %actor.id, error = %err, "Tournament creation rejected");
                translate_core_error(err)
            })?;

        let settings: &TournamentSettings = &transition.new_state.settings;
        let response: CreateTournamentResponse = CreateTournamentResponse {
            tournament_id: id.value(),
            name: settings.name.clone(),
            mode: mode.to_string(),
            max_participants: settings.max_participants,
            message: format!("Created {mode} tournament '{}'", settings.name),
        };
        let audit_event: AuditEvent = transition.audit_event.recorded(1);
        let entry: TournamentEntry = TournamentEntry {
            state: transition.new_state,
            audit_log: vec![audit_event.clone()],
        };
        directory.insert(id, Arc::new(RwLock::new(entry)));
        drop(directory);

        info!(tournament_id = %id, actor = %actor.id, %mode, "Tournament created");
        Ok(ApiResult {
            response,
            audit_event,
        })
    }

    /// Registers a participant in a Draft tournament.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The actor is not an Organizer
    /// - The tournament does not exist or is no longer in Draft
    /// - The participant fields are invalid or the id is already registered
    /// - The tournament is full
    pub fn register_participant(
        &self,
        request: RegisterParticipantRequest,
        actor: &AuthenticatedActor,
        cause: Cause,
    ) -> Result<ApiResult<RegisterParticipantResponse>, ApiError> {
        AuthorizationService::authorize_manage_registration(actor)?;

        let tournament_id: TournamentId = TournamentId::new(request.tournament_id);
        let participant: Participant = Participant::new(
            ParticipantId::new(&request.participant_id),
            &request.display_name,
        );
        let participant_id: String = participant.id.value().to_string();
        let display_name: String = participant.display_name.clone();

        self.mutate(
            tournament_id,
            Command::RegisterParticipant { participant },
            actor,
            cause,
            |state, _| {
                Ok(RegisterParticipantResponse {
                    tournament_id: tournament_id.value(),
                    message: format!(
                        "Registered '{display_name}' as participant #{}",
                        state.participants.len()
                    ),
                    participant_id,
                    display_name,
                    registered_count: state.participants.len(),
                })
            },
        )
    }

    /// Withdraws a participant from a Draft tournament.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The actor is not an Organizer
    /// - The tournament does not exist or is no longer in Draft
    /// - The participant is not registered
    pub fn withdraw_participant(
        &self,
        request: WithdrawParticipantRequest,
        actor: &AuthenticatedActor,
        cause: Cause,
    ) -> Result<ApiResult<WithdrawParticipantResponse>, ApiError> {
        AuthorizationService::authorize_manage_registration(actor)?;

        let tournament_id: TournamentId = TournamentId::new(request.tournament_id);
        let participant_id: ParticipantId = ParticipantId::new(&request.participant_id);

        self.mutate(
            tournament_id,
            Command::WithdrawParticipant {
                participant_id: participant_id.clone(),
            },
            actor,
            cause,
            |state, _| {
                Ok(WithdrawParticipantResponse {
                    tournament_id: tournament_id.value(),
                    participant_id: participant_id.value().to_string(),
                    registered_count: state.participants.len(),
                    message: format!("Withdrew participant '{participant_id}'"),
                })
            },
        )
    }

    /// Closes registration and fixes the seed order.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The actor is not an Organizer
    /// - The tournament does not exist or is not in Draft
    pub fn close_registration(
        &self,
        request: CloseRegistrationRequest,
        actor: &AuthenticatedActor,
        cause: Cause,
    ) -> Result<ApiResult<CloseRegistrationResponse>, ApiError> {
        AuthorizationService::authorize_build_bracket(actor)?;

        let tournament_id: TournamentId = TournamentId::new(request.tournament_id);
        let seeding: SeedingPolicy = request
            .shuffle_seed
            .map_or(SeedingPolicy::RegistrationOrder, |seed| {
                SeedingPolicy::Shuffled { seed }
            });

        self.mutate(
            tournament_id,
            Command::CloseRegistration { seeding },
            actor,
            cause,
            |_, outcome| {
                let Outcome::Seeded(seeds) = outcome else {
                    return Err(unexpected_outcome("close_registration"));
                };
                Ok(CloseRegistrationResponse {
                    tournament_id: tournament_id.value(),
                    message: format!("Registration closed with {} participants", seeds.len()),
                    seeds: seeds
                        .iter()
                        .enumerate()
                        .map(|(index, p)| ParticipantInfo::new(p, Some(index + 1)))
                        .collect(),
                })
            },
        )
    }

    /// Builds the bracket from the closed registration list.
    ///
    /// Without an explicit mode the bracket uses the mode the tournament was
    /// created with.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The actor is not an Organizer
    /// - The tournament does not exist or registration is not closed
    /// - The mode is unknown
    /// - Fewer than two participants are registered
    pub fn build_bracket(
        &self,
        request: BuildBracketRequest,
        actor: &AuthenticatedActor,
        cause: Cause,
    ) -> Result<ApiResult<BuildBracketResponse>, ApiError> {
        AuthorizationService::authorize_build_bracket(actor)?;

        let tournament_id: TournamentId = TournamentId::new(request.tournament_id);
        let mode: TournamentMode = match request.mode {
            Some(mode) => mode.parse().map_err(translate_domain_error)?,
            None => self.read(tournament_id, "declared_mode", |entry| {
                Ok(entry.state.settings.mode)
            })?,
        };

        self.mutate(
            tournament_id,
            Command::BuildBracket { mode },
            actor,
            cause,
            |state, _| {
                let bracket: &Bracket = state.bracket().map_err(translate_domain_error)?;
                Ok(BuildBracketResponse {
                    tournament_id: tournament_id.value(),
                    mode: mode.to_string(),
                    match_count: bracket.matches().len(),
                    bye_count: bracket.bye_match_count(),
                    ready_matches: bracket
                        .ready_matches()
                        .iter()
                        .map(|m| m.id.to_string())
                        .collect(),
                    message: format!(
                        "Built {mode} bracket for {} participants",
                        bracket.seeds().len()
                    ),
                })
            },
        )
    }

    /// Records the result of a ready match.
    ///
    /// The match id alone identifies the tournament.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The tournament or match does not exist
    /// - The tournament does not accept results in its lifecycle stage
    /// - The match is not ready to play
    /// - A score is negative or out of range, or the result is a draw
    pub fn submit_result(
        &self,
        request: SubmitResultRequest,
        actor: &AuthenticatedActor,
        cause: Cause,
    ) -> Result<ApiResult<SubmitResultResponse>, ApiError> {
        AuthorizationService::authorize_submit_result(actor)?;

        let SubmitResultRequest {
            match_id,
            score_a,
            score_b,
        } = request;

        self.mutate(
            match_id.tournament,
            Command::SubmitResult {
                match_id,
                score_a,
                score_b,
            },
            actor,
            cause,
            |state, outcome| {
                let Outcome::Advanced(advancement) = outcome else {
                    return Err(unexpected_outcome("submit_result"));
                };
                let message: String = advancement.champion.as_ref().map_or_else(
                    || {
                        format!(
                            "'{}' beat '{}' {score_a}-{score_b}",
                            advancement.winner, advancement.loser
                        )
                    },
                    |champion| format!("'{champion}' wins the tournament"),
                );
                Ok(SubmitResultResponse {
                    match_id: match_id.to_string(),
                    winner: advancement.winner.value().to_string(),
                    loser: advancement.loser.value().to_string(),
                    eliminated: advancement.eliminated.map(|p| p.value().to_string()),
                    newly_ready: match_ids(&advancement.newly_ready),
                    champion: advancement.champion.map(|p| p.value().to_string()),
                    lifecycle: state.lifecycle.to_string(),
                    message,
                })
            },
        )
    }

    /// Re-opens a played match, invalidating every match that depended on it.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The actor is not an Organizer
    /// - The tournament or match does not exist
    /// - The tournament has not started play
    /// - The match is not a played, completed match
    pub fn reopen_match(
        &self,
        request: ReopenMatchRequest,
        actor: &AuthenticatedActor,
        cause: Cause,
    ) -> Result<ApiResult<ReopenMatchResponse>, ApiError> {
        AuthorizationService::authorize_reopen_match(actor)?;

        let match_id: MatchId = request.match_id;
        self.mutate(
            match_id.tournament,
            Command::ReopenMatch { match_id },
            actor,
            cause,
            |state, outcome| {
                let Outcome::Reopened(invalidated) = outcome else {
                    return Err(unexpected_outcome("reopen_match"));
                };
                Ok(ReopenMatchResponse {
                    match_id: match_id.to_string(),
                    message: format!(
                        "Re-opened {match_id}; {} downstream matches reset",
                        invalidated.len()
                    ),
                    invalidated: match_ids(&invalidated),
                    lifecycle: state.lifecycle.to_string(),
                })
            },
        )
    }

    /// Validates a roster CSV against a tournament without registering anyone.
    ///
    /// # Errors
    ///
    /// Returns an error if the tournament does not exist or the CSV headers
    /// are unreadable.
    pub fn preview_roster_csv(
        &self,
        tournament_id: TournamentId,
        csv_content: &str,
    ) -> Result<RosterPreview, ApiError> {
        self.read(tournament_id, "preview_roster_csv", |entry| {
            preview_roster_csv(csv_content, &entry.state.participants)
        })
    }

    /// Registers every valid roster row, in file order.
    ///
    /// Each row is registered as its own audited mutation. Invalid rows are
    /// reported and passed over. The first row the tournament rejects (for
    /// example because it is full) stops the import; later rows are
    /// reported as skipped. Rows imported before the rejection stay
    /// registered.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The actor is not an Organizer
    /// - The tournament does not exist
    /// - The CSV headers are unreadable
    pub fn import_roster_csv(
        &self,
        request: &ImportRosterRequest,
        actor: &AuthenticatedActor,
        cause: &Cause,
    ) -> Result<ImportRosterResponse, ApiError> {
        AuthorizationService::authorize_manage_registration(actor)?;

        let tournament_id: TournamentId = TournamentId::new(request.tournament_id);
        let preview: RosterPreview = self.preview_roster_csv(tournament_id, &request.csv_content)?;

        let mut results: Vec<RosterImportRowResult> = Vec::with_capacity(preview.total_rows);
        let mut stopped: bool = false;

        for row in &preview.rows {
            let mut result: RosterImportRowResult = RosterImportRowResult {
                row_number: row.row_number,
                participant_id: row.participant_id.clone(),
                status: RosterImportRowStatus::Skipped,
                error: None,
            };

            if row.status == RosterRowStatus::Invalid {
                result.status = RosterImportRowStatus::Invalid;
                result.error = Some(row.errors.join("; "));
            } else if !stopped
                && let Some(participant) = row.participant()
            {
                match self.mutate(
                    tournament_id,
                    Command::RegisterParticipant { participant },
                    actor,
                    cause.clone(),
                    |_, _| Ok(()),
                ) {
                    Ok(_) => result.status = RosterImportRowStatus::Imported,
                    Err(err) => {
                        result.status = RosterImportRowStatus::Rejected;
                        result.error = Some(err.to_string());
                        stopped = true;
                    }
                }
            }
            results.push(result);
        }

        let imported_count: usize = results
            .iter()
            .filter(|r| r.status == RosterImportRowStatus::Imported)
            .count();
        info!(
            tournament_id = %tournament_id,
            actor = %actor.id,
            imported = imported_count,
            total = preview.total_rows,
            "Roster import finished"
        );

        Ok(ImportRosterResponse {
            tournament_id: tournament_id.value(),
            total_rows: preview.total_rows,
            imported_count,
            failed_count: preview.total_rows - imported_count,
            results,
        })
    }

    /// Returns a summary of one tournament.
    ///
    /// # Errors
    ///
    /// Returns an error if the tournament does not exist.
    pub fn get_tournament(&self, tournament_id: TournamentId) -> Result<TournamentSummary, ApiError> {
        self.read(tournament_id, "get_tournament", |entry| {
            Ok(summarize(&entry.state))
        })
    }

    /// Lists every tournament, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns an error if a lock is poisoned.
    pub fn list_tournaments(&self) -> Result<Vec<TournamentSummary>, ApiError> {
        debug!("Listing tournaments");
        let entries: Vec<SharedEntry> = self
            .tournaments
            .read()
            .map_err(poisoned)?
            .values()
            .cloned()
            .collect();

        entries
            .iter()
            .map(|entry| {
                let guard = entry.read().map_err(poisoned)?;
                Ok(summarize(&guard.state))
            })
            .collect()
    }

    /// Lists registered participants in registration order.
    ///
    /// # Errors
    ///
    /// Returns an error if the tournament does not exist.
    pub fn list_participants(
        &self,
        tournament_id: TournamentId,
    ) -> Result<Vec<ParticipantInfo>, ApiError> {
        self.read(tournament_id, "list_participants", |entry| {
            Ok(entry
                .state
                .participants
                .iter()
                .map(|p| participant_info(&entry.state, p))
                .collect())
        })
    }

    /// Returns the matches of one bracket round in bracket order.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The tournament does not exist or has no bracket yet
    /// - The side has no round at `round_index`
    pub fn get_round(
        &self,
        tournament_id: TournamentId,
        side: BracketSide,
        round_index: usize,
    ) -> Result<Vec<MatchInfo>, ApiError> {
        self.read(tournament_id, "get_round", |entry| {
            let bracket: &Bracket = entry.state.bracket().map_err(translate_domain_error)?;
            bracket
                .get_round(side, round_index)
                .map(|matches| matches.into_iter().map(MatchInfo::from).collect())
                .ok_or_else(|| ApiError::ResourceNotFound {
                    resource_type: String::from("Round"),
                    message: format!(
                        "Tournament {tournament_id} has no {side} round {round_index}"
                    ),
                })
        })
    }

    /// Looks up a single match.
    ///
    /// # Errors
    ///
    /// Returns an error if the tournament, its bracket, or the match does not exist.
    pub fn get_match(&self, match_id: MatchId) -> Result<MatchInfo, ApiError> {
        self.read(match_id.tournament, "get_match", |entry| {
            let bracket: &Bracket = entry.state.bracket().map_err(translate_domain_error)?;
            bracket
                .get_match(match_id)
                .map(MatchInfo::from)
                .ok_or_else(|| translate_domain_error(DomainError::MatchNotFound(match_id)))
        })
    }

    /// Returns the champion, or `None` until the tournament is Completed.
    ///
    /// # Errors
    ///
    /// Returns an error if the tournament does not exist.
    pub fn get_champion(
        &self,
        tournament_id: TournamentId,
    ) -> Result<Option<ParticipantInfo>, ApiError> {
        self.read(tournament_id, "get_champion", |entry| {
            Ok(entry
                .state
                .champion()
                .map(|p| participant_info(&entry.state, p)))
        })
    }

    /// Returns the complete bracket with standings.
    ///
    /// # Errors
    ///
    /// Returns an error if the tournament does not exist or has no bracket yet.
    pub fn get_bracket(&self, tournament_id: TournamentId) -> Result<BracketView, ApiError> {
        self.read(tournament_id, "get_bracket", |entry| {
            let state: &State = &entry.state;
            let bracket: &Bracket = state.bracket().map_err(translate_domain_error)?;
            let champion: Option<ParticipantInfo> =
                state.champion().map(|p| participant_info(state, p));
            let placements: Vec<PlacementInfo> = if champion.is_some() {
                bracket
                    .placements()
                    .unwrap_or_default()
                    .iter()
                    .map(PlacementInfo::from)
                    .collect()
            } else {
                Vec::new()
            };

            Ok(BracketView {
                tournament: summarize(state),
                seeds: state
                    .seeds
                    .iter()
                    .map(|p| participant_info(state, p))
                    .collect(),
                winners: rounds(bracket, BracketSide::Winners),
                losers: rounds(bracket, BracketSide::Losers),
                finals: rounds(bracket, BracketSide::Final),
                champion,
                placements,
            })
        })
    }

    /// Returns the tournament's audit log, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the tournament does not exist.
    pub fn audit_log(&self, tournament_id: TournamentId) -> Result<Vec<AuditEvent>, ApiError> {
        self.read(tournament_id, "audit_log", |entry| Ok(entry.audit_log.clone()))
    }
}
