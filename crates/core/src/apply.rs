// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::state::{Outcome, State, TransitionResult};
use bracketcraft_audit::{Action, Actor, AuditEvent, Cause, StateSnapshot};
use bracketcraft_domain::{
    Advancement, Bracket, DomainError, MatchId, Participant, TournamentId, TournamentLifecycle,
    TournamentSettings, apply_seeding, build_bracket, validate_capacity, validate_participant_fields,
    validate_participant_unique, validate_tournament_settings,
};

/// Creates a new Draft tournament, producing its initial state and audit event.
///
/// # Arguments
///
/// * `id` - The id assigned to the tournament
/// * `settings` - The tournament settings
/// * `actor` - The actor performing this action
/// * `cause` - The cause or reason for this action
///
/// # Errors
///
/// Returns an error if the settings fail validation.
pub fn apply_create(
    id: TournamentId,
    settings: TournamentSettings,
    actor: Actor,
    cause: Cause,
) -> Result<TransitionResult, CoreError> {
    validate_tournament_settings(&settings)?;

    let action: Action = Action::new(
        String::from("CreateTournament"),
        Some(format!(
            "Created {} tournament '{}' (max {} participants)",
            settings.mode, settings.name, settings.max_participants
        )),
    );
    let new_state: State = State::new(id, settings);
    let before: StateSnapshot = StateSnapshot::new(format!("tournament={id},lifecycle=none"));
    let after: StateSnapshot = new_state.to_snapshot();

    Ok(TransitionResult {
        audit_event: AuditEvent::new(id, actor, cause, action, before, after),
        new_state,
        outcome: Outcome::Updated,
    })
}

/// Applies a command to the current state, producing a new state and audit event.
///
/// The input state is never modified; a rejected command has no effect.
///
/// # Arguments
///
/// * `state` - The current state (immutable)
/// * `command` - The command to apply
/// * `actor` - The actor performing this action; recorded as the verifier of results
/// * `cause` - The cause or reason for this action
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new state, audit event and outcome
/// * `Err(CoreError)` if the command is invalid
///
/// # Errors
///
/// Returns an error if:
/// - The command is not allowed in the tournament's lifecycle stage
/// - The command violates domain rules
pub fn apply(
    state: &State,
    command: Command,
    actor: Actor,
    cause: Cause,
) -> Result<TransitionResult, CoreError> {
    let name: &'static str = command.name();
    let mut new_state: State = state.clone();

    let (details, outcome): (String, Outcome) = execute(state, &mut new_state, command, &actor)
        .map_err(|err: CoreError| err.in_command(state.id, name))?;

    let action: Action = Action::new(String::from(name), Some(details));
    let audit_event: AuditEvent = AuditEvent::new(
        state.id,
        actor,
        cause,
        action,
        state.to_snapshot(),
        new_state.to_snapshot(),
    );

    Ok(TransitionResult {
        new_state,
        audit_event,
        outcome,
    })
}

/// Runs one command against `new_state`, a copy of `state`.
fn execute(
    state: &State,
    new_state: &mut State,
    command: Command,
    actor: &Actor,
) -> Result<(String, Outcome), CoreError> {
    let result: (String, Outcome) = match command {
        Command::RegisterParticipant { participant } => register(new_state, participant)?,
        Command::WithdrawParticipant { participant_id } => {
            require_registration_open(state, "withdraw a participant")?;
            let position: usize = new_state
                .participants
                .iter()
                .position(|p| p.id == participant_id)
                .ok_or_else(|| DomainError::ParticipantNotFound {
                    tournament: state.id,
                    participant: participant_id.clone(),
                })?;
            new_state.participants.remove(position);
            (
                format!("Withdrew participant '{participant_id}'"),
                Outcome::Updated,
            )
        }
        Command::CloseRegistration { seeding } => {
            require_transition(
                state,
                TournamentLifecycle::RegistrationClosed,
                "close registration",
            )?;
            let seeds: Vec<Participant> = apply_seeding(&state.participants, seeding);
            new_state.seeds.clone_from(&seeds);
            new_state.seeding = Some(seeding);
            new_state.lifecycle = TournamentLifecycle::RegistrationClosed;
            (
                format!(
                    "Closed registration with {} participants ({seeding:?})",
                    seeds.len()
                ),
                Outcome::Seeded(seeds),
            )
        }
        Command::BuildBracket { mode } => {
            require_transition(state, TournamentLifecycle::Locked, "build the bracket")?;
            let bracket: Bracket = build_bracket(state.id, &state.seeds, mode)?;
            let details: String = format!(
                "Built {mode} bracket: {} matches, {} byes",
                bracket.matches().len(),
                bracket.bye_match_count()
            );
            new_state.settings.mode = mode;
            new_state.bracket = Some(bracket);
            new_state.lifecycle = TournamentLifecycle::Locked;
            (details, Outcome::Updated)
        }
        Command::SubmitResult {
            match_id,
            score_a,
            score_b,
        } => {
            // Once a bracket exists the match status decides; a finished
            // tournament has no match left in ReadyToPlay.
            if !state.lifecycle.exposes_bracket() {
                return Err(lifecycle_error(state, "submit a result"));
            }
            let bracket: &mut Bracket = bracket_mut(new_state, match_id)?;
            let advancement: Advancement =
                bracket.record_result(match_id, score_a, score_b, &actor.id)?;
            let target: TournamentLifecycle = if advancement.champion.is_some() {
                TournamentLifecycle::Completed
            } else {
                TournamentLifecycle::InProgress
            };
            if target != state.lifecycle {
                require_transition(state, target, "submit a result")?;
            }
            new_state.lifecycle = target;
            (
                format!(
                    "Recorded {match_id} {score_a}-{score_b}: '{}' beat '{}'",
                    advancement.winner, advancement.loser
                ),
                Outcome::Advanced(advancement),
            )
        }
        Command::ReopenMatch { match_id } => {
            if !matches!(
                state.lifecycle,
                TournamentLifecycle::InProgress | TournamentLifecycle::Completed
            ) {
                return Err(lifecycle_error(state, "re-open a match"));
            }
            let bracket: &mut Bracket = bracket_mut(new_state, match_id)?;
            let invalidated: Vec<MatchId> = bracket.reopen_match(match_id)?;
            new_state.lifecycle = TournamentLifecycle::InProgress;
            (
                format!(
                    "Re-opened {match_id}, invalidating {} downstream matches",
                    invalidated.len()
                ),
                Outcome::Reopened(invalidated),
            )
        }
    };
    Ok(result)
}

fn register(state: &mut State, participant: Participant) -> Result<(String, Outcome), CoreError> {
    require_registration_open(state, "register a participant")?;
    validate_participant_fields(&participant)?;
    validate_participant_unique(state.id, &participant.id, &state.participants)?;
    validate_capacity(state.id, &state.settings, state.participants.len())?;

    let details: String = format!(
        "Registered participant '{}' ({}) as #{}",
        participant.id,
        participant.display_name,
        state.participants.len() + 1
    );
    state.participants.push(participant);
    Ok((details, Outcome::Updated))
}

fn lifecycle_error(state: &State, operation: &'static str) -> CoreError {
    CoreError::DomainViolation(DomainError::TournamentState {
        tournament: state.id,
        operation,
        lifecycle: state.lifecycle,
    })
}

fn require_registration_open(state: &State, operation: &'static str) -> Result<(), CoreError> {
    if state.lifecycle.accepts_registrations() {
        Ok(())
    } else {
        Err(lifecycle_error(state, operation))
    }
}

fn require_transition(
    state: &State,
    target: TournamentLifecycle,
    operation: &'static str,
) -> Result<(), CoreError> {
    if state.lifecycle.can_transition_to(target) {
        Ok(())
    } else {
        Err(lifecycle_error(state, operation))
    }
}

/// Returns the bracket for a match that must belong to this tournament.
fn bracket_mut(state: &mut State, match_id: MatchId) -> Result<&mut Bracket, CoreError> {
    if match_id.tournament != state.id {
        return Err(DomainError::MatchNotFound(match_id).into());
    }
    let id: TournamentId = state.id;
    state
        .bracket
        .as_mut()
        .ok_or(CoreError::DomainViolation(DomainError::BracketNotBuilt(id)))
}
