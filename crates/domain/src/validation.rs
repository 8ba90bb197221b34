// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{Participant, ParticipantId, TournamentId, TournamentSettings};

/// Maximum length of a participant id.
const MAX_PARTICIPANT_ID_LEN: usize = 32;

/// Maximum length of a participant display name.
const MAX_DISPLAY_NAME_LEN: usize = 64;

/// Maximum length of a tournament name.
const MAX_TOURNAMENT_NAME_LEN: usize = 120;

/// Supported range for the participant cap.
const PARTICIPANT_CAP_RANGE: std::ops::RangeInclusive<u16> = 2..=256;

/// Validates that a participant's field constraints are met.
///
/// This function does NOT check for uniqueness (that requires context).
///
/// # Arguments
///
/// * `participant` - The participant to validate
///
/// # Errors
///
/// Returns an error if:
/// - The id is empty, too long, or contains whitespace
/// - The display name is empty or too long
pub fn validate_participant_fields(participant: &Participant) -> Result<(), DomainError> {
    let id: &str = participant.id.value();
    if id.is_empty() {
        return Err(DomainError::InvalidParticipantId(String::from(
            "Participant id cannot be empty",
        )));
    }
    if id.chars().count() > MAX_PARTICIPANT_ID_LEN {
        return Err(DomainError::InvalidParticipantId(format!(
            "Participant id must be at most {MAX_PARTICIPANT_ID_LEN} characters"
        )));
    }
    if id.chars().any(char::is_whitespace) {
        return Err(DomainError::InvalidParticipantId(String::from(
            "Participant id cannot contain whitespace",
        )));
    }

    if participant.display_name.is_empty() {
        return Err(DomainError::InvalidDisplayName(String::from(
            "Display name cannot be empty",
        )));
    }
    if participant.display_name.chars().count() > MAX_DISPLAY_NAME_LEN {
        return Err(DomainError::InvalidDisplayName(format!(
            "Display name must be at most {MAX_DISPLAY_NAME_LEN} characters"
        )));
    }

    Ok(())
}

/// Validates that a participant id is not already registered.
///
/// # Arguments
///
/// * `tournament` - The tournament being registered into
/// * `id` - The id to check
/// * `registered` - The participants already registered
///
/// # Errors
///
/// Returns `DomainError::DuplicateParticipant` if the id is already taken.
pub fn validate_participant_unique(
    tournament: TournamentId,
    id: &ParticipantId,
    registered: &[Participant],
) -> Result<(), DomainError> {
    if registered.iter().any(|p| &p.id == id) {
        return Err(DomainError::DuplicateParticipant {
            tournament,
            participant: id.clone(),
        });
    }
    Ok(())
}

/// Validates that another participant fits under the tournament's cap.
///
/// # Errors
///
/// Returns `DomainError::TournamentFull` if the cap has been reached.
pub fn validate_capacity(
    tournament: TournamentId,
    settings: &TournamentSettings,
    registered: usize,
) -> Result<(), DomainError> {
    if registered >= usize::from(settings.max_participants) {
        return Err(DomainError::TournamentFull {
            tournament,
            max_participants: settings.max_participants,
        });
    }
    Ok(())
}

/// Validates tournament settings.
///
/// # Errors
///
/// Returns an error if:
/// - The name is empty or too long
/// - The participant cap is outside 2..=256
/// - The end date precedes the start date
pub fn validate_tournament_settings(settings: &TournamentSettings) -> Result<(), DomainError> {
    if settings.name.is_empty() {
        return Err(DomainError::InvalidTournamentName(String::from(
            "Tournament name cannot be empty",
        )));
    }
    if settings.name.chars().count() > MAX_TOURNAMENT_NAME_LEN {
        return Err(DomainError::InvalidTournamentName(format!(
            "Tournament name must be at most {MAX_TOURNAMENT_NAME_LEN} characters"
        )));
    }

    if !PARTICIPANT_CAP_RANGE.contains(&settings.max_participants) {
        return Err(DomainError::InvalidMaxParticipants {
            value: settings.max_participants,
        });
    }

    if let (Some(starts_on), Some(ends_on)) = (settings.starts_on, settings.ends_on)
        && ends_on < starts_on
    {
        return Err(DomainError::InvalidSchedule { starts_on, ends_on });
    }

    Ok(())
}
