// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::matches::{MatchId, MatchStatus};
use crate::types::{ParticipantId, TournamentId, TournamentLifecycle};

/// Errors that can occur during domain validation and bracket operations.
///
/// All of these are local validation failures. None of them leave a
/// tournament or bracket partially modified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A participant with the same id is already registered.
    DuplicateParticipant {
        /// The tournament the registration targeted.
        tournament: TournamentId,
        /// The duplicate participant id.
        participant: ParticipantId,
    },
    /// A bracket needs at least two participants.
    InsufficientParticipants {
        /// The number of participants that were supplied.
        count: usize,
    },
    /// The referenced match does not exist.
    MatchNotFound(MatchId),
    /// The match cannot accept a result in its current status.
    MatchNotReady {
        /// The match that was targeted.
        match_id: MatchId,
        /// The status the match was in.
        status: MatchStatus,
    },
    /// Elimination formats do not allow drawn results.
    DrawNotAllowed {
        /// The match that was targeted.
        match_id: MatchId,
        /// The tied score.
        score: u32,
    },
    /// A score was negative or out of range.
    InvalidScore {
        /// The match that was targeted.
        match_id: MatchId,
        /// Description of the problem.
        reason: String,
    },
    /// The operation is not valid for the tournament's lifecycle stage.
    TournamentState {
        /// The tournament.
        tournament: TournamentId,
        /// The operation that was attempted.
        operation: &'static str,
        /// The lifecycle stage the tournament was in.
        lifecycle: TournamentLifecycle,
    },
    /// The tournament has reached its participant cap.
    TournamentFull {
        /// The tournament.
        tournament: TournamentId,
        /// The configured maximum.
        max_participants: u16,
    },
    /// The participant is not registered in the tournament.
    ParticipantNotFound {
        /// The tournament.
        tournament: TournamentId,
        /// The unknown participant id.
        participant: ParticipantId,
    },
    /// The tournament does not exist.
    TournamentNotFound(TournamentId),
    /// The tournament has no bracket yet.
    BracketNotBuilt(TournamentId),
    /// The match cannot be re-opened.
    MatchNotReopenable {
        /// The match that was targeted.
        match_id: MatchId,
        /// Why the match cannot be re-opened.
        reason: &'static str,
    },
    /// Participant id is empty or invalid.
    InvalidParticipantId(String),
    /// Participant display name is empty or invalid.
    InvalidDisplayName(String),
    /// Tournament name is empty or invalid.
    InvalidTournamentName(String),
    /// Participant cap is outside the supported range.
    InvalidMaxParticipants {
        /// The rejected value.
        value: u16,
    },
    /// The tournament ends before it starts.
    InvalidSchedule {
        /// The requested start date.
        starts_on: time::Date,
        /// The requested end date.
        ends_on: time::Date,
    },
    /// Unknown tournament mode string.
    InvalidMode(String),
    /// Unknown bracket side string.
    InvalidBracketSide(String),
    /// Unknown lifecycle state string.
    InvalidLifecycleState(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateParticipant {
                tournament,
                participant,
            } => {
                write!(
                    f,
                    "Participant '{participant}' is already registered in tournament {tournament}"
                )
            }
            Self::InsufficientParticipants { count } => {
                write!(
                    f,
                    "A bracket requires at least 2 participants, got {count}"
                )
            }
            Self::MatchNotFound(match_id) => write!(f, "Match {match_id} not found"),
            Self::MatchNotReady { match_id, status } => {
                write!(
                    f,
                    "Match {match_id} is not ready to accept a result (status: {status})"
                )
            }
            Self::DrawNotAllowed { match_id, score } => {
                write!(
                    f,
                    "Match {match_id} cannot end in a draw ({score}-{score})"
                )
            }
            Self::InvalidScore { match_id, reason } => {
                write!(f, "Invalid score for match {match_id}: {reason}")
            }
            Self::TournamentState {
                tournament,
                operation,
                lifecycle,
            } => {
                write!(
                    f,
                    "Cannot {operation} while tournament {tournament} is in state '{lifecycle}'"
                )
            }
            Self::TournamentFull {
                tournament,
                max_participants,
            } => {
                write!(
                    f,
                    "Tournament {tournament} is full ({max_participants} participants)"
                )
            }
            Self::ParticipantNotFound {
                tournament,
                participant,
            } => {
                write!(
                    f,
                    "Participant '{participant}' not found in tournament {tournament}"
                )
            }
            Self::TournamentNotFound(tournament) => {
                write!(f, "Tournament {tournament} not found")
            }
            Self::BracketNotBuilt(tournament) => {
                write!(f, "Tournament {tournament} has no bracket yet")
            }
            Self::MatchNotReopenable { match_id, reason } => {
                write!(f, "Match {match_id} cannot be re-opened: {reason}")
            }
            Self::InvalidParticipantId(msg) => write!(f, "Invalid participant id: {msg}"),
            Self::InvalidDisplayName(msg) => write!(f, "Invalid display name: {msg}"),
            Self::InvalidTournamentName(msg) => write!(f, "Invalid tournament name: {msg}"),
            Self::InvalidMaxParticipants { value } => {
                write!(
                    f,
                    "Invalid participant cap: {value}. Must be between 2 and 256"
                )
            }
            Self::InvalidSchedule { starts_on, ends_on } => {
                write!(
                    f,
                    "Tournament cannot end ({ends_on}) before it starts ({starts_on})"
                )
            }
            Self::InvalidMode(value) => write!(f, "Invalid tournament mode: {value}"),
            Self::InvalidBracketSide(value) => write!(f, "Invalid bracket side: {value}"),
            Self::InvalidLifecycleState(value) => {
                write!(f, "Invalid tournament lifecycle state: {value}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
