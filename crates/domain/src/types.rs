// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Identifies a tournament.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TournamentId(u64);

impl TournamentId {
    /// Creates a new `TournamentId`.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for TournamentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifies a participant within a tournament.
///
/// Ids are trimmed on construction. Emptiness is checked by
/// [`crate::validate_participant_fields`], not here.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipantId(String);

impl ParticipantId {
    /// Creates a new `ParticipantId`.
    ///
    /// # Arguments
    ///
    /// * `value` - The id value (surrounding whitespace is removed)
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self(value.trim().to_string())
    }

    /// Returns the id value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A competing entity (usually a team).
///
/// Participants are immutable once registered. Matches refer to them by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// The participant's identifier, unique within a tournament.
    pub id: ParticipantId,
    /// The name shown in bracket views.
    pub display_name: String,
}

impl Participant {
    /// Creates a new `Participant`.
    ///
    /// # Arguments
    ///
    /// * `id` - The participant id
    /// * `display_name` - The display name (surrounding whitespace is removed)
    #[must_use]
    pub fn new(id: ParticipantId, display_name: &str) -> Self {
        Self {
            id,
            display_name: display_name.trim().to_string(),
        }
    }
}

/// The elimination format of a tournament.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TournamentMode {
    /// One loss eliminates a participant.
    #[default]
    SingleElimination,
    /// Two losses eliminate a participant; includes a losers bracket and a grand final.
    DoubleElimination,
}

impl TournamentMode {
    /// Converts this mode to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::SingleElimination => "single-elimination",
            Self::DoubleElimination => "double-elimination",
        }
    }

    /// Returns the number of losses that eliminate a participant.
    #[must_use]
    pub const fn losses_to_eliminate(&self) -> u8 {
        match self {
            Self::SingleElimination => 1,
            Self::DoubleElimination => 2,
        }
    }
}

impl FromStr for TournamentMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "single" | "single-elimination" | "single_elimination" => Ok(Self::SingleElimination),
            "double" | "double-elimination" | "double_elimination" => Ok(Self::DoubleElimination),
            _ => Err(DomainError::InvalidMode(s.to_string())),
        }
    }
}

impl std::fmt::Display for TournamentMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The lifecycle stage of a tournament.
///
/// Lifecycle stages govern which operations are permitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TournamentLifecycle {
    /// Accepting participants.
    #[default]
    Draft,
    /// Registration frozen; seeding order fixed.
    RegistrationClosed,
    /// Bracket built, no results recorded yet.
    Locked,
    /// At least one result recorded.
    InProgress,
    /// Champion determined.
    Completed,
}

impl FromStr for TournamentLifecycle {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Draft" => Ok(Self::Draft),
            "RegistrationClosed" => Ok(Self::RegistrationClosed),
            "Locked" => Ok(Self::Locked),
            "InProgress" => Ok(Self::InProgress),
            "Completed" => Ok(Self::Completed),
            _ => Err(DomainError::InvalidLifecycleState(s.to_string())),
        }
    }
}

impl std::fmt::Display for TournamentLifecycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TournamentLifecycle {
    /// Converts this lifecycle state to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::RegistrationClosed => "RegistrationClosed",
            Self::Locked => "Locked",
            Self::InProgress => "InProgress",
            Self::Completed => "Completed",
        }
    }

    /// Checks if a transition from this state to another is valid.
    ///
    /// Valid transitions are:
    /// - Draft → `RegistrationClosed`
    /// - `RegistrationClosed` → Locked
    /// - Locked → `InProgress`
    /// - Locked → Completed (the only match decided the tournament)
    /// - `InProgress` → Completed
    /// - Completed → `InProgress` (a result was re-opened)
    #[must_use]
    pub const fn can_transition_to(&self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Draft, Self::RegistrationClosed)
                | (Self::RegistrationClosed, Self::Locked)
                | (Self::Locked, Self::InProgress)
                | (Self::Locked, Self::Completed)
                | (Self::InProgress, Self::Completed)
                | (Self::Completed, Self::InProgress)
        )
    }

    /// Returns whether participants may register or withdraw.
    #[must_use]
    pub const fn accepts_registrations(&self) -> bool {
        matches!(self, Self::Draft)
    }

    /// Returns whether a bracket exists in this state.
    #[must_use]
    pub const fn exposes_bracket(&self) -> bool {
        matches!(self, Self::Locked | Self::InProgress | Self::Completed)
    }
}

/// Which tree of the bracket a match belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BracketSide {
    /// The main tree; every participant starts here.
    Winners,
    /// Double-elimination only: participants with one loss.
    Losers,
    /// Double-elimination only: the grand final and its reset match.
    Final,
}

impl BracketSide {
    /// Converts this side to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Winners => "winners",
            Self::Losers => "losers",
            Self::Final => "final",
        }
    }
}

impl FromStr for BracketSide {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "winners" => Ok(Self::Winners),
            "losers" => Ok(Self::Losers),
            "final" => Ok(Self::Final),
            _ => Err(DomainError::InvalidBracketSide(s.to_string())),
        }
    }
}

impl std::fmt::Display for BracketSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Descriptive and capacity settings for a tournament.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentSettings {
    /// The tournament name.
    pub name: String,
    /// The organizing body (informational).
    pub organizer: Option<String>,
    /// Free-form description (informational).
    pub description: Option<String>,
    /// The declared elimination format.
    pub mode: TournamentMode,
    /// Maximum number of participants that may register.
    pub max_participants: u16,
    /// First day of play.
    pub starts_on: Option<time::Date>,
    /// Last day of play.
    pub ends_on: Option<time::Date>,
}

impl TournamentSettings {
    /// Creates settings with only the required fields populated.
    ///
    /// # Arguments
    ///
    /// * `name` - The tournament name
    /// * `mode` - The elimination format
    /// * `max_participants` - The participant cap
    #[must_use]
    pub fn new(name: &str, mode: TournamentMode, max_participants: u16) -> Self {
        Self {
            name: name.trim().to_string(),
            organizer: None,
            description: None,
            mode,
            max_participants,
            starts_on: None,
            ends_on: None,
        }
    }
}
