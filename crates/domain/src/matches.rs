// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{BracketSide, ParticipantId, TournamentId};
use serde::{Deserialize, Serialize};

/// Identifies a match.
///
/// Match ids carry their tournament, so a match id alone is enough to route
/// a result submission. Numbers start at 1 within each tournament.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MatchId {
    /// The owning tournament.
    pub tournament: TournamentId,
    /// The match number within the tournament.
    pub number: u32,
}

impl MatchId {
    /// Creates a new `MatchId`.
    #[must_use]
    pub const fn new(tournament: TournamentId, number: u32) -> Self {
        Self { tournament, number }
    }
}

impl std::fmt::Display for MatchId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "T{}-M{}", self.tournament, self.number)
    }
}

/// One side of a match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Slot {
    /// A concrete participant.
    Participant(ParticipantId),
    /// Whoever wins the referenced match.
    WinnerOf(MatchId),
    /// Whoever loses the referenced match (double-elimination only).
    LoserOf(MatchId),
    /// Nobody; the opponent advances without playing.
    Bye,
}

impl Slot {
    /// Returns the participant in this slot, if it holds one.
    #[must_use]
    pub const fn participant(&self) -> Option<&ParticipantId> {
        match self {
            Self::Participant(id) => Some(id),
            _ => None,
        }
    }

    /// Returns whether this slot no longer waits on another match.
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        matches!(self, Self::Participant(_) | Self::Bye)
    }

    /// Returns the match this slot waits on, if any.
    #[must_use]
    pub const fn upstream(&self) -> Option<MatchId> {
        match self {
            Self::WinnerOf(id) | Self::LoserOf(id) => Some(*id),
            Self::Participant(_) | Self::Bye => None,
        }
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Participant(id) => write!(f, "{id}"),
            Self::WinnerOf(id) => write!(f, "winner of {id}"),
            Self::LoserOf(id) => write!(f, "loser of {id}"),
            Self::Bye => write!(f, "bye"),
        }
    }
}

/// The status of a match.
///
/// Status only moves forward (`Pending` → `ReadyToPlay` → `Completed`)
/// except through an explicit re-open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchStatus {
    /// At least one slot still waits on another match.
    Pending,
    /// Both slots hold participants.
    ReadyToPlay,
    /// Decided, either by a recorded result or by a bye.
    Completed,
}

impl MatchStatus {
    /// Converts this status to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::ReadyToPlay => "ReadyToPlay",
            Self::Completed => "Completed",
        }
    }
}

impl std::fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single match in a bracket.
///
/// `source_a`/`source_b` describe the bracket topology and never change after
/// construction. `slot_a`/`slot_b` hold the current resolution of those
/// sources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    /// The match id.
    pub id: MatchId,
    /// Which tree the match belongs to.
    pub side: BracketSide,
    /// Zero-based round index within its side.
    pub round: usize,
    /// Zero-based position within its round.
    pub position: usize,
    /// Where slot A is filled from.
    pub source_a: Slot,
    /// Where slot B is filled from.
    pub source_b: Slot,
    /// Current occupant of slot A.
    pub slot_a: Slot,
    /// Current occupant of slot B.
    pub slot_b: Slot,
    /// Current status.
    pub status: MatchStatus,
    /// Score recorded for slot A. `None` for byes and unplayed matches.
    pub score_a: Option<u32>,
    /// Score recorded for slot B. `None` for byes and unplayed matches.
    pub score_b: Option<u32>,
    /// Who verified the recorded result.
    pub verified_by: Option<String>,
    /// The winner. Set only once completed; `None` for a bye-versus-bye match.
    pub winner: Option<ParticipantId>,
}

impl Match {
    /// Creates a pending match whose slots start out equal to their sources.
    #[must_use]
    pub fn new(
        id: MatchId,
        side: BracketSide,
        round: usize,
        position: usize,
        source_a: Slot,
        source_b: Slot,
    ) -> Self {
        Self {
            id,
            side,
            round,
            position,
            slot_a: source_a.clone(),
            slot_b: source_b.clone(),
            source_a,
            source_b,
            status: MatchStatus::Pending,
            score_a: None,
            score_b: None,
            verified_by: None,
            winner: None,
        }
    }

    /// Returns whether the match was decided by a recorded result.
    #[must_use]
    pub const fn is_played(&self) -> bool {
        matches!(self.status, MatchStatus::Completed) && self.score_a.is_some()
    }

    /// Returns whether the match was decided without being played.
    #[must_use]
    pub const fn is_bye(&self) -> bool {
        matches!(self.status, MatchStatus::Completed) && self.score_a.is_none()
    }

    /// Returns whether the match completed with nobody in it.
    #[must_use]
    pub const fn is_void(&self) -> bool {
        matches!(self.status, MatchStatus::Completed) && self.winner.is_none()
    }

    /// Returns the losing participant of a played match.
    #[must_use]
    pub fn loser(&self) -> Option<&ParticipantId> {
        if !self.is_played() {
            return None;
        }
        let winner: &ParticipantId = self.winner.as_ref()?;
        [self.slot_a.participant(), self.slot_b.participant()]
            .into_iter()
            .flatten()
            .find(|p| *p != winner)
    }

    /// Returns whether the given participant occupies either slot.
    #[must_use]
    pub fn involves(&self, participant: &ParticipantId) -> bool {
        self.slot_a.participant() == Some(participant)
            || self.slot_b.participant() == Some(participant)
    }

    /// Clears the recorded result without touching the slots.
    pub(crate) fn clear_result(&mut self) {
        self.score_a = None;
        self.score_b = None;
        self.verified_by = None;
        self.winner = None;
    }
}
