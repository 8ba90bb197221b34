// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use bracketcraft_audit::{AuditEvent, StateSnapshot};
use bracketcraft_domain::{
    Advancement, Bracket, DomainError, MatchId, Participant, ParticipantId, SeedingPolicy,
    TournamentId, TournamentLifecycle, TournamentSettings,
};

/// The complete state of a single tournament.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    /// The tournament this state belongs to.
    pub id: TournamentId,
    /// Descriptive and capacity settings.
    pub settings: TournamentSettings,
    /// The lifecycle stage.
    pub lifecycle: TournamentLifecycle,
    /// Registered participants, in registration order.
    pub participants: Vec<Participant>,
    /// The seed order fixed when registration closed. Empty while in Draft.
    pub seeds: Vec<Participant>,
    /// The policy that produced `seeds`.
    pub seeding: Option<SeedingPolicy>,
    /// The bracket, once built.
    pub bracket: Option<Bracket>,
}

impl State {
    /// Creates a new Draft tournament.
    ///
    /// # Arguments
    ///
    /// * `id` - The tournament id
    /// * `settings` - The tournament settings
    #[must_use]
    pub const fn new(id: TournamentId, settings: TournamentSettings) -> Self {
        Self {
            id,
            settings,
            lifecycle: TournamentLifecycle::Draft,
            participants: Vec::new(),
            seeds: Vec::new(),
            seeding: None,
            bracket: None,
        }
    }

    /// Returns the bracket if the lifecycle stage exposes one.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::BracketNotBuilt` before the bracket is built.
    pub fn bracket(&self) -> Result<&Bracket, DomainError> {
        self.bracket
            .as_ref()
            .filter(|_| self.lifecycle.exposes_bracket())
            .ok_or(DomainError::BracketNotBuilt(self.id))
    }

    /// Returns the champion, once the tournament is Completed.
    #[must_use]
    pub fn champion(&self) -> Option<&Participant> {
        if self.lifecycle != TournamentLifecycle::Completed {
            return None;
        }
        let bracket: &Bracket = self.bracket.as_ref()?;
        bracket.champion().and_then(|id| bracket.participant(id))
    }

    /// Looks up a registered participant.
    #[must_use]
    pub fn participant(&self, id: &ParticipantId) -> Option<&Participant> {
        self.participants.iter().find(|p| &p.id == id)
    }

    /// Converts the state to a snapshot for audit purposes.
    #[must_use]
    pub fn to_snapshot(&self) -> StateSnapshot {
        let (played, champion): (usize, &str) =
            self.bracket.as_ref().map_or((0, "none"), |bracket| {
                (
                    bracket.matches().iter().filter(|m| m.is_played()).count(),
                    bracket.champion().map_or("none", ParticipantId::value),
                )
            });
        StateSnapshot::new(format!(
            "tournament={},lifecycle={},participants={},played_matches={played},champion={champion}",
            self.id,
            self.lifecycle,
            self.participants.len(),
        ))
    }
}

/// What a transition produced besides the new state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing beyond the state change.
    Updated,
    /// Registration closed with this seed order.
    Seeded(Vec<Participant>),
    /// A result was recorded.
    Advanced(Advancement),
    /// A match was re-opened; these downstream matches were invalidated.
    Reopened(Vec<MatchId>),
}

/// The result of a successful state transition.
///
/// Transitions are atomic: they either succeed completely or fail without side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The new state after the transition.
    pub new_state: State,
    /// The audit event recording this transition.
    pub audit_event: AuditEvent,
    /// Command-specific output.
    pub outcome: Outcome,
}
