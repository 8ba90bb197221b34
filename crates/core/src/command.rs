// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use bracketcraft_domain::{MatchId, Participant, ParticipantId, SeedingPolicy, TournamentMode};

/// A command represents organizer or referee intent as data only.
///
/// Commands are the only way to request changes to an existing tournament.
/// Creating a tournament goes through [`crate::apply_create`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add a participant to a tournament that is still in Draft.
    RegisterParticipant {
        /// The participant to add.
        participant: Participant,
    },
    /// Remove a participant from a tournament that is still in Draft.
    WithdrawParticipant {
        /// The participant to remove.
        participant_id: ParticipantId,
    },
    /// Freeze registration and fix the seed order.
    CloseRegistration {
        /// How the registration order becomes the seed order.
        seeding: SeedingPolicy,
    },
    /// Build the bracket from the frozen seeds.
    BuildBracket {
        /// The elimination format to build.
        mode: TournamentMode,
    },
    /// Record a verified result for a ready match.
    SubmitResult {
        /// The match being reported.
        match_id: MatchId,
        /// Score for slot A.
        score_a: i64,
        /// Score for slot B.
        score_b: i64,
    },
    /// Re-open a completed match so a corrected result can be recorded.
    ReopenMatch {
        /// The match to re-open.
        match_id: MatchId,
    },
}

impl Command {
    /// Returns the audit action name for this command.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::RegisterParticipant { .. } => "RegisterParticipant",
            Self::WithdrawParticipant { .. } => "WithdrawParticipant",
            Self::CloseRegistration { .. } => "CloseRegistration",
            Self::BuildBracket { .. } => "BuildBracket",
            Self::SubmitResult { .. } => "SubmitResult",
            Self::ReopenMatch { .. } => "ReopenMatch",
        }
    }
}
