// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod advancement;
mod bracket;
mod error;
mod matches;
mod seeding;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use advancement::Advancement;
pub use bracket::{Bracket, Placement, build_bracket};
pub use error::DomainError;
pub use matches::{Match, MatchId, MatchStatus, Slot};
pub use seeding::{SeedingPolicy, apply_seeding, bracket_size, standard_seed_order};
pub use types::{
    BracketSide, Participant, ParticipantId, TournamentId, TournamentLifecycle, TournamentMode,
    TournamentSettings,
};
pub use validation::{
    validate_capacity, validate_participant_fields, validate_participant_unique,
    validate_tournament_settings,
};
