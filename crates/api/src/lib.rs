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
    clippy::unwrap_used,
    clippy::expect_used
)]

mod auth;
mod error;
mod request_response;
mod roster;
mod service;

#[cfg(test)]
mod tests;

pub use auth::{AuthenticatedActor, AuthorizationService, Role, authenticate_stub};
pub use error::{ApiError, AuthError, translate_core_error, translate_domain_error};
pub use request_response::{
    BracketView, BuildBracketRequest, BuildBracketResponse, CloseRegistrationRequest,
    CloseRegistrationResponse, CreateTournamentRequest, CreateTournamentResponse,
    ImportRosterRequest, ImportRosterResponse, MatchInfo, ParticipantInfo, PlacementInfo,
    RegisterParticipantRequest, RegisterParticipantResponse, ReopenMatchRequest,
    ReopenMatchResponse, RosterImportRowResult, RosterImportRowStatus, RoundInfo,
    SubmitResultRequest, SubmitResultResponse, TournamentSummary, WithdrawParticipantRequest,
    WithdrawParticipantResponse,
};
pub use roster::{RosterPreview, RosterRowResult, RosterRowStatus, preview_roster_csv};
pub use service::{ApiResult, TournamentService};
