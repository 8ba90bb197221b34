// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use bracketcraft_domain::{Match, MatchId, Participant, Placement};
use time::Date;

/// API request to create a new tournament.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTournamentRequest {
    /// The tournament name.
    pub name: String,
    /// The organizing body.
    pub organizer: Option<String>,
    /// Free-form description.
    pub description: Option<String>,
    /// The elimination format (`single-elimination` or `double-elimination`).
    pub mode: String,
    /// The participant cap.
    pub max_participants: u16,
    /// First day of play.
    pub starts_on: Option<Date>,
    /// Last day of play.
    pub ends_on: Option<Date>,
}

/// API response for a successful tournament creation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CreateTournamentResponse {
    /// The assigned tournament identifier.
    pub tournament_id: u64,
    /// The tournament name.
    pub name: String,
    /// The declared elimination format.
    pub mode: String,
    /// The participant cap.
    pub max_participants: u16,
    /// A success message.
    pub message: String,
}

/// API request to register a participant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterParticipantRequest {
    /// The tournament to register into.
    pub tournament_id: u64,
    /// The participant identifier.
    pub participant_id: String,
    /// The participant's display name.
    pub display_name: String,
}

/// API response for a successful registration.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RegisterParticipantResponse {
    /// The tournament registered into.
    pub tournament_id: u64,
    /// The registered participant's identifier.
    pub participant_id: String,
    /// The registered participant's display name.
    pub display_name: String,
    /// How many participants are now registered.
    pub registered_count: usize,
    /// A success message.
    pub message: String,
}

/// API request to withdraw a participant before registration closes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WithdrawParticipantRequest {
    /// The tournament.
    pub tournament_id: u64,
    /// The participant to withdraw.
    pub participant_id: String,
}

/// API response for a successful withdrawal.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct WithdrawParticipantResponse {
    /// The tournament.
    pub tournament_id: u64,
    /// The withdrawn participant's identifier.
    pub participant_id: String,
    /// How many participants remain registered.
    pub registered_count: usize,
    /// A success message.
    pub message: String,
}

/// API request to close registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloseRegistrationRequest {
    /// The tournament.
    pub tournament_id: u64,
    /// Shuffle the registration order with this RNG seed. `None` seeds in registration order.
    pub shuffle_seed: Option<u64>,
}

/// API response for a successful registration close.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CloseRegistrationResponse {
    /// The tournament.
    pub tournament_id: u64,
    /// Participants in seed order.
    pub seeds: Vec<ParticipantInfo>,
    /// A success message.
    pub message: String,
}

/// API request to build the bracket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildBracketRequest {
    /// The tournament.
    pub tournament_id: u64,
    /// The elimination format. `None` uses the mode the tournament was created with.
    pub mode: Option<String>,
}

/// API response for a successful bracket build.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BuildBracketResponse {
    /// The tournament.
    pub tournament_id: u64,
    /// The elimination format the bracket was built with.
    pub mode: String,
    /// Total number of matches, byes included.
    pub match_count: usize,
    /// Number of matches decided by a bye.
    pub bye_count: usize,
    /// Matches that can be played right away.
    pub ready_matches: Vec<String>,
    /// A success message.
    pub message: String,
}

/// API request to submit a match result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitResultRequest {
    /// The match. Its tournament routes the request.
    pub match_id: MatchId,
    /// Score for slot A.
    pub score_a: i64,
    /// Score for slot B.
    pub score_b: i64,
}

/// API response for a recorded result.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SubmitResultResponse {
    /// The match the result was recorded for.
    pub match_id: String,
    /// The winner.
    pub winner: String,
    /// The loser.
    pub loser: String,
    /// Set when the loser is out of the tournament.
    pub eliminated: Option<String>,
    /// Matches that became playable.
    pub newly_ready: Vec<String>,
    /// Set when this result decided the tournament.
    pub champion: Option<String>,
    /// The tournament's lifecycle stage after the result.
    pub lifecycle: String,
    /// A success message.
    pub message: String,
}

/// API request to re-open a completed match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReopenMatchRequest {
    /// The match to re-open.
    pub match_id: MatchId,
}

/// API response for a re-opened match.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ReopenMatchResponse {
    /// The re-opened match.
    pub match_id: String,
    /// Downstream matches whose results were cleared.
    pub invalidated: Vec<String>,
    /// The tournament's lifecycle stage after the re-open.
    pub lifecycle: String,
    /// A success message.
    pub message: String,
}

/// API request to import a roster CSV.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportRosterRequest {
    /// The tournament to register into.
    pub tournament_id: u64,
    /// The raw CSV content (`id,display_name` columns).
    pub csv_content: String,
}

/// Result of a single row import attempt.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RosterImportRowResult {
    /// The row number (1-based, excluding header).
    pub row_number: usize,
    /// The participant id from this row (if parsed).
    pub participant_id: Option<String>,
    /// The status of this import attempt.
    pub status: RosterImportRowStatus,
    /// Why the row was not imported.
    pub error: Option<String>,
}

/// Status of a single roster row import.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RosterImportRowStatus {
    /// The participant was registered.
    Imported,
    /// The row failed validation and was not attempted.
    Invalid,
    /// The tournament rejected the registration; the import stopped here.
    Rejected,
    /// Not attempted because an earlier row was rejected.
    Skipped,
}

impl RosterImportRowStatus {
    /// Returns the status as it appears in serialized responses.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Imported => "imported",
            Self::Invalid => "invalid",
            Self::Rejected => "rejected",
            Self::Skipped => "skipped",
        }
    }
}

/// API response for a roster import.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ImportRosterResponse {
    /// The tournament imported into.
    pub tournament_id: u64,
    /// Total number of data rows in the CSV.
    pub total_rows: usize,
    /// Number of participants registered.
    pub imported_count: usize,
    /// Number of rows not registered for any reason.
    pub failed_count: usize,
    /// Per-row import results.
    pub results: Vec<RosterImportRowResult>,
}

/// A participant as exposed by the API.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ParticipantInfo {
    /// The seed, once registration is closed.
    pub seed: Option<usize>,
    /// The participant identifier.
    pub participant_id: String,
    /// The display name.
    pub display_name: String,
}

impl ParticipantInfo {
    /// Builds the API view of a participant.
    #[must_use]
    pub fn new(participant: &Participant, seed: Option<usize>) -> Self {
        Self {
            seed,
            participant_id: participant.id.value().to_string(),
            display_name: participant.display_name.clone(),
        }
    }
}

/// A match as exposed by the API.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MatchInfo {
    /// The match id (`T{tournament}-M{number}`).
    pub match_id: String,
    /// The match number within its tournament.
    pub number: u32,
    /// The bracket side.
    pub side: String,
    /// Zero-based round index within its side.
    pub round: usize,
    /// Zero-based position within its round.
    pub position: usize,
    /// Slot A, as a participant id or a pending reference.
    pub slot_a: String,
    /// Slot B, as a participant id or a pending reference.
    pub slot_b: String,
    /// The match status.
    pub status: String,
    /// Score for slot A, once played.
    pub score_a: Option<u32>,
    /// Score for slot B, once played.
    pub score_b: Option<u32>,
    /// The winner, once decided.
    pub winner: Option<String>,
    /// Who verified the result.
    pub verified_by: Option<String>,
    /// Whether the match was decided without being played.
    pub bye: bool,
}

impl From<&Match> for MatchInfo {
    fn from(m: &Match) -> Self {
        Self {
            match_id: m.id.to_string(),
            number: m.id.number,
            side: m.side.to_string(),
            round: m.round,
            position: m.position,
            slot_a: m.slot_a.to_string(),
            slot_b: m.slot_b.to_string(),
            status: m.status.to_string(),
            score_a: m.score_a,
            score_b: m.score_b,
            winner: m.winner.as_ref().map(|w| w.value().to_string()),
            verified_by: m.verified_by.clone(),
            bye: m.is_bye(),
        }
    }
}

/// One round of a bracket side.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RoundInfo {
    /// The bracket side.
    pub side: String,
    /// Zero-based round index within the side.
    pub index: usize,
    /// The round's matches, in bracket order.
    pub matches: Vec<MatchInfo>,
}

/// A final standing.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PlacementInfo {
    /// The shared rank (1 is the champion).
    pub rank: usize,
    /// Participant ids holding this rank.
    pub participants: Vec<String>,
}

impl From<&Placement> for PlacementInfo {
    fn from(placement: &Placement) -> Self {
        Self {
            rank: placement.rank,
            participants: placement
                .participants
                .iter()
                .map(|p| p.value().to_string())
                .collect(),
        }
    }
}

/// Summary information about a tournament.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TournamentSummary {
    /// The tournament identifier.
    pub tournament_id: u64,
    /// The tournament name.
    pub name: String,
    /// The organizing body.
    pub organizer: Option<String>,
    /// The elimination format.
    pub mode: String,
    /// The lifecycle stage.
    pub lifecycle: String,
    /// Number of registered participants.
    pub participant_count: usize,
    /// The participant cap.
    pub max_participants: u16,
    /// First day of play.
    pub starts_on: Option<Date>,
    /// Last day of play.
    pub ends_on: Option<Date>,
    /// The champion's participant id, once Completed.
    pub champion: Option<String>,
}

/// The complete bracket of a tournament.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BracketView {
    /// The tournament.
    pub tournament: TournamentSummary,
    /// Participants in seed order.
    pub seeds: Vec<ParticipantInfo>,
    /// Winners bracket rounds.
    pub winners: Vec<RoundInfo>,
    /// Losers bracket rounds (empty in single elimination).
    pub losers: Vec<RoundInfo>,
    /// Grand final and reset match (empty in single elimination).
    pub finals: Vec<RoundInfo>,
    /// The champion, once Completed.
    pub champion: Option<ParticipantInfo>,
    /// Final standings, once Completed.
    pub placements: Vec<PlacementInfo>,
}
