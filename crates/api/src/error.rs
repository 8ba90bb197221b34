// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use bracketcraft::CoreError;
use bracketcraft_domain::DomainError;

/// Authentication and authorization errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// Authorization failed.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The role required for this action.
        required_role: String,
    },
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Unauthorized {
                action,
                required_role,
            } => {
                write!(f, "Unauthorized: '{action}' requires {required_role} role")
            }
        }
    }
}

impl std::error::Error for AuthError {}

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// Authorization failed - the actor does not have permission.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The role required for this action.
        required_role: String,
    },
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// The roster CSV could not be read at all.
    InvalidCsvFormat {
        /// Why the CSV was rejected.
        reason: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Unauthorized {
                action,
                required_role,
            } => {
                write!(f, "Unauthorized: '{action}' requires {required_role} role")
            }
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::InvalidCsvFormat { reason } => {
                write!(f, "Invalid CSV format: {reason}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::AuthenticationFailed { reason } => Self::AuthenticationFailed { reason },
            AuthError::Unauthorized {
                action,
                required_role,
            } => Self::Unauthorized {
                action,
                required_role,
            },
        }
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    let message: String = err.to_string();
    match err {
        DomainError::DuplicateParticipant { .. } => ApiError::DomainRuleViolation {
            rule: String::from("unique_participant"),
            message,
        },
        DomainError::InsufficientParticipants { .. } => ApiError::DomainRuleViolation {
            rule: String::from("minimum_participants"),
            message,
        },
        DomainError::MatchNotReady { .. } => ApiError::DomainRuleViolation {
            rule: String::from("match_ready"),
            message,
        },
        DomainError::DrawNotAllowed { .. } => ApiError::DomainRuleViolation {
            rule: String::from("no_draws"),
            message,
        },
        DomainError::TournamentState { .. } => ApiError::DomainRuleViolation {
            rule: String::from("tournament_lifecycle"),
            message,
        },
        DomainError::TournamentFull { .. } => ApiError::DomainRuleViolation {
            rule: String::from("participant_cap"),
            message,
        },
        DomainError::MatchNotReopenable { .. } => ApiError::DomainRuleViolation {
            rule: String::from("reopen_match"),
            message,
        },
        DomainError::InvalidScore { reason, .. } => ApiError::InvalidInput {
            field: String::from("score"),
            message: reason,
        },
        DomainError::InvalidSchedule { .. } => ApiError::InvalidInput {
            field: String::from("ends_on"),
            message,
        },
        DomainError::InvalidMaxParticipants { .. } => ApiError::InvalidInput {
            field: String::from("max_participants"),
            message,
        },
        DomainError::InvalidParticipantId(msg) => ApiError::InvalidInput {
            field: String::from("participant_id"),
            message: msg,
        },
        DomainError::InvalidDisplayName(msg) => ApiError::InvalidInput {
            field: String::from("display_name"),
            message: msg,
        },
        DomainError::InvalidTournamentName(msg) => ApiError::InvalidInput {
            field: String::from("name"),
            message: msg,
        },
        DomainError::InvalidMode(value) => ApiError::InvalidInput {
            field: String::from("mode"),
            message: format!(
                "Unknown tournament mode '{value}' (expected single-elimination or double-elimination)"
            ),
        },
        DomainError::InvalidBracketSide(value) => ApiError::InvalidInput {
            field: String::from("side"),
            message: format!("Unknown bracket side '{value}' (expected winners, losers or final)"),
        },
        DomainError::InvalidLifecycleState(value) => ApiError::InvalidInput {
            field: String::from("lifecycle"),
            message: format!("Unknown lifecycle state '{value}'"),
        },
        DomainError::MatchNotFound(_) => ApiError::ResourceNotFound {
            resource_type: String::from("Match"),
            message,
        },
        DomainError::ParticipantNotFound { .. } => ApiError::ResourceNotFound {
            resource_type: String::from("Participant"),
            message,
        },
        DomainError::TournamentNotFound(_) => ApiError::ResourceNotFound {
            resource_type: String::from("Tournament"),
            message,
        },
        DomainError::BracketNotBuilt(_) => ApiError::ResourceNotFound {
            resource_type: String::from("Bracket"),
            message,
        },
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err)
        | CoreError::CommandRejected {
            error: domain_err, ..
        } => translate_domain_error(domain_err),
    }
}
