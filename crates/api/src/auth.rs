// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Authentication and authorization types and services.
//!
//! Identity is supplied by the host. This module only decides what an
//! already-identified actor may do.

use bracketcraft_audit::Actor;
use std::str::FromStr;

use crate::error::AuthError;

/// Actor roles for authorization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Organizer role: runs tournaments.
    ///
    /// Organizers may:
    /// - create tournaments
    /// - register, import and withdraw participants
    /// - close registration and build brackets
    /// - submit and re-open match results
    Organizer,
    /// Referee role: reports match results and nothing else.
    Referee,
}

impl Role {
    /// Returns the role's name as recorded in audit events.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Organizer => "organizer",
            Self::Referee => "referee",
        }
    }
}

impl FromStr for Role {
    type Err = AuthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "organizer" => Ok(Self::Organizer),
            "referee" => Ok(Self::Referee),
            _ => Err(AuthError::AuthenticationFailed {
                reason: format!("Unknown role '{s}'"),
            }),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An authenticated actor with an associated role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedActor {
    /// The unique identifier for this actor.
    pub id: String,
    /// The role assigned to this actor.
    pub role: Role,
}

impl AuthenticatedActor {
    /// Creates a new authenticated actor.
    ///
    /// # Arguments
    ///
    /// * `id` - The unique identifier for this actor
    /// * `role` - The role assigned to this actor
    #[must_use]
    pub const fn new(id: String, role: Role) -> Self {
        Self { id, role }
    }

    /// Converts this authenticated actor into an audit Actor.
    ///
    /// The actor id is also what gets recorded as the verifier of results.
    #[must_use]
    pub fn to_audit_actor(&self) -> Actor {
        Actor::new(self.id.clone(), String::from(self.role.as_str()))
    }
}

/// Authorization service for enforcing role-based access control.
pub struct AuthorizationService;

impl AuthorizationService {
    fn require_organizer(actor: &AuthenticatedActor, action: &str) -> Result<(), AuthError> {
        match actor.role {
            Role::Organizer => Ok(()),
            Role::Referee => Err(AuthError::Unauthorized {
                action: String::from(action),
                required_role: String::from("Organizer"),
            }),
        }
    }

    /// Checks if an actor is authorized to create a tournament.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor does not have the Organizer role.
    pub fn authorize_create_tournament(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        Self::require_organizer(actor, "create_tournament")
    }

    /// Checks if an actor is authorized to register, import or withdraw participants.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor does not have the Organizer role.
    pub fn authorize_manage_registration(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        Self::require_organizer(actor, "manage_registration")
    }

    /// Checks if an actor is authorized to close registration and build the bracket.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor does not have the Organizer role.
    pub fn authorize_build_bracket(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        Self::require_organizer(actor, "build_bracket")
    }

    /// Checks if an actor is authorized to submit a match result.
    ///
    /// Both Organizers and Referees may submit results.
    ///
    /// # Errors
    ///
    /// Currently never returns an error.
    pub const fn authorize_submit_result(_actor: &AuthenticatedActor) -> Result<(), AuthError> {
        Ok(())
    }

    /// Checks if an actor is authorized to re-open a completed match.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor does not have the Organizer role.
    pub fn authorize_reopen_match(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        Self::require_organizer(actor, "reopen_match")
    }
}

/// Resolves a caller-supplied identity into an authenticated actor.
///
/// Stands in for the host's identity provider.
///
/// # Arguments
///
/// * `actor_id` - The identifier of the actor to authenticate
/// * `role` - The role to assign to the actor
///
/// # Errors
///
/// Returns `AuthError::AuthenticationFailed` if the id is empty.
pub fn authenticate_stub(actor_id: &str, role: Role) -> Result<AuthenticatedActor, AuthError> {
    let id: &str = actor_id.trim();
    if id.is_empty() {
        return Err(AuthError::AuthenticationFailed {
            reason: String::from("Actor ID cannot be empty"),
        });
    }
    Ok(AuthenticatedActor::new(id.to_string(), role))
}
