// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use bracketcraft_domain::{DomainError, TournamentId};

/// Errors that can occur during state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated outside any command, such as when
    /// tournament settings are validated at creation.
    DomainViolation(DomainError),

    /// A command against an existing tournament broke a domain rule.
    CommandRejected {
        tournament: TournamentId,
        /// The rejected command's name, as given by `Command::name`.
        command: &'static str,
        error: DomainError,
    },
}

impl CoreError {
    /// The domain rule that was broken.
    #[must_use]
    pub const fn domain_error(&self) -> &DomainError {
        match self {
            Self::DomainViolation(error) | Self::CommandRejected { error, .. } => error,
        }
    }

    /// Consumes the error, returning the domain rule that was broken.
    #[must_use]
    pub fn into_domain_error(self) -> DomainError {
        match self {
            Self::DomainViolation(error) | Self::CommandRejected { error, .. } => error,
        }
    }

    /// The name of the rejected command, if the error came from one.
    #[must_use]
    pub const fn command(&self) -> Option<&'static str> {
        match self {
            Self::DomainViolation(_) => None,
            Self::CommandRejected { command, .. } => Some(*command),
        }
    }

    /// Attaches the command and tournament that produced this error.
    ///
    /// An error that already names a command keeps it.
    #[must_use]
    pub fn in_command(self, tournament: TournamentId, command: &'static str) -> Self {
        match self {
            Self::DomainViolation(error) => Self::CommandRejected {
                tournament,
                command,
                error,
            },
            rejected @ Self::CommandRejected { .. } => rejected,
        }
    }
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::CommandRejected {
                tournament,
                command,
                error,
            } => write!(f, "{command} rejected for tournament {tournament}: {error}"),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
