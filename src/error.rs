//! Error types for the rules engine.
//!
//! Errors are grouped by condition rather than by the operation that raised
//! them, so a caller can tell a setup bug (`Setup`, `GameNotInitialized`)
//! apart from an ordinary rule violation (`InvalidOperation`) that the player
//! can correct on a later turn.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The match cannot be configured or started as requested.
    #[error("{0}")]
    Setup(String),

    /// A gameplay rule rejected the operation (timing, hand, cost, ability preconditions).
    #[error("{0}")]
    InvalidOperation(String),

    /// The operation needs `Game::initialize` to have run first.
    #[error("{0}")]
    GameNotInitialized(String),

    /// The card has no ability bound under the requested kind or name.
    #[error("Card '{card}' has no capability named '{capability}'.")]
    CapabilityNotFound { card: String, capability: String },
}

impl GameError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        GameError::InvalidOperation(message.into())
    }

    /// Check if this error is a gameplay rule violation.
    #[must_use]
    pub fn is_invalid_operation(&self) -> bool {
        matches!(self, GameError::InvalidOperation(_))
    }
}

pub type Result<T> = std::result::Result<T, GameError>;
