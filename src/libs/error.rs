//! Typed errors for the tracking core.
//!
//! Every core operation (duration parsing, billing math, the timer state
//! machine, store calls) reports failures through [`TrackError`]. Command
//! handlers wrap it in `anyhow::Error` at the CLI boundary.

use thiserror::Error;

/// Recoverable failures of the tracking core.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrackError {
    /// Malformed duration, zero target time, inverted date range and the like.
    /// Always detected before any side effect.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The backing store rejected a list/create/update/delete call.
    #[error("Persistence failure: {0}")]
    PersistenceFailure(String),

    /// An operation was called in a state that does not allow it.
    #[error("Invalid state transition: {0}")]
    InvalidStateTransition(String),
}

impl TrackError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        TrackError::InvalidInput(msg.into())
    }

    pub fn persistence(msg: impl Into<String>) -> Self {
        TrackError::PersistenceFailure(msg.into())
    }

    pub fn invalid_transition(msg: impl Into<String>) -> Self {
        TrackError::InvalidStateTransition(msg.into())
    }
}

impl From<rusqlite::Error> for TrackError {
    fn from(err: rusqlite::Error) -> Self {
        TrackError::PersistenceFailure(err.to_string())
    }
}

/// Result alias for core operations.
pub type TrackResult<T> = std::result::Result<T, TrackError>;
