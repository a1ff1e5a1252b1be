//! Error types for the fiction engine.

use sr_core::snapshot::SnapshotError;
use sr_core::WorldError;
use thiserror::Error;

/// Result type for fiction operations.
pub type FictionResult<T> = Result<T, FictionError>;

/// Everything that can go wrong while handling a command.
///
/// None of these end the session; the message is shown and the player is
/// prompted again.
#[derive(Debug, Error)]
pub enum FictionError {
    /// An item or room lookup failed (not found, not visible, too big, ...).
    #[error(transparent)]
    World(#[from] WorldError),

    /// The action cannot happen in the current state.
    #[error("{0}")]
    PreconditionFailed(String),

    /// The first word is not a verb the game knows.
    #[error("Not a valid command: {0}")]
    InvalidCommand(String),

    /// Saving or restoring failed.
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
}

impl FictionError {
    /// Shorthand for [`FictionError::PreconditionFailed`].
    pub fn precondition(message: impl Into<String>) -> Self {
        Self::PreconditionFailed(message.into())
    }
}
