//! Error types.

use thiserror::Error;

/// Errors from driving a [`Round`](crate::Round) step by step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// The step is not allowed in the round's current state.
    #[error("invalid round state for this action")]
    InvalidState,
}

/// Errors from a [`Scripted`](crate::Scripted) decision source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScriptError {
    /// The script ran out before the player's turn ended.
    #[error("scripted decisions exhausted")]
    Exhausted,
}

/// Errors from parsing a `name,balance,wins` player record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RecordError {
    /// The line does not have exactly three comma-separated fields.
    #[error("expected 3 fields, found {0}")]
    FieldCount(usize),
    /// The name field is blank.
    #[error("player name is empty")]
    EmptyName,
}

/// Errors from reading or writing the player store.
#[cfg(feature = "std")]
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store file or its directory could not be accessed.
    #[error("failed to access player records at {}", .path.display())]
    Io {
        /// Path that was being accessed.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Errors from a full console session, from loading the roster to saving it.
#[cfg(feature = "std")]
#[derive(Debug, Error)]
pub enum SessionError {
    /// The player store could not be loaded or saved.
    #[error(transparent)]
    Store(#[from] StoreError),
    /// The console failed while the session was running.
    #[error("console session failed")]
    Console(#[from] std::io::Error),
}
