//! Error types for SoundShuffle

use thiserror::Error;

/// Core error type
#[derive(Error, Debug)]
pub enum SsError {
    /// Random selection was requested before any events were indexed.
    #[error("Event index is empty: no events have been indexed yet")]
    EmptyIndex,

    /// A selection-mode tag outside the known set (persisted config corruption).
    #[error("Unsupported selection mode: {0:?}")]
    UnsupportedMode(String),

    /// The index build signal fired a second time; the index is built once per process.
    #[error("Event index has already been built")]
    IndexAlreadyBuilt,

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias
pub type SsResult<T> = Result<T, SsError>;
