//! Error types for the two things that can go wrong: syncing and submitting

use thiserror::Error;

/// Failure below HTTP semantics (no response at all, or unreadable body)
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("could not read response body: {0}")]
    Body(String),
}

/// Snapshot fetch failed; the previous snapshot stays in place
#[derive(Debug, Error)]
pub enum SyncError {
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("endpoint answered with HTTP {0}")]
    Status(u16),
    #[error("snapshot payload is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Transaction write failed; the form keeps its values for a retry
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("could not encode transaction: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Why a submit never left the form
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum SubmitBlocked {
    #[error("a submission is already in flight")]
    InFlight,
    #[error("{0} is required")]
    MissingField(&'static str),
}
