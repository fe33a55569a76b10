//! Error types for the icsweep engine.

use thiserror::Error;

/// Errors that abort a reconciliation run.
///
/// A UID with no matching remote event is not an error: the locator reports
/// it as `Ok(None)` and the driver records it in the summary.
#[derive(Error, Debug)]
pub enum SweepError {
    #[error("ICS file not found or unreadable: {0}")]
    InputNotFound(String),

    #[error("ICS parse error: {0}")]
    IcsParse(String),

    #[error("Remote calendar unavailable: {0}")]
    RemoteUnavailable(String),

    #[error("Failed to delete event {0}: {1}")]
    DeletionFailed(String, String),

    #[error("Malformed remote event: {0}")]
    InvalidRemoteEvent(String),

    #[error("UID '{0}' was read from the ICS source but can no longer be found in it")]
    LookupInconsistency(String),
}

/// Result type alias for engine operations.
pub type SweepResult<T> = Result<T, SweepError>;
