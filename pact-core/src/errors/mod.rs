//! Subsystem error enums and the workspace-wide result alias.
//!
//! Three logical families, surfaced synchronously: policy violations
//! (`VoteError`, `ArchiveError`, `CheckInError` — rejected operations
//! with a specific reason), missing entities (the `*NotFound` variants,
//! distinct from validation failures), and invalid input shape — which
//! never reaches engine code at all because the serde boundary rejects
//! it during deserialization.

mod archive_error;
mod check_in_error;
mod vote_error;

pub use archive_error::ArchiveError;
pub use check_in_error::CheckInError;
pub use vote_error::VoteError;

/// Umbrella error for engine operations.
#[derive(Debug, thiserror::Error)]
pub enum PactError {
    #[error("resolution not found: {0}")]
    ResolutionNotFound(String),

    #[error("user not found: {0}")]
    UserNotFound(String),

    #[error(transparent)]
    Vote(#[from] VoteError),

    #[error(transparent)]
    Archive(#[from] ArchiveError),

    #[error(transparent)]
    CheckIn(#[from] CheckInError),
}

pub type PactResult<T> = Result<T, PactError>;
