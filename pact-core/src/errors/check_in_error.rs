/// Check-in policy violations.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CheckInError {
    #[error("cannot check in on an archived resolution: {resolution_id}")]
    ResolutionArchived { resolution_id: String },
}
