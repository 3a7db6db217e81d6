/// Archive policy violations.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ArchiveError {
    #[error("cannot archive during the 7-day lock-in: {days_remaining} day(s) remaining")]
    LockInActive { days_remaining: i64 },

    #[error("resolution already archived: {resolution_id}")]
    AlreadyArchived { resolution_id: String },
}
