/// Peer difficulty vote policy violations.
///
/// A voter overwriting their own earlier vote is not an error; the new
/// value replaces the old one.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum VoteError {
    #[error("owner cannot vote on their own resolution")]
    OwnerVote,

    #[error("cannot vote on a private resolution")]
    PrivateResolution,
}
