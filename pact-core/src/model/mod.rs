//! Entity types shared across the engine crates.
//!
//! These are the typed, already-valid forms the persistence boundary
//! hands to the engine. Validation (difficulty range, date keys) happens
//! in the serde layer; engine code never duck-checks its inputs.

mod badge;
mod difficulty;
mod feed_event;
mod group;
mod label;
mod resolution;
mod status;
mod user;

pub use badge::Badge;
pub use difficulty::Difficulty;
pub use feed_event::{FeedEvent, FeedEventKind};
pub use group::Group;
pub use label::IdentityLabel;
pub use resolution::{History, Resolution, LOCK_IN_DAYS};
pub use status::ResolutionStatus;
pub use user::{RankChange, User};
