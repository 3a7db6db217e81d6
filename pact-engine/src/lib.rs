//! # pact-engine
//!
//! The orchestration facade over the component crates. One check-in
//! event flows: history mutation → streak recompute → feed events →
//! comeback detection → full user recompute → badge evaluation. Votes
//! and archives follow the same shape: policy-checked mutation, then a
//! full recompute — derived fields are never patched incrementally.
//!
//! The engine is synchronous and deterministic; callers hand in a
//! consistent snapshot per invocation, serialize recomputation per user,
//! and persist whatever comes back as one logical write.
//!
//! ## Modules
//!
//! - `check_in` — the daily check-in flow
//! - `vote` — peer difficulty votes
//! - `archive` — lock-in-guarded archiving

pub mod archive;
pub mod check_in;
pub mod vote;

pub use archive::archive_resolution;
pub use check_in::{check_in, CheckInOutcome};
pub use vote::cast_difficulty_vote;

pub use pact_rank::refresh_daily_hero;
