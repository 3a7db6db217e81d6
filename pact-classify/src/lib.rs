//! # pact-classify
//!
//! Behavioral classification: the quarter-to-date identity label a user
//! carries on their profile, and the badge set earned from streak and
//! lock-in milestones. Pure functions of resolution histories and an
//! injected `today`.
//!
//! ## Modules
//!
//! - `window` — opportunity/completion tallies over a date window
//! - `classifier` — the six-label priority classification
//! - `badges` — streak and lock-in badge evaluation

pub mod badges;
pub mod classifier;
pub mod window;

pub use badges::evaluate_badges;
pub use classifier::classify_label;
pub use window::{tally_window, HalfTally, WindowTally};
