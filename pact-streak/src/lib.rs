//! # pact-streak
//!
//! Per-resolution history analysis: the current-streak walk, the 7-day
//! health classifier, and the user-level "did they check in today"
//! rollup. Everything here is a pure function of a history map and an
//! injected `today`.
//!
//! ## Modules
//!
//! - `streak` — consecutive-completion streak ending today
//! - `health` — `Healthy | AtRisk | Slipping` from recent misses
//! - `day_status` — `Checked | Missed | Pending` across a user's resolutions

pub mod day_status;
pub mod health;
pub mod streak;

pub use day_status::{user_day_status, DayStatus};
pub use health::{classify_health, ResolutionHealth};
pub use streak::current_streak;
