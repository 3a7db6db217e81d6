//! # pact-rank
//!
//! Orderings and once-per-period selections over a group's members:
//! the leaderboard, the daily hero, and the weekly comeback hero. The
//! selectors are the one place the engine produces externally visible
//! events (via the feed sink) rather than only values.
//!
//! ## Modules
//!
//! - `leaderboard` — (score desc, streak desc) with dense 1..N ranks
//! - `daily_hero` — all-or-nothing prior-day completion, honesty-gated
//! - `comeback` — 5-day streak straight after a miss-heavy week

pub mod comeback;
pub mod daily_hero;
pub mod leaderboard;

pub use comeback::{is_comeback, try_select_comeback_hero};
pub use daily_hero::refresh_daily_hero;
pub use leaderboard::{rank_users, Period};
