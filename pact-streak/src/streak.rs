//! Current-streak computation.
//!
//! The streak is the run of consecutive `Completed` days ending at (and
//! including) today. Today's status is passed separately because a
//! check-in being applied may not yet be written into the history map.
//! Any non-`Completed` day — an explicit `Missed` or no entry at all —
//! terminates the walk. This is a "current streak ending today", not a
//! longest-ever streak.

use chrono::NaiveDate;

use pact_core::calendar;
use pact_core::model::{History, ResolutionStatus};

/// Compute the consecutive-completion streak ending at `today`.
///
/// Idempotent: recomputing on unchanged inputs yields the same count.
///
/// `today`: current calendar day (injectable for testing).
pub fn current_streak(
    history: &History,
    today_status: ResolutionStatus,
    today: NaiveDate,
) -> u32 {
    let mut streak = u32::from(today_status.is_completed());
    let mut day = calendar::yesterday(today);
    while history.get(&day) == Some(&ResolutionStatus::Completed) {
        streak += 1;
        day = match day.pred_opt() {
            Some(prev) => prev,
            None => break,
        };
    }
    streak
}
