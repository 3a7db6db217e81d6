//! Weekly comeback hero.
//!
//! A comeback is a 5-day completion streak built straight on top of a
//! miss-heavy week: at the check-in that brings a resolution's streak to
//! exactly 5, the 7 days strictly before the streak's start day must
//! hold at least 3 explicit misses. At most one comeback hero is crowned
//! per ISO week per group.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use tracing::info;

use pact_core::calendar;
use pact_core::model::{FeedEvent, FeedEventKind, Group, History, ResolutionStatus};
use pact_core::traits::FeedSink;

/// Streak length that triggers comeback detection.
pub const COMEBACK_STREAK: u32 = 5;
/// Days inspected strictly before the streak start.
pub const COMEBACK_LOOKBACK_DAYS: i64 = 7;
/// Misses required inside the lookback.
pub const COMEBACK_MIN_MISSES: usize = 3;

/// Whether a completed check-in that produced `streak` (ending `today`)
/// qualifies as a comeback.
pub fn is_comeback(history: &History, streak: u32, today: NaiveDate) -> bool {
    if streak != COMEBACK_STREAK {
        return false;
    }
    let streak_start = today - Duration::days(i64::from(COMEBACK_STREAK) - 1);
    let misses = (1..=COMEBACK_LOOKBACK_DAYS)
        .filter(|back| {
            history.get(&(streak_start - Duration::days(*back)))
                == Some(&ResolutionStatus::Missed)
        })
        .count();
    misses >= COMEBACK_MIN_MISSES
}

/// Crown `user_id` as this week's comeback hero, unless the week's slot
/// is already taken. Returns whether the selection happened; a selection
/// emits a `Comeback` feed event.
///
/// `today`/`now`: current day and timestamp (injectable for testing).
pub fn try_select_comeback_hero(
    group: &mut Group,
    user_id: &str,
    today: NaiveDate,
    now: DateTime<Utc>,
    feed: &mut dyn FeedSink,
) -> bool {
    let week_start = calendar::start_of_week(today);
    if group.last_comeback_selection_date == Some(week_start) {
        return false;
    }

    group.weekly_comeback_hero_id = Some(user_id.to_string());
    group.last_comeback_selection_date = Some(week_start);

    info!(group_id = %group.id, user_id = %user_id, %week_start, "comeback hero selected");
    feed.emit(FeedEvent::new(
        FeedEventKind::Comeback,
        user_id,
        format!("{user_id} bounced back with a {COMEBACK_STREAK}-day streak"),
        now,
    ));
    true
}
