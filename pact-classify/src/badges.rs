//! Badge evaluation.
//!
//! Badges are earned from streak milestones and from holding a
//! resolution past its lock-in window. `ComebackKid` is not evaluated
//! here — the weekly comeback selector awards it directly.

use chrono::{DateTime, Utc};

use pact_core::model::{Badge, Resolution, User, LOCK_IN_DAYS};

/// Evaluate streak/lock-in badges for a user against their resolutions
/// (archived ones still count toward streak milestones already reached).
/// Inserts into the user's badge set and returns only the newly earned
/// badges. Idempotent: a second run on unchanged inputs returns nothing.
pub fn evaluate_badges(
    user: &mut User,
    resolutions: &[Resolution],
    now: DateTime<Utc>,
) -> Vec<Badge> {
    let mut earned = Vec::new();

    if resolutions.iter().any(|r| r.current_streak >= 7) {
        earned.push(Badge::SevenDayStreak);
    }
    if resolutions.iter().any(|r| r.current_streak >= 30) {
        earned.push(Badge::ThirtyDayStreak);
    }
    if resolutions
        .iter()
        .any(|r| !r.is_archived() && r.days_since_creation(now) >= LOCK_IN_DAYS)
    {
        earned.push(Badge::LockedIn);
    }

    earned.retain(|badge| user.badges.insert(*badge));
    earned
}
