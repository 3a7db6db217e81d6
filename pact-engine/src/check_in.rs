//! The daily check-in flow.

use chrono::{DateTime, Utc};
use tracing::info;

use pact_core::config::EngineConfig;
use pact_core::errors::CheckInError;
use pact_core::model::{
    Badge, FeedEvent, FeedEventKind, Group, Resolution, ResolutionStatus, User,
};
use pact_core::traits::FeedSink;
use pact_core::{PactError, PactResult};

use pact_classify::evaluate_badges;
use pact_rank::{is_comeback, try_select_comeback_hero};
use pact_scoring::{point_value, recompute_user, UserDerived};
use pact_streak::current_streak;

/// Streak multiples that get a celebratory feed event.
pub const STREAK_MILESTONE: u32 = 7;

/// Everything a check-in changed, for the caller to persist.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckInOutcome {
    /// The checked-in resolution's refreshed streak.
    pub streak: u32,
    /// The user's recomputed aggregates.
    pub derived: UserDerived,
    /// Badges newly earned by this check-in.
    pub new_badges: Vec<Badge>,
    /// Whether this check-in crowned the weekly comeback hero.
    pub comeback: bool,
}

/// Apply one check-in for `user` on the resolution with `resolution_id`.
///
/// `resolutions`: all of the user's resolutions — the whole set is
/// needed because aggregates recompute from scratch. `group`: the user's
/// group when they have one, for comeback selection.
/// `now`: current timestamp (injectable for testing).
#[allow(clippy::too_many_arguments)]
pub fn check_in(
    resolution_id: &str,
    resolutions: &mut [Resolution],
    user: &mut User,
    group: Option<&mut Group>,
    status: ResolutionStatus,
    config: &EngineConfig,
    now: DateTime<Utc>,
    feed: &mut dyn FeedSink,
) -> PactResult<CheckInOutcome> {
    let today = now.date_naive();

    let resolution = resolutions
        .iter_mut()
        .find(|r| r.id == resolution_id)
        .ok_or_else(|| PactError::ResolutionNotFound(resolution_id.to_string()))?;
    if resolution.is_archived() {
        return Err(CheckInError::ResolutionArchived {
            resolution_id: resolution.id.clone(),
        }
        .into());
    }

    let old_streak = resolution.current_streak;
    resolution.record_check_in(today, status);
    let streak = current_streak(&resolution.history, status, today);
    resolution.current_streak = streak;

    info!(
        resolution_id = %resolution.id,
        user_id = %user.id,
        ?status,
        streak,
        "check-in recorded"
    );

    if !resolution.is_private && status == ResolutionStatus::Completed {
        let points = point_value(resolution.effective_difficulty);
        feed.emit(FeedEvent::new(
            FeedEventKind::CheckIn,
            user.id.clone(),
            format!("{} checked in on {} (+{points} pts)", user.id, resolution.id),
            now,
        ));
        if streak > 0 && streak % STREAK_MILESTONE == 0 && streak > old_streak {
            feed.emit(FeedEvent::new(
                FeedEventKind::Streak,
                user.id.clone(),
                format!("{} reached a {streak}-day streak on {}", user.id, resolution.id),
                now,
            ));
        }
    }

    let mut comeback = false;
    if status == ResolutionStatus::Completed && is_comeback(&resolution.history, streak, today) {
        if let Some(group) = group {
            comeback = try_select_comeback_hero(group, &user.id, today, now, feed);
        }
    }

    let derived = recompute_user(user, resolutions, &config.labels, today);
    let mut new_badges = evaluate_badges(user, resolutions, now);
    if comeback && user.badges.insert(Badge::ComebackKid) {
        new_badges.push(Badge::ComebackKid);
    }

    Ok(CheckInOutcome {
        streak,
        derived,
        new_badges,
        comeback,
    })
}
