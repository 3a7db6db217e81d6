//! Full-recompute score aggregation.
//!
//! Given a user and their resolutions, rebuild every derived field from
//! raw history: lifetime score, month-to-date score, max streak, and the
//! seasonal identity label. Invoked after any check-in, peer vote,
//! archive, or creation touching the user; always from scratch.
//!
//! A resolution whose cached effective difficulty is not a usable weight
//! (non-finite or negative) contributes zero points and is logged — one
//! poisoned record must never abort the rest of the aggregation.

use chrono::NaiveDate;
use tracing::{debug, warn};

use pact_core::calendar;
use pact_core::config::LabelConfig;
use pact_core::model::{IdentityLabel, Resolution, User};

use pact_classify::classify_label;
use pact_streak::current_streak;

/// Derived per-user outputs of one aggregation pass.
#[derive(Debug, Clone, PartialEq)]
pub struct UserDerived {
    pub score: f64,
    pub monthly_score: f64,
    pub streak: u32,
    pub seasonal_label: IdentityLabel,
}

/// Recompute a user's derived fields from their resolutions.
///
/// Only non-private, non-archived resolutions score; each one also gets
/// its `current_streak` cache rewritten as a side effect. The user's
/// fields are updated in place and the same values returned.
///
/// Idempotent: a second pass on unchanged inputs yields identical
/// outputs. `today`: current calendar day (injectable for testing).
pub fn recompute_user(
    user: &mut User,
    resolutions: &mut [Resolution],
    config: &LabelConfig,
    today: NaiveDate,
) -> UserDerived {
    let month_start = calendar::start_of_month(today);

    let mut score = 0.0;
    let mut monthly_score = 0.0;
    let mut max_streak = 0u32;

    for resolution in resolutions
        .iter_mut()
        .filter(|r| r.owner_id == user.id && r.scoreable())
    {
        let weight = usable_weight(resolution);

        score += resolution.completions() as f64 * weight;
        monthly_score += resolution.completions_since(month_start) as f64 * weight;

        let streak = current_streak(&resolution.history, resolution.today_status, today);
        resolution.current_streak = streak;
        max_streak = max_streak.max(streak);
    }

    let scoreable: Vec<Resolution> = resolutions
        .iter()
        .filter(|r| r.owner_id == user.id && r.scoreable())
        .cloned()
        .collect();
    let seasonal_label = classify_label(&scoreable, config, today);

    user.score = score;
    user.monthly_score = monthly_score;
    user.streak = max_streak;
    user.seasonal_label = seasonal_label;

    debug!(
        user_id = %user.id,
        score,
        monthly_score,
        streak = max_streak,
        label = %seasonal_label,
        "recomputed user aggregates"
    );

    UserDerived {
        score,
        monthly_score,
        streak: max_streak,
        seasonal_label,
    }
}

fn usable_weight(resolution: &Resolution) -> f64 {
    let weight = resolution.effective_difficulty;
    if weight.is_finite() && weight >= 0.0 {
        weight
    } else {
        warn!(
            resolution_id = %resolution.id,
            effective_difficulty = weight,
            "unusable effective difficulty, contributing zero"
        );
        0.0
    }
}

#[cfg(test)]
mod tests {
    use pact_core::model::ResolutionStatus;
    use test_fixtures::{completed_run, day, instant, private_resolution, resolution, user};

    use super::*;

    fn today() -> NaiveDate {
        day(2024, 3, 15)
    }

    #[test]
    fn score_weights_completions_by_effective_difficulty() {
        let mut member = user("u1");
        let mut res = resolution("r1", "u1", 3, instant(2024, 2, 1));
        completed_run(&mut res, day(2024, 2, 10), 4); // 4 completions, pre-month
        let mut resolutions = vec![res];

        let derived = recompute_user(
            &mut member,
            &mut resolutions,
            &LabelConfig::default(),
            today(),
        );
        assert_eq!(derived.score, 12.0);
        assert_eq!(derived.monthly_score, 0.0);
        assert_eq!(member.score, 12.0);
    }

    #[test]
    fn monthly_score_counts_only_month_to_date() {
        let mut member = user("u1");
        let mut res = resolution("r1", "u1", 2, instant(2024, 2, 1));
        completed_run(&mut res, day(2024, 2, 27), 3); // Feb 27, 28, 29
        completed_run(&mut res, day(2024, 3, 1), 2); // Mar 1, 2
        let mut resolutions = vec![res];

        let derived = recompute_user(
            &mut member,
            &mut resolutions,
            &LabelConfig::default(),
            today(),
        );
        assert_eq!(derived.score, 10.0);
        assert_eq!(derived.monthly_score, 4.0);
    }

    #[test]
    fn private_and_archived_resolutions_do_not_score() {
        let mut member = user("u1");
        let mut public = resolution("r1", "u1", 1, instant(2024, 2, 1));
        completed_run(&mut public, day(2024, 3, 1), 2);
        let mut private = private_resolution("r2", "u1", 5, instant(2024, 2, 1));
        completed_run(&mut private, day(2024, 3, 1), 5);
        let mut archived = resolution("r3", "u1", 5, instant(2024, 2, 1));
        completed_run(&mut archived, day(2024, 3, 1), 5);
        archived.archive(instant(2024, 3, 10), "done").unwrap();
        let mut resolutions = vec![public, private, archived];

        let derived = recompute_user(
            &mut member,
            &mut resolutions,
            &LabelConfig::default(),
            today(),
        );
        assert_eq!(derived.score, 2.0);
    }

    #[test]
    fn streak_is_max_across_resolutions_and_written_back() {
        let mut member = user("u1");
        let mut short = resolution("r1", "u1", 3, instant(2024, 2, 1));
        completed_run(&mut short, day(2024, 3, 13), 2); // ends Mar 14
        let mut long = resolution("r2", "u1", 3, instant(2024, 2, 1));
        completed_run(&mut long, day(2024, 3, 10), 5); // ends Mar 14
        let mut resolutions = vec![short, long];

        let derived = recompute_user(
            &mut member,
            &mut resolutions,
            &LabelConfig::default(),
            today(),
        );
        assert_eq!(derived.streak, 5);
        assert_eq!(resolutions[0].current_streak, 2);
        assert_eq!(resolutions[1].current_streak, 5);
    }

    #[test]
    fn recompute_is_idempotent() {
        let mut member = user("u1");
        let mut res = resolution("r1", "u1", 4, instant(2024, 2, 1));
        completed_run(&mut res, day(2024, 3, 1), 10);
        res.record_check_in(today(), ResolutionStatus::Completed);
        let mut resolutions = vec![res];

        let first = recompute_user(
            &mut member,
            &mut resolutions,
            &LabelConfig::default(),
            today(),
        );
        let second = recompute_user(
            &mut member,
            &mut resolutions,
            &LabelConfig::default(),
            today(),
        );
        assert_eq!(first, second);
    }

    #[test]
    fn poisoned_effective_difficulty_contributes_zero_not_abort() {
        let mut member = user("u1");
        let mut poisoned = resolution("r1", "u1", 3, instant(2024, 2, 1));
        poisoned.effective_difficulty = f64::NAN;
        completed_run(&mut poisoned, day(2024, 3, 1), 3);
        let mut healthy = resolution("r2", "u1", 2, instant(2024, 2, 1));
        completed_run(&mut healthy, day(2024, 3, 1), 3);
        let mut resolutions = vec![poisoned, healthy];

        let derived = recompute_user(
            &mut member,
            &mut resolutions,
            &LabelConfig::default(),
            today(),
        );
        assert_eq!(derived.score, 6.0);
    }

    #[test]
    fn other_users_resolutions_are_ignored() {
        let mut member = user("u1");
        let mut theirs = resolution("r9", "u2", 5, instant(2024, 2, 1));
        completed_run(&mut theirs, day(2024, 3, 1), 10);
        let mut resolutions = vec![theirs];

        let derived = recompute_user(
            &mut member,
            &mut resolutions,
            &LabelConfig::default(),
            today(),
        );
        assert_eq!(derived.score, 0.0);
        assert_eq!(derived.streak, 0);
    }
}
