//! Periodic report generation.
//!
//! Per-resolution completed/opportunity counts are restricted to window
//! days on/after that resolution's creation day. A resolution with zero
//! in-window opportunities is inactive for the window: it is excluded
//! from the consistency average rather than counted as 0%. Best/worst
//! selection under equal rates keeps the first one encountered — stable
//! input order dependent, by design.

use chrono::{Duration, NaiveDate};
use tracing::debug;

use pact_core::calendar;
use pact_core::model::{RankChange, Resolution, ResolutionStatus, User};
use pact_core::traits::TrustSource;
use pact_core::{PactError, PactResult};

use crate::types::{PeriodicReport, ReportKind, ResolutionRate, TrustTrend};

impl ReportKind {
    /// First day of the window ending at `today`.
    pub fn window_start(self, today: NaiveDate) -> NaiveDate {
        match self {
            Self::Weekly => today - Duration::days(6),
            Self::Monthly => calendar::start_of_month(today),
            Self::Yearly => calendar::start_of_year(today),
        }
    }
}

/// In-window rate for one resolution; `None` when it had no
/// opportunities (created after the window's end or zero window days).
fn window_rate(resolution: &Resolution, days: &[NaiveDate]) -> Option<ResolutionRate> {
    let created = resolution.created_on();
    let mut completed = 0u32;
    let mut opportunities = 0u32;
    for day in days {
        if *day < created {
            continue;
        }
        opportunities += 1;
        if resolution.history.get(day) == Some(&ResolutionStatus::Completed) {
            completed += 1;
        }
    }
    (opportunities > 0).then(|| ResolutionRate {
        resolution_id: resolution.id.clone(),
        completed,
        opportunities,
        rate: f64::from(completed) / f64::from(opportunities),
    })
}

fn whole_percent(value: f64) -> u32 {
    (value * 100.0).round() as u32
}

fn rank_delta(change: RankChange) -> i32 {
    match change {
        RankChange::Up => 1,
        RankChange::Down => -1,
        RankChange::Same => 0,
    }
}

fn trust_trend(honesty: u8) -> TrustTrend {
    if honesty >= 95 {
        TrustTrend::Up
    } else if honesty < 80 {
        TrustTrend::Down
    } else {
        TrustTrend::Stable
    }
}

/// Generate a report for `user_id` over the window ending at `today`.
///
/// `resolutions`: that user's resolutions (all of them — archived
/// history still reports). `members`/`member_resolutions`: the whole
/// group, requesting user included, for the comparison block. Fails
/// with `UserNotFound` when `user_id` is not among the members.
/// `today`: current calendar day (injectable for testing).
pub fn generate_report(
    kind: ReportKind,
    user_id: &str,
    resolutions: &[Resolution],
    members: &[User],
    member_resolutions: &[Resolution],
    trust: &dyn TrustSource,
    today: NaiveDate,
) -> PactResult<PeriodicReport> {
    let user = members
        .iter()
        .find(|m| m.id == user_id)
        .ok_or_else(|| PactError::UserNotFound(user_id.to_string()))?;

    let window_start = kind.window_start(today);
    let days = calendar::date_range(window_start, today);

    let mut days_checked_in = 0u32;
    let mut points_gained = 0.0;
    let mut rate_sum = 0.0;
    let mut active_count = 0u32;
    let mut best: Option<ResolutionRate> = None;
    let mut worst: Option<ResolutionRate> = None;

    for resolution in resolutions.iter().filter(|r| r.owner_id == user.id) {
        let Some(rate) = window_rate(resolution, &days) else {
            continue;
        };

        days_checked_in += rate.completed;
        if !resolution.is_private {
            points_gained += f64::from(rate.completed) * resolution.effective_difficulty;
        }
        rate_sum += rate.rate;
        active_count += 1;

        // First-encountered wins ties.
        if best.as_ref().map_or(true, |b| rate.rate > b.rate) {
            best = Some(rate.clone());
        }
        if worst.as_ref().map_or(true, |w| rate.rate < w.rate) {
            worst = Some(rate);
        }
    }

    let consistency = if active_count > 0 {
        whole_percent(rate_sum / f64::from(active_count))
    } else {
        0
    };

    // Group comparison: every resolution of every member, same rate rule.
    let mut group_rate_sum = 0.0;
    let mut group_active = 0u32;
    for member in members {
        for resolution in member_resolutions.iter().filter(|r| r.owner_id == member.id) {
            if let Some(rate) = window_rate(resolution, &days) {
                group_rate_sum += rate.rate;
                group_active += 1;
            }
        }
    }
    let group_consistency = if group_active > 0 {
        whole_percent(group_rate_sum / f64::from(group_active))
    } else {
        0
    };
    // Strict comparison keeps the first member encountered on a tie.
    let group_hero = members
        .iter()
        .fold(None::<&User>, |best, member| match best {
            Some(current) if member.score > current.score => Some(member),
            None => Some(member),
            _ => best,
        })
        .map(|u| u.id.clone());

    let honesty = trust.honesty_score(&user.id).unwrap_or(100);

    debug!(
        user_id = %user.id,
        ?kind,
        %window_start,
        consistency,
        group_consistency,
        "generated periodic report"
    );

    Ok(PeriodicReport {
        kind,
        window_start,
        window_end: today,
        days_checked_in,
        points_gained,
        rank_change: rank_delta(user.rank_change),
        consistency,
        best_resolution: best.map(|r| r.resolution_id),
        worst_resolution: worst.map(|r| r.resolution_id),
        trust_trend: trust_trend(honesty),
        group_consistency,
        group_hero,
    })
}
