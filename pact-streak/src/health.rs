//! Resolution health from recent misses.
//!
//! Window: exactly the 7 calendar days strictly before today (today
//! excluded). Only explicit `Missed` entries count; absent days and
//! `Unchecked` never do.
//!
//! | Rule (first match wins)                      | Health     |
//! |----------------------------------------------|------------|
//! | ≥ 2 misses in days 1–5 back, or ≥ 3 in 7     | `Slipping` |
//! | ≥ 2 misses in the 7-day window               | `AtRisk`   |
//! | otherwise                                    | `Healthy`  |

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use pact_core::config::HealthConfig;
use pact_core::model::{Resolution, ResolutionStatus};

/// Risk tier for one resolution. Archived resolutions are always
/// `Healthy` — they are out of risk messaging entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResolutionHealth {
    Healthy,
    AtRisk,
    Slipping,
}

/// Classify a resolution's health as of `today`.
///
/// `today`: current calendar day (injectable for testing).
pub fn classify_health(
    resolution: &Resolution,
    config: &HealthConfig,
    today: NaiveDate,
) -> ResolutionHealth {
    if resolution.is_archived() {
        return ResolutionHealth::Healthy;
    }

    let mut misses_last_5 = 0u32;
    let mut misses_last_7 = 0u32;
    for back in 1..=7i64 {
        let day = today - Duration::days(back);
        if resolution.history.get(&day) == Some(&ResolutionStatus::Missed) {
            misses_last_7 += 1;
            if back <= 5 {
                misses_last_5 += 1;
            }
        }
    }

    if misses_last_5 >= config.slipping_misses_last_5
        || misses_last_7 >= config.slipping_misses_last_7
    {
        ResolutionHealth::Slipping
    } else if misses_last_7 >= config.at_risk_misses_last_7 {
        ResolutionHealth::AtRisk
    } else {
        ResolutionHealth::Healthy
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use pact_core::model::Difficulty;

    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    fn resolution_with_misses(days_back: &[i64]) -> Resolution {
        let mut res = Resolution::new(
            "r1",
            "u1",
            Difficulty::new(3).unwrap(),
            false,
            Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap(),
        );
        for back in days_back {
            res.history
                .insert(day(15) - Duration::days(*back), ResolutionStatus::Missed);
        }
        res
    }

    #[test]
    fn clean_week_is_healthy() {
        let res = resolution_with_misses(&[]);
        assert_eq!(
            classify_health(&res, &HealthConfig::default(), day(15)),
            ResolutionHealth::Healthy
        );
    }

    #[test]
    fn two_misses_in_outer_window_is_at_risk() {
        let res = resolution_with_misses(&[6, 7]);
        assert_eq!(
            classify_health(&res, &HealthConfig::default(), day(15)),
            ResolutionHealth::AtRisk
        );
    }

    #[test]
    fn two_recent_misses_is_slipping() {
        let res = resolution_with_misses(&[1, 2]);
        assert_eq!(
            classify_health(&res, &HealthConfig::default(), day(15)),
            ResolutionHealth::Slipping
        );
    }

    #[test]
    fn three_misses_across_week_is_slipping() {
        let res = resolution_with_misses(&[1, 6, 7]);
        assert_eq!(
            classify_health(&res, &HealthConfig::default(), day(15)),
            ResolutionHealth::Slipping
        );
    }

    #[test]
    fn todays_miss_does_not_count() {
        let mut res = resolution_with_misses(&[1]);
        res.history.insert(day(15), ResolutionStatus::Missed);
        assert_eq!(
            classify_health(&res, &HealthConfig::default(), day(15)),
            ResolutionHealth::Healthy
        );
    }

    #[test]
    fn miss_outside_window_does_not_count() {
        let res = resolution_with_misses(&[8, 9]);
        assert_eq!(
            classify_health(&res, &HealthConfig::default(), day(15)),
            ResolutionHealth::Healthy
        );
    }

    #[test]
    fn archived_is_always_healthy() {
        let mut res = resolution_with_misses(&[1, 2, 3]);
        res.archive(Utc.with_ymd_and_hms(2024, 3, 14, 0, 0, 0).unwrap(), "stopped")
            .unwrap();
        assert_eq!(
            classify_health(&res, &HealthConfig::default(), day(15)),
            ResolutionHealth::Healthy
        );
    }

    #[test]
    fn wire_names_are_kebab_case() {
        assert_eq!(
            serde_json::to_string(&ResolutionHealth::AtRisk).unwrap(),
            "\"at-risk\""
        );
    }
}
