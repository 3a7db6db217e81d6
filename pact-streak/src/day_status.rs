//! A user's overall check-in state for today.
//!
//! Reads the history maps directly rather than the `today_status`
//! caches, so a stale cache can never flip the rollup.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use pact_core::model::{Resolution, ResolutionStatus};

/// Rollup of today's statuses across a user's public, active resolutions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayStatus {
    /// Every public active resolution is completed today.
    Checked,
    /// At least one public active resolution was missed today.
    Missed,
    /// Nothing to report yet (no resolutions, or some still unchecked).
    Pending,
}

/// Rollup for one user. `resolutions`: that user's resolutions; private
/// and archived ones are ignored.
pub fn user_day_status(resolutions: &[Resolution], today: NaiveDate) -> DayStatus {
    let active: Vec<&Resolution> = resolutions.iter().filter(|r| r.scoreable()).collect();
    if active.is_empty() {
        return DayStatus::Pending;
    }

    let status_of = |r: &Resolution| {
        r.history
            .get(&today)
            .copied()
            .unwrap_or(ResolutionStatus::Unchecked)
    };

    if active.iter().any(|r| status_of(r) == ResolutionStatus::Missed) {
        return DayStatus::Missed;
    }
    if active
        .iter()
        .all(|r| status_of(r) == ResolutionStatus::Completed)
    {
        return DayStatus::Checked;
    }
    DayStatus::Pending
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use pact_core::model::Difficulty;

    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    fn resolution(id: &str, status: Option<ResolutionStatus>) -> Resolution {
        let mut res = Resolution::new(
            id,
            "u1",
            Difficulty::new(2).unwrap(),
            false,
            Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap(),
        );
        if let Some(status) = status {
            res.record_check_in(today(), status);
        }
        res
    }

    #[test]
    fn no_resolutions_is_pending() {
        assert_eq!(user_day_status(&[], today()), DayStatus::Pending);
    }

    #[test]
    fn all_completed_is_checked() {
        let list = vec![
            resolution("a", Some(ResolutionStatus::Completed)),
            resolution("b", Some(ResolutionStatus::Completed)),
        ];
        assert_eq!(user_day_status(&list, today()), DayStatus::Checked);
    }

    #[test]
    fn any_miss_wins_over_completions() {
        let list = vec![
            resolution("a", Some(ResolutionStatus::Completed)),
            resolution("b", Some(ResolutionStatus::Missed)),
        ];
        assert_eq!(user_day_status(&list, today()), DayStatus::Missed);
    }

    #[test]
    fn unchecked_resolution_keeps_it_pending() {
        let list = vec![
            resolution("a", Some(ResolutionStatus::Completed)),
            resolution("b", None),
        ];
        assert_eq!(user_day_status(&list, today()), DayStatus::Pending);
    }

    #[test]
    fn private_resolutions_are_ignored() {
        let mut private = resolution("p", Some(ResolutionStatus::Missed));
        private.is_private = true;
        let list = vec![resolution("a", Some(ResolutionStatus::Completed)), private];
        assert_eq!(user_day_status(&list, today()), DayStatus::Checked);
    }
}
