//! Opportunity and completion tallies over a date window.
//!
//! For every resolution and every window day on/after that resolution's
//! creation day there is one "opportunity"; it is completed when the
//! history holds `Completed` for that day. The window splits at
//! `floor(len / 2)` into first and second halves for trend detection.

use chrono::NaiveDate;

use pact_core::model::{Resolution, ResolutionStatus};

/// Tally for one slice of the window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HalfTally {
    pub opportunities: u64,
    pub completed: u64,
}

impl HalfTally {
    /// Completion rate; 0 when the slice held no opportunities.
    pub fn rate(&self) -> f64 {
        if self.opportunities == 0 {
            0.0
        } else {
            self.completed as f64 / self.opportunities as f64
        }
    }
}

/// Overall + per-half tallies across all resolutions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WindowTally {
    pub overall: HalfTally,
    pub first_half: HalfTally,
    pub second_half: HalfTally,
}

/// Accumulate tallies for `resolutions` over `days` (ascending calendar
/// days, typically from [`pact_core::calendar::date_range`]).
pub fn tally_window(resolutions: &[Resolution], days: &[NaiveDate]) -> WindowTally {
    let midpoint = days.len() / 2;
    let mut tally = WindowTally::default();

    for resolution in resolutions {
        let created = resolution.created_on();
        for (idx, day) in days.iter().enumerate() {
            if *day < created {
                continue;
            }
            let done = resolution.history.get(day) == Some(&ResolutionStatus::Completed);

            tally.overall.opportunities += 1;
            tally.overall.completed += u64::from(done);

            let half = if idx < midpoint {
                &mut tally.first_half
            } else {
                &mut tally.second_half
            };
            half.opportunities += 1;
            half.completed += u64::from(done);
        }
    }
    tally
}
