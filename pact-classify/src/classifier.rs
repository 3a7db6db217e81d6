//! The identity label classification.
//!
//! Window: start of the current quarter through today. Rules run in a
//! fixed priority order; when several thresholds hold at once the
//! higher-priority label wins on purpose.
//!
//! | Priority | Rule                                          | Label                  |
//! |----------|-----------------------------------------------|------------------------|
//! | —        | window shorter than 7 days                    | `ConsistentStarter`    |
//! | —        | zero opportunities                            | `SleepingGiant`        |
//! | 1        | consistency ≥ 0.85                            | `RelentlessMaintainer` |
//! | 2        | first half > 0.8 and second half < 0.6        | `ConsistentStarter`    |
//! | 3        | first half < 0.5 and second half > 0.8        | `LateBloomer`          |
//! | 4        | second half > 0.85                            | `StrongFinisher`       |
//! | 5        | consistency > 0.3                             | `OnAndOffGrinder`      |
//! | 6        | otherwise                                     | `SleepingGiant`        |

use chrono::NaiveDate;

use pact_core::calendar;
use pact_core::config::LabelConfig;
use pact_core::model::{IdentityLabel, Resolution};

use crate::window::tally_window;

/// Classify a user's quarter-to-date pattern.
///
/// `resolutions`: the user's non-private, non-archived resolutions.
/// `today`: current calendar day (injectable for testing). Deterministic:
/// identical inputs and `today` always produce the same label.
pub fn classify_label(
    resolutions: &[Resolution],
    config: &LabelConfig,
    today: NaiveDate,
) -> IdentityLabel {
    let days = calendar::date_range(calendar::start_of_quarter(today), today);
    if days.len() < config.min_window_days {
        return IdentityLabel::ConsistentStarter;
    }

    let tally = tally_window(resolutions, &days);
    if tally.overall.opportunities == 0 {
        return IdentityLabel::SleepingGiant;
    }

    let consistency = tally.overall.rate();
    let first_half = tally.first_half.rate();
    let second_half = tally.second_half.rate();

    if consistency >= config.maintainer_consistency {
        IdentityLabel::RelentlessMaintainer
    } else if first_half > config.starter_first_half && second_half < config.starter_second_half {
        IdentityLabel::ConsistentStarter
    } else if first_half < config.bloomer_first_half && second_half > config.bloomer_second_half {
        IdentityLabel::LateBloomer
    } else if second_half > config.finisher_second_half {
        IdentityLabel::StrongFinisher
    } else if consistency > config.grinder_consistency {
        IdentityLabel::OnAndOffGrinder
    } else {
        IdentityLabel::SleepingGiant
    }
}
