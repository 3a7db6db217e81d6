//! Calendar-day utilities.
//!
//! All date math in the engine runs on `chrono::NaiveDate` under one
//! uniform day-boundary convention: a timestamp's calendar day is
//! `DateTime<Utc>::date_naive()`, and callers inject `today` explicitly.
//! Mixing UTC-day and local-day boundaries within one computation is what
//! these helpers exist to prevent.

use chrono::{Datelike, Duration, NaiveDate};

/// Every calendar day from `start` to `end`, inclusive, ascending.
/// Empty when `start > end`.
pub fn date_range(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut days = Vec::new();
    let mut current = start;
    while current <= end {
        days.push(current);
        current = match current.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }
    days
}

/// Whole days elapsed from `date` to `today` (floor). Negative when
/// `date` is in the future.
pub fn days_since(date: NaiveDate, today: NaiveDate) -> i64 {
    (today - date).num_days()
}

/// The calendar day before `today`. Saturates at the minimum
/// representable date.
pub fn yesterday(today: NaiveDate) -> NaiveDate {
    today.pred_opt().unwrap_or(NaiveDate::MIN)
}

/// Monday of the ISO week containing `today`. Sunday counts as day 7 of
/// the prior week.
pub fn start_of_week(today: NaiveDate) -> NaiveDate {
    let days_from_monday = today.weekday().num_days_from_monday() as i64;
    today - Duration::days(days_from_monday)
}

/// First day of the month containing `today`.
pub fn start_of_month(today: NaiveDate) -> NaiveDate {
    today.with_day(1).unwrap_or(today)
}

/// First day of the quarter containing `today`. Quarters are fixed at
/// Jan/Apr/Jul/Oct.
pub fn start_of_quarter(today: NaiveDate) -> NaiveDate {
    let quarter_month = (today.month0() / 3) * 3 + 1;
    NaiveDate::from_ymd_opt(today.year(), quarter_month, 1).unwrap_or(today)
}

/// January 1 of the year containing `today`.
pub fn start_of_year(today: NaiveDate) -> NaiveDate {
    today.with_ordinal(1).unwrap_or(today)
}
