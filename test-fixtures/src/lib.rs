//! Shared entity builders for engine tests.
//!
//! Dates default to March 2024 so tests read as concrete calendars;
//! every builder takes explicit days where the scenario depends on them.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use pact_core::model::{Difficulty, Group, Resolution, ResolutionStatus, User};

/// Calendar day shorthand. Panics on an invalid date, which in a test is
/// the right failure mode.
pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}

/// Midday UTC instant on the given day.
pub fn instant(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).single().expect("valid test instant")
}

pub fn difficulty(value: u8) -> Difficulty {
    Difficulty::new(value).expect("valid test difficulty")
}

pub fn user(id: &str) -> User {
    User::new(id)
}

pub fn group(id: &str, member_ids: &[&str]) -> Group {
    Group::new(id, member_ids.iter().map(|m| m.to_string()).collect())
}

pub fn resolution(id: &str, owner: &str, declared: u8, created_at: DateTime<Utc>) -> Resolution {
    Resolution::new(id, owner, difficulty(declared), false, created_at)
}

pub fn private_resolution(
    id: &str,
    owner: &str,
    declared: u8,
    created_at: DateTime<Utc>,
) -> Resolution {
    Resolution::new(id, owner, difficulty(declared), true, created_at)
}

/// Mark `days` consecutive days starting at `from` as `Completed`.
pub fn completed_run(resolution: &mut Resolution, from: NaiveDate, days: u32) {
    let mut current = from;
    for _ in 0..days {
        resolution.history.insert(current, ResolutionStatus::Completed);
        current = current.succ_opt().expect("date in range");
    }
}

/// Set a batch of explicit statuses.
pub fn set_statuses(resolution: &mut Resolution, statuses: &[(NaiveDate, ResolutionStatus)]) {
    for (date, status) in statuses {
        resolution.history.insert(*date, *status);
    }
}

/// Opt-in test log output: `RUST_LOG=debug cargo test -- --nocapture`.
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
