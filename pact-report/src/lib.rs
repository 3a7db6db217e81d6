//! # pact-report
//!
//! Windowed consistency reporting: per-resolution completion rates over
//! a weekly, monthly, or yearly window, rolled up into a periodic report
//! with best/worst resolutions and a group comparison.
//!
//! ## Modules
//!
//! - `types` — report kinds and the assembled `PeriodicReport`
//! - `periodic` — window resolution and report generation

pub mod periodic;
pub mod types;

pub use periodic::generate_report;
pub use types::{PeriodicReport, ReportKind, ResolutionRate, TrustTrend};
