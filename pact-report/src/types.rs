use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Report window selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportKind {
    /// Trailing 7 days, inclusive of today.
    Weekly,
    /// Calendar month to date.
    Monthly,
    /// Calendar year to date.
    Yearly,
}

/// Direction of the user's honesty signal, for report display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrustTrend {
    Up,
    Down,
    Stable,
}

/// One resolution's in-window completion rate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolutionRate {
    pub resolution_id: String,
    pub completed: u32,
    pub opportunities: u32,
    pub rate: f64,
}

/// Assembled periodic report for one user.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodicReport {
    pub kind: ReportKind,
    pub window_start: NaiveDate,
    pub window_end: NaiveDate,
    /// Total completed check-ins inside the window.
    pub days_checked_in: u32,
    /// Window completions × effective difficulty, non-private only.
    pub points_gained: f64,
    /// Net all-time rank movement: +1 / -1 / 0.
    pub rank_change: i32,
    /// Mean of active resolutions' rates, whole percent.
    pub consistency: u32,
    pub best_resolution: Option<String>,
    pub worst_resolution: Option<String>,
    pub trust_trend: TrustTrend,
    /// Mean rate across every member resolution, whole percent.
    pub group_consistency: u32,
    /// Member with the highest persisted score.
    pub group_hero: Option<String>,
}
