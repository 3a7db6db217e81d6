//! Per-resolution score breakdown for display.

use serde::Serialize;

use pact_core::model::Resolution;

/// One row of a user's score breakdown, points descending.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreakdownRow {
    pub resolution_id: String,
    /// Lifetime count of completed days.
    pub days_completed: usize,
    /// Effective difficulty, one decimal place.
    pub difficulty: f64,
    /// `round(days_completed × difficulty)`.
    pub points: i64,
}

/// Break a user's score into per-resolution rows (scoreable resolutions
/// only), sorted by points descending.
pub fn score_breakdown(resolutions: &[Resolution], owner_id: &str) -> Vec<BreakdownRow> {
    let mut rows: Vec<BreakdownRow> = resolutions
        .iter()
        .filter(|r| r.owner_id == owner_id && r.scoreable())
        .map(|r| {
            let days_completed = r.completions();
            let difficulty = (r.effective_difficulty * 10.0).round() / 10.0;
            BreakdownRow {
                resolution_id: r.id.clone(),
                days_completed,
                difficulty,
                points: (days_completed as f64 * r.effective_difficulty).round() as i64,
            }
        })
        .collect();
    rows.sort_by(|a, b| b.points.cmp(&a.points));
    rows
}
