use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::{Badge, IdentityLabel};

/// Direction of a user's all-time rank move since the previous ranking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankChange {
    Up,
    Down,
    #[default]
    Same,
}

/// One group member.
///
/// `score`, `monthly_score`, `streak`, `rank`, `rank_change`, and
/// `seasonal_label` are derived fields: they exist only as outputs of the
/// score aggregator and leaderboard ranker and are recomputed from
/// scratch, never incrementally patched, whenever a contributing
/// resolution changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    /// Lifetime score.
    pub score: f64,
    /// Resets with the calendar month.
    pub monthly_score: f64,
    /// Max current streak over the user's scoreable resolutions.
    pub streak: u32,
    /// Dense 1-based all-time rank; 0 means never ranked.
    pub rank: u32,
    pub rank_change: RankChange,
    pub seasonal_label: IdentityLabel,
    pub badges: BTreeSet<Badge>,
}

impl User {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            score: 0.0,
            monthly_score: 0.0,
            streak: 0,
            rank: 0,
            rank_change: RankChange::Same,
            seasonal_label: IdentityLabel::default(),
            badges: BTreeSet::new(),
        }
    }
}
