//! Leaderboard ordering.
//!
//! Descending by the period's score, ties broken descending by streak,
//! remaining ties by stable input order. Ranks are dense and sequential
//! (1..N): tied users still get distinct consecutive ranks, never a
//! shared rank.

use serde::{Deserialize, Serialize};

use pact_core::model::{RankChange, User};

/// Which score column the leaderboard orders by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Period {
    AllTime,
    Monthly,
}

impl Period {
    fn score_of(self, user: &User) -> f64 {
        match self {
            Self::AllTime => user.score,
            Self::Monthly => user.monthly_score,
        }
    }
}

/// Order a group's users and assign dense 1-based ranks.
///
/// All-time ranking also derives `rank_change` against the previously
/// persisted rank (first-ever ranking reads as `Same`) and writes the
/// new rank onto the returned users — the caller persists them. Monthly
/// ranking fills `rank` on the returned copies for display only; the
/// caller must not persist it.
pub fn rank_users(mut users: Vec<User>, period: Period) -> Vec<User> {
    users.sort_by(|a, b| {
        period
            .score_of(b)
            .total_cmp(&period.score_of(a))
            .then_with(|| b.streak.cmp(&a.streak))
    });

    for (idx, user) in users.iter_mut().enumerate() {
        let new_rank = idx as u32 + 1;
        if period == Period::AllTime {
            user.rank_change = match user.rank {
                0 => RankChange::Same,
                prev if new_rank < prev => RankChange::Up,
                prev if new_rank > prev => RankChange::Down,
                _ => RankChange::Same,
            };
        }
        user.rank = new_rank;
    }
    users
}
