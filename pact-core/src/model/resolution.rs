use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::ArchiveError;

use super::{Difficulty, ResolutionStatus};

/// Sparse per-day check-in record, keyed by calendar day.
///
/// Keys are only ever added or overwritten, never removed; the map is
/// bounded by days since the resolution's creation.
pub type History = BTreeMap<NaiveDate, ResolutionStatus>;

/// Days after creation during which a resolution cannot be archived.
pub const LOCK_IN_DAYS: i64 = 7;

/// One tracked habit belonging to one user.
///
/// `effective_difficulty` and `current_streak` are materialized caches:
/// both are always derivable from `declared_difficulty` +
/// `peer_difficulty_votes` and from `history` respectively, and are
/// recomputed (never patched) on every mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resolution {
    pub id: String,
    pub owner_id: String,
    pub created_at: DateTime<Utc>,
    /// Set at creation, immutable afterwards.
    pub declared_difficulty: Difficulty,
    /// Blend of declared difficulty and peer votes; equals the declared
    /// value while no votes exist.
    pub effective_difficulty: f64,
    /// Private resolutions are excluded from scoring, leaderboards, peer
    /// voting, and group visibility, but still track streak and history.
    pub is_private: bool,
    pub history: History,
    /// Cache of the streak calculator's output for this resolution.
    pub current_streak: u32,
    /// Cached copy of `history[today]`, refreshed opportunistically on read.
    pub today_status: ResolutionStatus,
    /// Voter user id -> vote. Never contains the owner.
    pub peer_difficulty_votes: BTreeMap<String, Difficulty>,
    /// Once set, the resolution is permanently out of active views and
    /// scoring. History is retained.
    pub archived_at: Option<DateTime<Utc>>,
    pub archived_reason: Option<String>,
}

impl Resolution {
    pub fn new(
        id: impl Into<String>,
        owner_id: impl Into<String>,
        declared_difficulty: Difficulty,
        is_private: bool,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            owner_id: owner_id.into(),
            created_at,
            declared_difficulty,
            effective_difficulty: declared_difficulty.as_f64(),
            is_private,
            history: History::new(),
            current_streak: 0,
            today_status: ResolutionStatus::Unchecked,
            peer_difficulty_votes: BTreeMap::new(),
            archived_at: None,
            archived_reason: None,
        }
    }

    pub fn is_archived(&self) -> bool {
        self.archived_at.is_some()
    }

    /// Whether this resolution participates in scoring, leaderboards,
    /// and group views.
    pub fn scoreable(&self) -> bool {
        !self.is_private && !self.is_archived()
    }

    /// Calendar day of creation under the engine's uniform day boundary.
    pub fn created_on(&self) -> NaiveDate {
        self.created_at.date_naive()
    }

    /// Whole days since creation (floor).
    pub fn days_since_creation(&self, now: DateTime<Utc>) -> i64 {
        (now - self.created_at).num_days()
    }

    /// True while the post-creation lock-in window is still running.
    pub fn is_locked(&self, now: DateTime<Utc>) -> bool {
        self.days_since_creation(now) < LOCK_IN_DAYS
    }

    /// Archive this resolution. Rejected during the lock-in window and
    /// when already archived; history is retained either way.
    pub fn archive(
        &mut self,
        now: DateTime<Utc>,
        reason: impl Into<String>,
    ) -> Result<(), ArchiveError> {
        if self.is_archived() {
            return Err(ArchiveError::AlreadyArchived {
                resolution_id: self.id.clone(),
            });
        }
        if self.is_locked(now) {
            return Err(ArchiveError::LockInActive {
                days_remaining: LOCK_IN_DAYS - self.days_since_creation(now),
            });
        }
        self.archived_at = Some(now);
        self.archived_reason = Some(reason.into());
        Ok(())
    }

    /// Write today's status into the history and the `today_status` cache.
    /// Streak recomputation is the streak calculator's job, not this one's.
    pub fn record_check_in(&mut self, today: NaiveDate, status: ResolutionStatus) {
        self.history.insert(today, status);
        self.today_status = status;
    }

    /// Refresh the `today_status` cache from the history. An absent entry
    /// resets the cache to `Unchecked` so a stale prior-day value never
    /// leaks into a new day.
    pub fn sync_today_status(&mut self, today: NaiveDate) {
        self.today_status = self
            .history
            .get(&today)
            .copied()
            .unwrap_or(ResolutionStatus::Unchecked);
    }

    /// Count of `Completed` entries over the full history.
    pub fn completions(&self) -> usize {
        self.history
            .values()
            .filter(|s| s.is_completed())
            .count()
    }

    /// Count of `Completed` entries on or after `cutoff`.
    pub fn completions_since(&self, cutoff: NaiveDate) -> usize {
        self.history
            .range(cutoff..)
            .filter(|(_, s)| s.is_completed())
            .count()
    }
}
