use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kinds of events the engine hands to the feed sink. The engine decides
/// whether and what to emit; rendering and delivery are the outer
/// layer's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FeedEventKind {
    CheckIn,
    Streak,
    Hero,
    Comeback,
}

/// One feed entry: a typed event with an actor and a human-readable
/// message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedEvent {
    pub kind: FeedEventKind,
    pub user_id: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl FeedEvent {
    pub fn new(
        kind: FeedEventKind,
        user_id: impl Into<String>,
        message: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            kind,
            user_id: user_id.into(),
            message: message.into(),
            timestamp: now,
        }
    }
}
