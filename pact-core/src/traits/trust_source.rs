use std::collections::BTreeMap;

/// Read-only honesty signal maintained outside the engine.
///
/// The engine never computes or mutates honesty; it only reads it to
/// gate daily hero eligibility.
pub trait TrustSource {
    /// Honesty score 0–100 for a user, or `None` if the source does not
    /// know them yet.
    fn honesty_score(&self, user_id: &str) -> Option<u8>;
}

/// Fixed score map for tests and single-run usage.
#[derive(Debug, Default, Clone)]
pub struct StaticTrust {
    scores: BTreeMap<String, u8>,
}

impl StaticTrust {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_score(mut self, user_id: impl Into<String>, score: u8) -> Self {
        self.scores.insert(user_id.into(), score);
        self
    }
}

impl TrustSource for StaticTrust {
    fn honesty_score(&self, user_id: &str) -> Option<u8> {
        self.scores.get(user_id).copied()
    }
}
