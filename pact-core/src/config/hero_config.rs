use serde::{Deserialize, Serialize};

use super::defaults;

/// Daily hero selection tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroConfig {
    /// Minimum honesty score to be eligible for daily hero.
    pub min_honesty_score: u8,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            min_honesty_score: defaults::DEFAULT_MIN_HERO_HONESTY,
        }
    }
}
