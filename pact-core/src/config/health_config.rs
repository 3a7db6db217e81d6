use serde::{Deserialize, Serialize};

use super::defaults;

/// Thresholds for the resolution health classifier.
///
/// The window is always the 7 calendar days strictly before today; these
/// control how many misses inside it trip each tier.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthConfig {
    /// Misses within the last 5 days that mean `Slipping`.
    pub slipping_misses_last_5: u32,
    /// Misses within the full 7-day window that mean `Slipping`.
    pub slipping_misses_last_7: u32,
    /// Misses within the full 7-day window that mean `AtRisk`.
    pub at_risk_misses_last_7: u32,
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            slipping_misses_last_5: defaults::DEFAULT_SLIPPING_MISSES_LAST_5,
            slipping_misses_last_7: defaults::DEFAULT_SLIPPING_MISSES_LAST_7,
            at_risk_misses_last_7: defaults::DEFAULT_AT_RISK_MISSES_LAST_7,
        }
    }
}
