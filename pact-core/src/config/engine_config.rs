use serde::{Deserialize, Serialize};

use super::{HealthConfig, HeroConfig, LabelConfig};

/// Aggregate engine configuration. Defaults reproduce the canonical
/// thresholds exactly; deployments may override any subset via TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub health: HealthConfig,
    pub labels: LabelConfig,
    pub hero: HeroConfig,
}

impl EngineConfig {
    /// Parse a TOML override document; missing keys keep their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_canonical_thresholds() {
        let config = EngineConfig::default();
        assert_eq!(config.health.slipping_misses_last_5, 2);
        assert_eq!(config.health.slipping_misses_last_7, 3);
        assert_eq!(config.health.at_risk_misses_last_7, 2);
        assert_eq!(config.labels.min_window_days, 7);
        assert_eq!(config.labels.maintainer_consistency, 0.85);
        assert_eq!(config.hero.min_honesty_score, 80);
    }

    #[test]
    fn partial_toml_override_keeps_other_defaults() {
        let config = EngineConfig::from_toml_str(
            "[hero]\nmin_honesty_score = 90\n",
        )
        .unwrap();
        assert_eq!(config.hero.min_honesty_score, 90);
        assert_eq!(config.health.at_risk_misses_last_7, 2);
        assert_eq!(config.labels.grinder_consistency, 0.3);
    }
}
