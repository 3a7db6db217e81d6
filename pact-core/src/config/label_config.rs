use serde::{Deserialize, Serialize};

use super::defaults;

/// Thresholds for the identity label classifier.
///
/// Rules are evaluated in a fixed priority order; these values only move
/// the cut-offs, never the ordering.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelConfig {
    /// Below this many days of quarter data, classification short-circuits
    /// to the default label.
    pub min_window_days: usize,
    /// Overall consistency at or above this is `RelentlessMaintainer`.
    pub maintainer_consistency: f64,
    /// `ConsistentStarter`: first-half rate above this...
    pub starter_first_half: f64,
    /// ...and second-half rate below this.
    pub starter_second_half: f64,
    /// `LateBloomer`: first-half rate below this...
    pub bloomer_first_half: f64,
    /// ...and second-half rate above this.
    pub bloomer_second_half: f64,
    /// Second-half rate above this is `StrongFinisher`.
    pub finisher_second_half: f64,
    /// Overall consistency above this is `OnAndOffGrinder`.
    pub grinder_consistency: f64,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            min_window_days: defaults::DEFAULT_MIN_LABEL_WINDOW_DAYS,
            maintainer_consistency: defaults::DEFAULT_MAINTAINER_CONSISTENCY,
            starter_first_half: defaults::DEFAULT_STARTER_FIRST_HALF,
            starter_second_half: defaults::DEFAULT_STARTER_SECOND_HALF,
            bloomer_first_half: defaults::DEFAULT_BLOOMER_FIRST_HALF,
            bloomer_second_half: defaults::DEFAULT_BLOOMER_SECOND_HALF,
            finisher_second_half: defaults::DEFAULT_FINISHER_SECOND_HALF,
            grinder_consistency: defaults::DEFAULT_GRINDER_CONSISTENCY,
        }
    }
}
