//! Canonical default thresholds.

// Health classification (misses in the trailing 7 days, today excluded).
pub const DEFAULT_SLIPPING_MISSES_LAST_5: u32 = 2;
pub const DEFAULT_SLIPPING_MISSES_LAST_7: u32 = 3;
pub const DEFAULT_AT_RISK_MISSES_LAST_7: u32 = 2;

// Identity label classification over the quarter-to-date window.
pub const DEFAULT_MIN_LABEL_WINDOW_DAYS: usize = 7;
pub const DEFAULT_MAINTAINER_CONSISTENCY: f64 = 0.85;
pub const DEFAULT_STARTER_FIRST_HALF: f64 = 0.8;
pub const DEFAULT_STARTER_SECOND_HALF: f64 = 0.6;
pub const DEFAULT_BLOOMER_FIRST_HALF: f64 = 0.5;
pub const DEFAULT_BLOOMER_SECOND_HALF: f64 = 0.8;
pub const DEFAULT_FINISHER_SECOND_HALF: f64 = 0.85;
pub const DEFAULT_GRINDER_CONSISTENCY: f64 = 0.3;

// Daily hero selection.
pub const DEFAULT_MIN_HERO_HONESTY: u8 = 80;
/// Honesty assumed for users the trust source does not know yet.
pub const DEFAULT_HONESTY_SCORE: u8 = 100;
