//! Engine configuration.
//!
//! Every threshold defaults to the engine's canonical value in
//! [`defaults`]; a TOML override file can adjust them per deployment.
//! Structural rules (the 7-day lock-in, the streak-milestone cadence,
//! the comeback pattern) are constants in their own modules, not config.

pub mod defaults;

mod engine_config;
mod health_config;
mod hero_config;
mod label_config;

pub use engine_config::EngineConfig;
pub use health_config::HealthConfig;
pub use hero_config::HeroConfig;
pub use label_config::LabelConfig;
