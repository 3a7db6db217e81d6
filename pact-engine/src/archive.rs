//! Archiving: terminal retirement of a resolution.

use chrono::{DateTime, Utc};
use tracing::info;

use pact_core::config::EngineConfig;
use pact_core::model::{Resolution, User};
use pact_core::{PactError, PactResult};

use pact_scoring::{recompute_user, UserDerived};

/// Archive one of `user`'s resolutions (rejected inside the 7-day
/// lock-in), then fully recompute the user — the archived resolution's
/// points leave the score while its history is retained.
///
/// `resolutions`: all of the user's resolutions.
/// `now`: current timestamp (injectable for testing).
pub fn archive_resolution(
    resolution_id: &str,
    resolutions: &mut [Resolution],
    user: &mut User,
    reason: &str,
    config: &EngineConfig,
    now: DateTime<Utc>,
) -> PactResult<UserDerived> {
    let resolution = resolutions
        .iter_mut()
        .find(|r| r.id == resolution_id)
        .ok_or_else(|| PactError::ResolutionNotFound(resolution_id.to_string()))?;

    resolution.archive(now, reason)?;
    info!(resolution_id = %resolution_id, user_id = %user.id, "resolution archived");

    Ok(recompute_user(user, resolutions, &config.labels, now.date_naive()))
}
