//! Peer difficulty voting.

use chrono::{DateTime, Utc};
use tracing::info;

use pact_core::config::EngineConfig;
use pact_core::model::{Resolution, User};
use pact_core::{PactError, PactResult};

use pact_scoring::{cast_vote, recompute_user};

/// Cast (or overwrite) `voter_id`'s difficulty vote on one of `owner`'s
/// resolutions, then fully recompute the owner's aggregates — a vote
/// moves the weight of every past completion.
///
/// `resolutions`: all of the owner's resolutions.
/// `now`: current timestamp (injectable for testing).
pub fn cast_difficulty_vote(
    resolution_id: &str,
    resolutions: &mut [Resolution],
    owner: &mut User,
    voter_id: &str,
    vote: pact_core::model::Difficulty,
    config: &EngineConfig,
    now: DateTime<Utc>,
) -> PactResult<f64> {
    let resolution = resolutions
        .iter_mut()
        .find(|r| r.id == resolution_id)
        .ok_or_else(|| PactError::ResolutionNotFound(resolution_id.to_string()))?;

    let effective = cast_vote(resolution, voter_id, vote)?;
    info!(
        resolution_id = %resolution_id,
        voter_id = %voter_id,
        vote = vote.value(),
        effective,
        "difficulty vote recorded"
    );

    recompute_user(owner, resolutions, &config.labels, now.date_naive());
    Ok(effective)
}
