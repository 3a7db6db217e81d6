//! Effective difficulty: the blend of a creator's declared difficulty
//! with peer votes.
//!
//! `effective = round10((declared + mean(votes)) / 2)`, one decimal
//! place; with no votes it equals the declared value. Since declared and
//! every vote sit in [1, 5], the blend can never leave [1, 5].

use std::collections::BTreeMap;

use pact_core::errors::VoteError;
use pact_core::model::{Difficulty, Resolution};

/// Recompute the blended difficulty from declared + current votes.
pub fn effective_difficulty(
    declared: Difficulty,
    votes: &BTreeMap<String, Difficulty>,
) -> f64 {
    if votes.is_empty() {
        return declared.as_f64();
    }
    let sum: f64 = votes.values().map(|v| v.as_f64()).sum();
    let average = sum / votes.len() as f64;
    round_to_tenth((declared.as_f64() + average) / 2.0)
}

/// Record one peer vote and refresh the resolution's effective
/// difficulty. A repeat vote by the same voter overwrites the earlier
/// value. Returns the new effective difficulty.
pub fn cast_vote(
    resolution: &mut Resolution,
    voter_id: &str,
    vote: Difficulty,
) -> Result<f64, VoteError> {
    if resolution.owner_id == voter_id {
        return Err(VoteError::OwnerVote);
    }
    if resolution.is_private {
        return Err(VoteError::PrivateResolution);
    }

    resolution
        .peer_difficulty_votes
        .insert(voter_id.to_string(), vote);
    resolution.effective_difficulty = effective_difficulty(
        resolution.declared_difficulty,
        &resolution.peer_difficulty_votes,
    );
    Ok(resolution.effective_difficulty)
}

/// Whole points for one completed check-in: effective difficulty rounded
/// half-up to the nearest integer.
pub fn point_value(effective: f64) -> u32 {
    effective.round().max(0.0) as u32
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
