use serde::{Deserialize, Serialize};

/// Day-level outcome of a check-in for one resolution.
///
/// A day that is absent from a resolution's history was never recorded,
/// which is not the same thing as an explicit `Missed`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResolutionStatus {
    #[default]
    Unchecked,
    Completed,
    Missed,
}

impl ResolutionStatus {
    pub fn is_completed(self) -> bool {
        self == Self::Completed
    }
}
