use std::fmt;

use serde::{Deserialize, Serialize};

/// Permanent achievement marks. Awarding is idempotent: badges live in a
/// set on the user and are never removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Badge {
    #[serde(rename = "7-Day Streak")]
    SevenDayStreak,
    #[serde(rename = "30-Day Streak")]
    ThirtyDayStreak,
    /// Held a resolution past its 7-day lock-in window without archiving.
    #[serde(rename = "Locked In")]
    LockedIn,
    /// Awarded by the weekly comeback selection.
    #[serde(rename = "Comeback Kid")]
    ComebackKid,
}

impl Badge {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SevenDayStreak => "7-Day Streak",
            Self::ThirtyDayStreak => "30-Day Streak",
            Self::LockedIn => "Locked In",
            Self::ComebackKid => "Comeback Kid",
        }
    }
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
