use std::fmt;

use serde::{Deserialize, Serialize};

/// Quarter-to-date behavioral classification of a user, drawn from a
/// fixed six-value taxonomy. Wire names match the display strings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum IdentityLabel {
    #[serde(rename = "Relentless Maintainer")]
    RelentlessMaintainer,
    /// Also the default for users with less than a week of quarter data.
    #[default]
    #[serde(rename = "Consistent Starter")]
    ConsistentStarter,
    #[serde(rename = "Late Bloomer")]
    LateBloomer,
    #[serde(rename = "Strong Finisher")]
    StrongFinisher,
    #[serde(rename = "On-and-Off Grinder")]
    OnAndOffGrinder,
    #[serde(rename = "Sleeping Giant")]
    SleepingGiant,
}

impl IdentityLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::RelentlessMaintainer => "Relentless Maintainer",
            Self::ConsistentStarter => "Consistent Starter",
            Self::LateBloomer => "Late Bloomer",
            Self::StrongFinisher => "Strong Finisher",
            Self::OnAndOffGrinder => "On-and-Off Grinder",
            Self::SleepingGiant => "Sleeping Giant",
        }
    }
}

impl fmt::Display for IdentityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
