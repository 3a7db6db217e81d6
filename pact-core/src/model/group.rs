use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A small accountability group.
///
/// The hero fields are once-per-period caches: `last_hero_selection_date`
/// invalidates daily, `last_comeback_selection_date` once per ISO week
/// (Monday start). The selectors treat a matching stored date as "already
/// selected this period" and do nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: String,
    pub member_ids: Vec<String>,
    pub daily_hero_id: Option<String>,
    pub last_hero_selection_date: Option<NaiveDate>,
    pub weekly_comeback_hero_id: Option<String>,
    /// Monday of the week in which the last comeback hero was crowned.
    pub last_comeback_selection_date: Option<NaiveDate>,
}

impl Group {
    pub fn new(id: impl Into<String>, member_ids: Vec<String>) -> Self {
        Self {
            id: id.into(),
            member_ids,
            daily_hero_id: None,
            last_hero_selection_date: None,
            weekly_comeback_hero_id: None,
            last_comeback_selection_date: None,
        }
    }
}
