//! Game schedule model definitions.
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: String,
    pub date: NaiveDate,
    /// Throw-off time as entered in the schedule form ("19:30"). Empty for
    /// entries that predate the field.
    #[serde(default)]
    pub time: String,
    pub league: String,
    pub home_team: String,
    pub away_team: String,
    pub venue: String,
}
