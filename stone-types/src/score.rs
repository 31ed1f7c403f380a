use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One row of the per-game top-10: all-time cumulative points and the
/// player's fastest single run. Not tied to any calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LeaderboardRow {
    pub username: String,
    pub points: i64,
    pub time: i32,
}
