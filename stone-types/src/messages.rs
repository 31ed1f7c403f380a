use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Direction guess for a Higher/Lower round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum GuessDirection {
    Higher,
    Lower,
}

/// Body of `POST /api/game/higherlower/next`. All fields optional so the
/// handler can reply 400 with the client's expected message instead of a
/// deserialization rejection.
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct NextRoundRequest {
    pub username: Option<String>,
    pub current_number: Option<i64>,
    pub guess: Option<GuessDirection>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct NextRoundResponse {
    pub next_number: i64,
    pub correct: bool,
}

/// Body of `POST /api/game/score`.
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRequest {
    pub username: Option<String>,
    pub game: Option<String>,
    pub points: Option<i32>,
    pub time: Option<i32>,
}
