use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Daily puzzle payload. The original store held an untyped blob that was a
/// word for some games and a question list for others; here each game's
/// handler consumes a concretely-typed variant instead.
///
/// `Marker` carries no data: for Higher/Lower and Minehunter the stored row
/// only records that the day's session has been initialized, the actual game
/// state lives client-side (or per-request for Higher/Lower rounds).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum DailyPayload {
    Word(String),
    Questions(Vec<TriviaQuestion>),
    Marker,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TriviaQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: String,
}
