use thiserror::Error;

#[derive(Debug, Clone, Error)]
#[error("Unknown game: {0}")]
pub struct UnknownGame(pub String);
