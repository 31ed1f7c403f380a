use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::errors::UnknownGame;

/// The five SuiStone mini-games. The wire tag is the lowercase name,
/// which doubles as the `game` column value in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Game {
    Wordle,
    Hangman,
    Trivia,
    Minehunter,
    HigherLower,
}

impl Game {
    pub const ALL: [Game; 5] = [
        Game::Wordle,
        Game::Hangman,
        Game::Trivia,
        Game::Minehunter,
        Game::HigherLower,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Game::Wordle => "wordle",
            Game::Hangman => "hangman",
            Game::Trivia => "trivia",
            Game::Minehunter => "minehunter",
            Game::HigherLower => "higherlower",
        }
    }

    /// Human-readable name used in player-facing messages.
    pub fn label(&self) -> &'static str {
        match self {
            Game::Wordle => "Wordle",
            Game::Hangman => "Hangman",
            Game::Trivia => "Trivia",
            Game::Minehunter => "Minehunter",
            Game::HigherLower => "Higher/Lower",
        }
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Game {
    type Err = UnknownGame;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "wordle" => Ok(Game::Wordle),
            "hangman" => Ok(Game::Hangman),
            "trivia" => Ok(Game::Trivia),
            "minehunter" => Ok(Game::Minehunter),
            "higherlower" => Ok(Game::HigherLower),
            other => Err(UnknownGame(other.to_string())),
        }
    }
}
