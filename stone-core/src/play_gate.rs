use chrono::{DateTime, Utc};

use stone_types::Game;

use crate::day::day_of;

/// Decide whether a score history already contains a completed session of
/// `game` on `day`. A linear scan over the whole history; history length is
/// unbounded but small at this scale (a handful of games per player per day).
///
/// Note the timestamps are score *submission* times, not the calendar day the
/// puzzle was issued for. A player who starts before midnight and submits
/// after is gated against the submission day.
pub fn played_on(day: &str, game: Game, history: &[(Game, DateTime<Utc>)]) -> bool {
    history
        .iter()
        .any(|(played, at)| *played == game && day_of(at) == day)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 30, 0).unwrap()
    }

    #[test]
    fn test_empty_history_never_played() {
        assert!(!played_on("2025-02-23", Game::Wordle, &[]));
    }

    #[test]
    fn test_same_day_same_game_gates() {
        let history = [(Game::Wordle, at(2025, 2, 23, 9))];
        assert!(played_on("2025-02-23", Game::Wordle, &history));
    }

    #[test]
    fn test_other_game_does_not_gate() {
        let history = [(Game::Hangman, at(2025, 2, 23, 9))];
        assert!(!played_on("2025-02-23", Game::Wordle, &history));
    }

    #[test]
    fn test_other_day_does_not_gate() {
        let history = [(Game::Wordle, at(2025, 2, 22, 23))];
        assert!(!played_on("2025-02-23", Game::Wordle, &history));
    }

    #[test]
    fn test_gate_ignores_score_value() {
        // Gating depends only on game and day; a zero-point run still counts.
        let history = [
            (Game::Trivia, at(2025, 2, 23, 0)),
            (Game::Wordle, at(2025, 2, 23, 23)),
        ];
        assert!(played_on("2025-02-23", Game::Wordle, &history));
        assert!(played_on("2025-02-23", Game::Trivia, &history));
        assert!(!played_on("2025-02-23", Game::Minehunter, &history));
    }
}
