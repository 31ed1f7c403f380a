use rand::Rng;

use stone_types::{GuessDirection, NextRoundResponse};

/// Higher/Lower draws are one-based and inclusive.
pub const ROUND_MIN: i64 = 1;
pub const ROUND_MAX: i64 = 15;

/// A drawn number equal to the current one is incorrect for both guesses:
/// ties never reward the player.
pub fn resolve_round(current: i64, guess: GuessDirection, drawn: i64) -> bool {
    match guess {
        GuessDirection::Higher => drawn > current,
        GuessDirection::Lower => drawn < current,
    }
}

/// Draw the next number and resolve the guess against it. Nothing is
/// persisted; the client tracks its running score and submits a single
/// cumulative score at the end of the run.
pub fn next_round(current: i64, guess: GuessDirection) -> NextRoundResponse {
    let drawn = rand::rng().random_range(ROUND_MIN..=ROUND_MAX);
    NextRoundResponse {
        next_number: drawn,
        correct: resolve_round(current, guess, drawn),
    }
}
