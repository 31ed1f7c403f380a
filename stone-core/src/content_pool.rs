use rand::Rng;

use stone_types::{DailyPayload, Game, TriviaQuestion};

/// Candidate pools for daily content. Words are upper-case because the game
/// clients compare guesses against them case-sensitively.
const HANGMAN_WORDS: [&str; 5] = ["CRYPTO", "SUISTONE", "GROK", "MINES", "LEDGER"];
const WORDLE_WORDS: [&str; 5] = ["STONE", "CRYPT", "RELIC", "GROVE", "CHASM"];

/// Fallback words served when the store is down. Every player gets the same
/// word in that mode and no "already played" state can be tracked.
const WORDLE_FALLBACK: &str = "STONE";
const HANGMAN_FALLBACK: &str = "GROK";

/// All candidates for a game's daily content.
pub fn candidates(game: Game) -> Vec<DailyPayload> {
    match game {
        Game::Wordle => WORDLE_WORDS
            .iter()
            .map(|w| DailyPayload::Word((*w).to_string()))
            .collect(),
        Game::Hangman => HANGMAN_WORDS
            .iter()
            .map(|w| DailyPayload::Word((*w).to_string()))
            .collect(),
        Game::Trivia => trivia_sets().into_iter().map(DailyPayload::Questions).collect(),
        // Only a session-initialized marker is stored; the real game state is
        // generated per-request (Higher/Lower) or client-side (Minehunter).
        Game::Minehunter | Game::HigherLower => vec![DailyPayload::Marker],
    }
}

/// Uniform draw from the game's candidate pool.
pub fn draw_daily(game: Game) -> DailyPayload {
    let pool = candidates(game);
    let index = rand::rng().random_range(0..pool.len());
    pool[index].clone()
}

/// Degraded-mode payload served without touching the store.
pub fn fallback(game: Game) -> DailyPayload {
    match game {
        Game::Wordle => DailyPayload::Word(WORDLE_FALLBACK.to_string()),
        Game::Hangman => DailyPayload::Word(HANGMAN_FALLBACK.to_string()),
        Game::Trivia => DailyPayload::Questions(
            trivia_sets().into_iter().next().unwrap_or_default(),
        ),
        Game::Minehunter | Game::HigherLower => DailyPayload::Marker,
    }
}

fn q(question: &str, options: [&str; 4], answer: usize) -> TriviaQuestion {
    TriviaQuestion {
        question: question.to_string(),
        options: options.iter().map(|o| (*o).to_string()).collect(),
        correct_answer: options[answer].to_string(),
    }
}

/// Fixed question sets; the client expects exactly 10 questions per day.
fn trivia_sets() -> Vec<Vec<TriviaQuestion>> {
    vec![
        vec![
            q(
                "What is the native token of the Sui network?",
                ["SUI", "SOL", "ETH", "APT"],
                0,
            ),
            q(
                "What does a blockchain ledger record?",
                ["Transactions", "Passwords", "Emails", "Photos"],
                0,
            ),
            q(
                "How many letters does a Wordle answer have?",
                ["4", "5", "6", "7"],
                1,
            ),
            q(
                "What does NFT stand for?",
                [
                    "New Financial Token",
                    "Non-Fungible Token",
                    "Network File Transfer",
                    "Node Fee Tally",
                ],
                1,
            ),
            q(
                "Which of these is a consensus mechanism?",
                ["Proof of Stake", "Proof of Sale", "Proof of Size", "Proof of Speed"],
                0,
            ),
            q(
                "A crypto wallet address is derived from what?",
                ["A public key", "A username", "An email", "A phone number"],
                0,
            ),
            q(
                "What language are Sui smart contracts written in?",
                ["Move", "Solidity", "Rust", "Go"],
                0,
            ),
            q(
                "Roughly how many Bitcoin will ever exist?",
                ["21 million", "100 million", "1 billion", "Unlimited"],
                0,
            ),
            q(
                "What is 'gas' on a blockchain?",
                ["A transaction fee", "A token airdrop", "A mining rig", "A stablecoin"],
                0,
            ),
            q(
                "Flagging every cell next to a mine wins which game?",
                ["Minehunter", "Hangman", "Trivia", "Wordle"],
                0,
            ),
        ],
        vec![
            q(
                "What does 'HODL' mean in crypto slang?",
                ["Hold", "Sell fast", "Trade daily", "Borrow"],
                0,
            ),
            q(
                "Which structure links blocks in a blockchain?",
                ["Hashes", "Cookies", "Indexes", "Threads"],
                0,
            ),
            q(
                "What is a seed phrase used for?",
                [
                    "Recovering a wallet",
                    "Naming a token",
                    "Mining blocks",
                    "Voting on-chain",
                ],
                0,
            ),
            q(
                "A 'stablecoin' is pegged to what?",
                ["A fiat currency", "Gold hashes", "Block height", "Network speed"],
                0,
            ),
            q(
                "In Hangman, what costs you a life?",
                ["A wrong letter", "A vowel", "A repeated word", "A timeout"],
                0,
            ),
            q(
                "What kind of object model is Sui known for?",
                [
                    "Object-centric",
                    "Account-centric",
                    "File-centric",
                    "Table-centric",
                ],
                0,
            ),
            q(
                "What is a DEX?",
                [
                    "A decentralized exchange",
                    "A data export tool",
                    "A desktop extension",
                    "A derivatives index",
                ],
                0,
            ),
            q(
                "Which of these is NOT a blockchain?",
                ["Sui", "Ethereum", "Solana", "SQLite"],
                3,
            ),
            q(
                "What does a validator do?",
                [
                    "Confirms transactions",
                    "Prints tokens",
                    "Hosts wallets",
                    "Sets gas prices",
                ],
                0,
            ),
            q(
                "Guessing whether the next number is bigger or smaller is which game?",
                ["Higher/Lower", "Wordle", "Minehunter", "Hangman"],
                0,
            ),
        ],
    ]
}
