pub mod daily_content;
pub mod players;
pub mod prelude;
pub mod scores;
