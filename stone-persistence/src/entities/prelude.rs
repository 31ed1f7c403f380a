pub use super::daily_content::Entity as DailyContent;
pub use super::players::Entity as Players;
pub use super::scores::Entity as Scores;
