use sea_orm::entity::prelude::*;

/// One issued puzzle per (date, game), enforced by a unique index. Rows are
/// created lazily on first request, never updated, never deleted.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "daily_content")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Calendar day, `YYYY-MM-DD` (UTC).
    pub date: String,
    pub game: String,
    /// Reserved for per-day difficulty tiers; the generator never sets it.
    pub difficulty: Option<String>,
    /// JSON-encoded `DailyPayload`.
    #[sea_orm(column_type = "Text")]
    pub content: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
