use anyhow::Result;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use crate::entities::{daily_content, prelude::*};
use stone_core::content_pool;
use stone_types::{DailyPayload, Game};

pub struct ContentRepository {
    db: DatabaseConnection,
}

impl ContentRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_for_day(&self, day: &str, game: Game) -> Result<Option<DailyPayload>> {
        let row = DailyContent::find()
            .filter(daily_content::Column::Date.eq(day))
            .filter(daily_content::Column::Game.eq(game.as_str()))
            .one(&self.db)
            .await?;

        row.map(|model| serde_json::from_str(&model.content))
            .transpose()
            .map_err(Into::into)
    }

    /// Lazily backfill the day's content for every game. Idempotent: existing
    /// rows are left alone, and the unique (date, game) index absorbs the
    /// race when two first-requests-of-the-day generate concurrently.
    pub async fn ensure_daily_content(&self, day: &str) -> Result<()> {
        for game in Game::ALL {
            if self.find_for_day(day, game).await?.is_some() {
                continue;
            }

            let payload = content_pool::draw_daily(game);
            let row = daily_content::ActiveModel {
                id: ActiveValue::NotSet,
                date: ActiveValue::Set(day.to_string()),
                game: ActiveValue::Set(game.as_str().to_string()),
                difficulty: ActiveValue::Set(None),
                content: ActiveValue::Set(serde_json::to_string(&payload)?),
            };

            let inserted = DailyContent::insert(row)
                .on_conflict(
                    OnConflict::columns([
                        daily_content::Column::Date,
                        daily_content::Column::Game,
                    ])
                    .do_nothing()
                    .to_owned(),
                )
                .exec_without_returning(&self.db)
                .await?;

            if inserted > 0 {
                tracing::info!("Generated daily content for {} on {}", game, day);
            }
        }

        Ok(())
    }
}
