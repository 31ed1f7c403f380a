use anyhow::Result;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult,
    JoinType, Order, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};
use uuid::Uuid;

use crate::entities::{players, prelude::*, scores};
use stone_core::play_gate;
use stone_types::{Game, LeaderboardRow};

pub struct PlayerRepository {
    db: DatabaseConnection,
}

#[derive(Debug, FromQueryResult)]
struct LeaderboardSelect {
    username: String,
    points: i64,
    time: i32,
}

impl PlayerRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<players::Model>> {
        let player = Players::find()
            .filter(players::Column::Username.eq(username))
            .one(&self.db)
            .await?;

        Ok(player)
    }

    async fn find_or_create(&self, username: &str) -> Result<players::Model> {
        if let Some(player) = self.find_by_username(username).await? {
            return Ok(player);
        }

        let player = players::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            username: ActiveValue::Set(username.to_string()),
            created_at: ActiveValue::Set(Utc::now().into()),
        };

        let created = player.insert(&self.db).await?;
        tracing::info!("Created player {} for {}", created.id, created.username);
        Ok(created)
    }

    /// Append a score record stamped with the current time, creating the
    /// player on first submission. Returns the player's id.
    pub async fn record_score(
        &self,
        username: &str,
        game: Game,
        points: i32,
        time: i32,
    ) -> Result<Uuid> {
        let player = self.find_or_create(username).await?;

        let score = scores::ActiveModel {
            id: ActiveValue::NotSet,
            player_id: ActiveValue::Set(player.id),
            game: ActiveValue::Set(game.as_str().to_string()),
            points: ActiveValue::Set(points),
            time: ActiveValue::Set(time),
            date: ActiveValue::Set(Utc::now().into()),
        };
        Scores::insert(score).exec(&self.db).await?;

        Ok(player.id)
    }

    /// Whether `username` already has a score of `game` submitted on `day`.
    /// Loads the player's whole history and scans it; unknown players have
    /// never played.
    pub async fn has_played_today(&self, username: &str, game: Game, day: &str) -> Result<bool> {
        let player = match self.find_by_username(username).await? {
            Some(player) => player,
            None => return Ok(false),
        };

        let rows = Scores::find()
            .filter(scores::Column::PlayerId.eq(player.id))
            .all(&self.db)
            .await?;

        let history: Vec<_> = rows
            .iter()
            .filter_map(|row| {
                row.game
                    .parse::<Game>()
                    .ok()
                    .map(|g| (g, row.date.with_timezone(&Utc)))
            })
            .collect();

        Ok(play_gate::played_on(day, game, &history))
    }

    /// All-time top players for a game: total points (descending), fastest
    /// single run breaking ties (ascending).
    pub async fn leaderboard(&self, game: Game, limit: u64) -> Result<Vec<LeaderboardRow>> {
        let rows = Scores::find()
            .select_only()
            .column_as(players::Column::Username, "username")
            .column_as(scores::Column::Points.sum(), "points")
            .column_as(scores::Column::Time.min(), "time")
            .join(JoinType::InnerJoin, scores::Relation::Players.def())
            .filter(scores::Column::Game.eq(game.as_str()))
            .group_by(players::Column::Username)
            .order_by(scores::Column::Points.sum(), Order::Desc)
            .order_by(scores::Column::Time.min(), Order::Asc)
            .limit(limit)
            .into_model::<LeaderboardSelect>()
            .all(&self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| LeaderboardRow {
                username: row.username,
                points: row.points,
                time: row.time,
            })
            .collect())
    }
}
