use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Players::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Players::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(Players::Username)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Players::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Scores::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Scores::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Scores::PlayerId).uuid().not_null())
                    .col(ColumnDef::new(Scores::Game).string().not_null())
                    .col(ColumnDef::new(Scores::Points).integer().not_null())
                    .col(ColumnDef::new(Scores::Time).integer().not_null())
                    .col(
                        ColumnDef::new(Scores::Date)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_scores_player_id")
                            .from(Scores::Table, Scores::PlayerId)
                            .to(Players::Table, Players::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // Play-gate loads a player's whole history on every daily-content request
        manager
            .create_index(
                Index::create()
                    .name("idx_scores_player_id")
                    .table(Scores::Table)
                    .col(Scores::PlayerId)
                    .to_owned(),
            )
            .await?;

        // Leaderboard aggregates filter by game
        manager
            .create_index(
                Index::create()
                    .name("idx_scores_game")
                    .table(Scores::Table)
                    .col(Scores::Game)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(DailyContent::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DailyContent::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(DailyContent::Date).string().not_null())
                    .col(ColumnDef::new(DailyContent::Game).string().not_null())
                    .col(ColumnDef::new(DailyContent::Difficulty).string())
                    .col(ColumnDef::new(DailyContent::Content).text().not_null())
                    .to_owned(),
            )
            .await?;

        // At most one content row per (day, game); concurrent generators race
        // on the insert and the loser's row is silently discarded.
        manager
            .create_index(
                Index::create()
                    .name("idx_daily_content_date_game")
                    .table(DailyContent::Table)
                    .col(DailyContent::Date)
                    .col(DailyContent::Game)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DailyContent::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Scores::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Players::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Players {
    Table,
    Id,
    Username,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Scores {
    Table,
    Id,
    PlayerId,
    Game,
    Points,
    Time,
    Date,
}

#[derive(DeriveIden)]
enum DailyContent {
    Table,
    Id,
    Date,
    Game,
    Difficulty,
    Content,
}
