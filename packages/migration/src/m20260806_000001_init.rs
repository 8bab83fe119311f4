use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, ForeignKeyAction, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
#[derive(Iden)]
enum Publishers {
    Table,
    Id,
    Name,
    Email,
    Phone,
    Location,
    Rating,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Games {
    Table,
    Id,
    PublisherId,
    Name,
    Genre,
    Platforms,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Testers {
    Table,
    Id,
    Name,
    Email,
    Phone,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum GameTesters {
    Table,
    GameId,
    TesterId,
    CreatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Publishers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Publishers::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Publishers::Name).string().not_null())
                    .col(ColumnDef::new(Publishers::Email).string().not_null())
                    .col(ColumnDef::new(Publishers::Phone).string().not_null())
                    .col(ColumnDef::new(Publishers::Location).string().not_null())
                    .col(ColumnDef::new(Publishers::Rating).double().not_null())
                    .col(
                        ColumnDef::new(Publishers::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Publishers::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Every game is owned by exactly one publisher; deleting the
        // publisher deletes its games.
        manager
            .create_table(
                Table::create()
                    .table(Games::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Games::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Games::PublisherId).big_integer().not_null())
                    .col(ColumnDef::new(Games::Name).string().not_null())
                    .col(ColumnDef::new(Games::Genre).string().not_null())
                    .col(ColumnDef::new(Games::Platforms).string().not_null())
                    .col(
                        ColumnDef::new(Games::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Games::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_games_publisher")
                            .from(Games::Table, Games::PublisherId)
                            .to(Publishers::Table, Publishers::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_games_publisher_id")
                    .table(Games::Table)
                    .col(Games::PublisherId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Testers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Testers::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Testers::Name).string().not_null())
                    .col(ColumnDef::new(Testers::Email).string().not_null())
                    .col(ColumnDef::new(Testers::Phone).string().not_null())
                    .col(
                        ColumnDef::new(Testers::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Testers::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Single source of truth for the game<->tester relation. Both the
        // game side and the tester side derive from these rows.
        manager
            .create_table(
                Table::create()
                    .table(GameTesters::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(GameTesters::GameId).big_integer().not_null())
                    .col(
                        ColumnDef::new(GameTesters::TesterId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(GameTesters::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(GameTesters::GameId)
                            .col(GameTesters::TesterId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_testers_game")
                            .from(GameTesters::Table, GameTesters::GameId)
                            .to(Games::Table, Games::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_testers_tester")
                            .from(GameTesters::Table, GameTesters::TesterId)
                            .to(Testers::Table, Testers::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_game_testers_tester_id")
                    .table(GameTesters::Table)
                    .col(GameTesters::TesterId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GameTesters::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Games::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Testers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Publishers::Table).to_owned())
            .await
    }
}
