//! Persistence for the game<->tester join rows (generic over ConnectionTrait).

use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, ModelTrait, QueryFilter, Set};
use time::OffsetDateTime;

use crate::entities::{game_testers, games, testers};
use crate::errors::domain::DomainError;
use crate::infra::db_errors::map_db_err;

pub async fn find_link<C: ConnectionTrait>(
    conn: &C,
    game_id: i64,
    tester_id: i64,
) -> Result<Option<game_testers::Model>, DomainError> {
    game_testers::Entity::find_by_id((game_id, tester_id))
        .one(conn)
        .await
        .map_err(map_db_err)
}

pub async fn insert_link<C: ConnectionTrait>(
    conn: &C,
    game_id: i64,
    tester_id: i64,
) -> Result<game_testers::Model, DomainError> {
    let link = game_testers::ActiveModel {
        game_id: Set(game_id),
        tester_id: Set(tester_id),
        created_at: Set(OffsetDateTime::now_utc()),
    };
    link.insert(conn).await.map_err(map_db_err)
}

/// Tester ids assigned to a game.
pub async fn tester_ids_for_game<C: ConnectionTrait>(
    conn: &C,
    game_id: i64,
) -> Result<Vec<i64>, DomainError> {
    let rows = game_testers::Entity::find()
        .filter(game_testers::Column::GameId.eq(game_id))
        .all(conn)
        .await
        .map_err(map_db_err)?;
    Ok(rows.into_iter().map(|row| row.tester_id).collect())
}

/// Owning-side view: the testers assigned to a game.
pub async fn testers_for_game<C: ConnectionTrait>(
    conn: &C,
    game: &games::Model,
) -> Result<Vec<testers::Model>, DomainError> {
    game.find_related(testers::Entity)
        .all(conn)
        .await
        .map_err(map_db_err)
}

/// Derived inverse view: the games a tester is assigned to.
pub async fn games_for_tester<C: ConnectionTrait>(
    conn: &C,
    tester: &testers::Model,
) -> Result<Vec<games::Model>, DomainError> {
    tester
        .find_related(games::Entity)
        .all(conn)
        .await
        .map_err(map_db_err)
}
