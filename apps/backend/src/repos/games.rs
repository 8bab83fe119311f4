//! Game persistence functions (generic over ConnectionTrait).

use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use time::OffsetDateTime;

use crate::entities::games;
use crate::errors::domain::DomainError;
use crate::infra::db_errors::map_db_err;

pub async fn insert<C: ConnectionTrait>(
    conn: &C,
    mut game: games::ActiveModel,
) -> Result<games::Model, DomainError> {
    let now = OffsetDateTime::now_utc();
    game.created_at = Set(now);
    game.updated_at = Set(now);
    game.insert(conn).await.map_err(map_db_err)
}

pub async fn update<C: ConnectionTrait>(
    conn: &C,
    mut game: games::ActiveModel,
) -> Result<games::Model, DomainError> {
    game.updated_at = Set(OffsetDateTime::now_utc());
    game.update(conn).await.map_err(map_db_err)
}

pub async fn find_by_id<C: ConnectionTrait>(
    conn: &C,
    game_id: i64,
) -> Result<Option<games::Model>, DomainError> {
    games::Entity::find_by_id(game_id)
        .one(conn)
        .await
        .map_err(map_db_err)
}

/// All games owned by a publisher.
pub async fn find_by_publisher<C: ConnectionTrait>(
    conn: &C,
    publisher_id: i64,
) -> Result<Vec<games::Model>, DomainError> {
    games::Entity::find()
        .filter(games::Column::PublisherId.eq(publisher_id))
        .order_by_asc(games::Column::Id)
        .all(conn)
        .await
        .map_err(map_db_err)
}
