//! Publisher persistence functions (generic over ConnectionTrait).

use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, ModelTrait, QueryOrder, Set};
use time::OffsetDateTime;

use crate::entities::publishers;
use crate::errors::domain::DomainError;
use crate::infra::db_errors::map_db_err;

pub async fn insert<C: ConnectionTrait>(
    conn: &C,
    mut publisher: publishers::ActiveModel,
) -> Result<publishers::Model, DomainError> {
    let now = OffsetDateTime::now_utc();
    publisher.created_at = Set(now);
    publisher.updated_at = Set(now);
    publisher.insert(conn).await.map_err(map_db_err)
}

pub async fn update<C: ConnectionTrait>(
    conn: &C,
    mut publisher: publishers::ActiveModel,
) -> Result<publishers::Model, DomainError> {
    publisher.updated_at = Set(OffsetDateTime::now_utc());
    publisher.update(conn).await.map_err(map_db_err)
}

pub async fn find_by_id<C: ConnectionTrait>(
    conn: &C,
    publisher_id: i64,
) -> Result<Option<publishers::Model>, DomainError> {
    publishers::Entity::find_by_id(publisher_id)
        .one(conn)
        .await
        .map_err(map_db_err)
}

/// All publishers, sorted by name ascending.
pub async fn find_all_by_name<C: ConnectionTrait>(
    conn: &C,
) -> Result<Vec<publishers::Model>, DomainError> {
    publishers::Entity::find()
        .order_by_asc(publishers::Column::Name)
        .all(conn)
        .await
        .map_err(map_db_err)
}

/// Delete a publisher. Owned games and their association rows go with it via
/// the cascading foreign keys.
pub async fn delete<C: ConnectionTrait>(
    conn: &C,
    publisher: publishers::Model,
) -> Result<(), DomainError> {
    publisher.delete(conn).await.map_err(map_db_err)?;
    Ok(())
}
