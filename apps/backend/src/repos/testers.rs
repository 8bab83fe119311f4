//! Tester persistence functions (generic over ConnectionTrait).

use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, Set};
use time::OffsetDateTime;

use crate::entities::testers;
use crate::errors::domain::DomainError;
use crate::infra::db_errors::map_db_err;

pub async fn insert<C: ConnectionTrait>(
    conn: &C,
    mut tester: testers::ActiveModel,
) -> Result<testers::Model, DomainError> {
    let now = OffsetDateTime::now_utc();
    tester.created_at = Set(now);
    tester.updated_at = Set(now);
    tester.insert(conn).await.map_err(map_db_err)
}

pub async fn find_by_id<C: ConnectionTrait>(
    conn: &C,
    tester_id: i64,
) -> Result<Option<testers::Model>, DomainError> {
    testers::Entity::find_by_id(tester_id)
        .one(conn)
        .await
        .map_err(map_db_err)
}
