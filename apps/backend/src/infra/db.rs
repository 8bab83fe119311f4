//! Database connection bootstrap.

use std::time::Duration;

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::error::AppError;

/// Connect to the database at `url` and bring the schema up to date.
///
/// An in-memory SQLite database exists per connection, so the pool is pinned
/// to a single connection for `sqlite::memory:` specs; every acquire then
/// sees the same database.
pub async fn connect_db(url: &str) -> Result<DatabaseConnection, AppError> {
    let mut opt = ConnectOptions::new(url);
    if url.starts_with("sqlite::memory:") {
        opt.min_connections(1).max_connections(1);
    } else {
        opt.min_connections(1)
            .max_connections(10)
            .acquire_timeout(Duration::from_secs(5));
    }
    opt.sqlx_logging(false);

    let db = Database::connect(opt)
        .await
        .map_err(|e| AppError::db_unavailable(format!("failed to connect to database: {e}")))?;

    Migrator::up(&db, None)
        .await
        .map_err(|e| AppError::config(format!("failed to run migrations: {e}")))?;

    Ok(db)
}
