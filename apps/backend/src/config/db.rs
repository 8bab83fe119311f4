//! Database profile and connection-spec resolution.

use crate::error::AppError;

/// Which database the process should connect to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbProfile {
    /// Real database, connection spec taken from `DATABASE_URL`.
    Prod,
    /// Private in-memory SQLite database, migrated on connect.
    Test,
}

/// Resolve the connection URL for a profile.
pub fn db_url(profile: DbProfile) -> Result<String, AppError> {
    match profile {
        DbProfile::Prod => std::env::var("DATABASE_URL")
            .map_err(|_| AppError::config("DATABASE_URL must be set".to_string())),
        DbProfile::Test => Ok("sqlite::memory:".to_string()),
    }
}
