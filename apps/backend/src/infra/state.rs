//! Unified builder for application state.

use crate::config::db::{db_url, DbProfile};
use crate::error::AppError;
use crate::infra::db::connect_db;
use crate::state::app_state::AppState;

/// Start building an [`AppState`]. Defaults to the Prod profile.
pub fn build_state() -> StateBuilder {
    StateBuilder {
        profile: DbProfile::Prod,
    }
}

pub struct StateBuilder {
    profile: DbProfile,
}

impl StateBuilder {
    pub fn with_db(mut self, profile: DbProfile) -> Self {
        self.profile = profile;
        self
    }

    /// Resolve the connection spec, connect, run migrations, and produce the
    /// shared state.
    pub async fn build(self) -> Result<AppState, AppError> {
        let url = db_url(self.profile)?;
        let db = connect_db(&url).await?;
        Ok(AppState::new(db))
    }
}
