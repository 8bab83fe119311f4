//! Transfer records: the externally-facing representations of publishers,
//! games, and testers.
//!
//! Records are decoupled from the stored entities so that the cyclic
//! game<->tester relation never reaches a serializer: a publisher carries its
//! games, a game collapses its testers to bare ids, and a tester never
//! carries its games.

use sea_orm::{ActiveValue, Set};
use serde::{Deserialize, Serialize};

use crate::entities::{games, publishers, testers};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublisherRecord {
    /// Absent before first persist, assigned by the store afterwards.
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub rating: f64,
    #[serde(default)]
    pub games: Vec<GameRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRecord {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    pub genre: String,
    pub platforms: String,
    /// Assigned testers, collapsed to ids. This is how the
    /// game->tester->game cycle is broken on the way out.
    #[serde(default)]
    pub tester_ids: Vec<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TesterRecord {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl PublisherRecord {
    pub fn from_entity(publisher: &publishers::Model, games: Vec<GameRecord>) -> Self {
        Self {
            id: Some(publisher.id),
            name: publisher.name.clone(),
            email: publisher.email.clone(),
            phone: publisher.phone.clone(),
            location: publisher.location.clone(),
            rating: publisher.rating,
            games,
        }
    }

    /// Scalar fields only. Nested games are never persisted through a
    /// publisher save; games change through the dedicated game path.
    pub fn to_active_model(&self) -> publishers::ActiveModel {
        publishers::ActiveModel {
            id: self.id.map_or(ActiveValue::NotSet, Set),
            name: Set(self.name.clone()),
            email: Set(self.email.clone()),
            phone: Set(self.phone.clone()),
            location: Set(self.location.clone()),
            rating: Set(self.rating),
            created_at: ActiveValue::NotSet,
            updated_at: ActiveValue::NotSet,
        }
    }
}

impl GameRecord {
    pub fn from_entity(game: &games::Model, mut tester_ids: Vec<i64>) -> Self {
        tester_ids.sort_unstable();
        Self {
            id: Some(game.id),
            name: game.name.clone(),
            genre: game.genre.clone(),
            platforms: game.platforms.clone(),
            tester_ids,
        }
    }

    /// Scalar fields only. The owning publisher is stamped on by the caller,
    /// and tester associations are intentionally NOT populated here: they
    /// change only through the dedicated assignment operation, never through
    /// a generic save.
    pub fn to_active_model(&self) -> games::ActiveModel {
        games::ActiveModel {
            id: self.id.map_or(ActiveValue::NotSet, Set),
            publisher_id: ActiveValue::NotSet,
            name: Set(self.name.clone()),
            genre: Set(self.genre.clone()),
            platforms: Set(self.platforms.clone()),
            created_at: ActiveValue::NotSet,
            updated_at: ActiveValue::NotSet,
        }
    }
}

impl TesterRecord {
    pub fn to_active_model(&self) -> testers::ActiveModel {
        testers::ActiveModel {
            id: self.id.map_or(ActiveValue::NotSet, Set),
            name: Set(self.name.clone()),
            email: Set(self.email.clone()),
            phone: Set(self.phone.clone()),
            created_at: ActiveValue::NotSet,
            updated_at: ActiveValue::NotSet,
        }
    }
}

/// A tester's games back-reference is never serialized; the record carries
/// scalar fields only.
impl From<&testers::Model> for TesterRecord {
    fn from(tester: &testers::Model) -> Self {
        Self {
            id: Some(tester.id),
            name: tester.name.clone(),
            email: tester.email.clone(),
            phone: tester.phone.clone(),
        }
    }
}
