#![allow(dead_code)]

use backend::config::db::DbProfile;
use backend::state::app_state::AppState;
use backend::transfer::{GameRecord, PublisherRecord, TesterRecord};

/// Fresh application state against a private in-memory database, migrated.
pub async fn test_state() -> AppState {
    backend::build_state()
        .with_db(DbProfile::Test)
        .build()
        .await
        .expect("build test state with DB")
}

pub fn publisher(name: &str) -> PublisherRecord {
    PublisherRecord {
        id: None,
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        phone: "555-0100".to_string(),
        location: "Berlin".to_string(),
        rating: 4.2,
        games: Vec::new(),
    }
}

pub fn game(name: &str) -> GameRecord {
    GameRecord {
        id: None,
        name: name.to_string(),
        genre: "Puzzle".to_string(),
        platforms: "PC, Switch".to_string(),
        tester_ids: Vec::new(),
    }
}

pub fn tester(name: &str) -> TesterRecord {
    TesterRecord {
        id: None,
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        phone: "555-0101".to_string(),
    }
}
