//! Application service for the publisher/game/tester use cases.
//!
//! Methods are generic over `ConnectionTrait` so that each use case composes
//! inside the single transaction opened at the route boundary.

use sea_orm::ConnectionTrait;

use crate::entities::{games, publishers, testers};
use crate::errors::domain::{DomainError, ValidationKind};
use crate::repos;
use crate::services::associations;
use crate::transfer::{GameRecord, PublisherRecord, TesterRecord};

/// One method per use case; lookups, ownership validation, and mutation are
/// orchestrated here on top of the repos and the association layer.
pub struct TestingService;

impl TestingService {
    pub fn new() -> Self {
        Self
    }

    /// Persist a publisher: insert when the record has no id, full overwrite
    /// when it does. Overwrite means every scalar field is replaced with the
    /// record's value; there are no partial-patch semantics, by contract.
    /// Nested games on the inbound record are ignored.
    pub async fn save_publisher<C: ConnectionTrait>(
        &self,
        conn: &C,
        record: PublisherRecord,
    ) -> Result<PublisherRecord, DomainError> {
        let active = record.to_active_model();
        let publisher = match record.id {
            None => repos::publishers::insert(conn, active).await?,
            Some(publisher_id) => {
                self.find_publisher(conn, publisher_id).await?;
                repos::publishers::update(conn, active).await?
            }
        };
        self.publisher_record(conn, &publisher).await
    }

    pub async fn publisher_by_id<C: ConnectionTrait>(
        &self,
        conn: &C,
        publisher_id: i64,
    ) -> Result<PublisherRecord, DomainError> {
        let publisher = self.find_publisher(conn, publisher_id).await?;
        self.publisher_record(conn, &publisher).await
    }

    /// All publishers, sorted by name ascending.
    pub async fn list_publishers<C: ConnectionTrait>(
        &self,
        conn: &C,
    ) -> Result<Vec<PublisherRecord>, DomainError> {
        let publishers = repos::publishers::find_all_by_name(conn).await?;
        let mut records = Vec::with_capacity(publishers.len());
        for publisher in &publishers {
            records.push(self.publisher_record(conn, publisher).await?);
        }
        Ok(records)
    }

    /// Delete a publisher and, through the store's cascade, all of its games
    /// and their tester associations.
    pub async fn delete_publisher<C: ConnectionTrait>(
        &self,
        conn: &C,
        publisher_id: i64,
    ) -> Result<(), DomainError> {
        let publisher = self.find_publisher(conn, publisher_id).await?;
        repos::publishers::delete(conn, publisher).await
    }

    /// Save or update a game under a specific publisher.
    ///
    /// A record with an id must name a game the publisher actually owns;
    /// addressing another publisher's game is an ownership violation, not a
    /// not-found. Only name/genre/platforms are overwritten: the id and the
    /// tester associations survive updates untouched.
    pub async fn save_game<C: ConnectionTrait>(
        &self,
        conn: &C,
        publisher_id: i64,
        record: GameRecord,
    ) -> Result<GameRecord, DomainError> {
        let publisher = self.find_publisher(conn, publisher_id).await?;

        if let Some(game_id) = record.id {
            let existing = self.find_game(conn, game_id).await?;
            if existing.publisher_id != publisher.id {
                return Err(DomainError::validation(
                    ValidationKind::GamePublisherMismatch,
                    format!("Game with ID={game_id} is not published by ID={publisher_id}."),
                ));
            }
        }

        let mut active = record.to_active_model();
        associations::adopt_game(&publisher, &mut active);

        let game = match record.id {
            None => repos::games::insert(conn, active).await?,
            Some(_) => repos::games::update(conn, active).await?,
        };
        self.game_record(conn, &game).await
    }

    pub async fn tester_by_id<C: ConnectionTrait>(
        &self,
        conn: &C,
        tester_id: i64,
    ) -> Result<TesterRecord, DomainError> {
        let tester = self.find_tester(conn, tester_id).await?;
        Ok(TesterRecord::from(&tester))
    }

    /// Persist a new tester. Associations are always empty via this path;
    /// they are created only through [`Self::assign_tester_to_game`].
    pub async fn save_tester<C: ConnectionTrait>(
        &self,
        conn: &C,
        record: TesterRecord,
    ) -> Result<TesterRecord, DomainError> {
        let tester = repos::testers::insert(conn, record.to_active_model()).await?;
        Ok(TesterRecord::from(&tester))
    }

    /// Assign a tester to a game. Both sides of the relation are consistent
    /// once the enclosing transaction commits; assigning twice is a no-op.
    pub async fn assign_tester_to_game<C: ConnectionTrait>(
        &self,
        conn: &C,
        game_id: i64,
        tester_id: i64,
    ) -> Result<GameRecord, DomainError> {
        let game = self.find_game(conn, game_id).await?;
        let tester = self.find_tester(conn, tester_id).await?;
        associations::link_tester(conn, &game, &tester).await?;
        self.game_record(conn, &game).await
    }

    /// All testers associated with a game, order unspecified.
    pub async fn testers_for_game<C: ConnectionTrait>(
        &self,
        conn: &C,
        game_id: i64,
    ) -> Result<Vec<TesterRecord>, DomainError> {
        let game = self.find_game(conn, game_id).await?;
        let testers = associations::testers_of(conn, &game).await?;
        Ok(testers.iter().map(TesterRecord::from).collect())
    }

    async fn find_publisher<C: ConnectionTrait>(
        &self,
        conn: &C,
        publisher_id: i64,
    ) -> Result<publishers::Model, DomainError> {
        repos::publishers::find_by_id(conn, publisher_id)
            .await?
            .ok_or_else(|| DomainError::publisher_not_found(publisher_id))
    }

    async fn find_game<C: ConnectionTrait>(
        &self,
        conn: &C,
        game_id: i64,
    ) -> Result<games::Model, DomainError> {
        repos::games::find_by_id(conn, game_id)
            .await?
            .ok_or_else(|| DomainError::game_not_found(game_id))
    }

    async fn find_tester<C: ConnectionTrait>(
        &self,
        conn: &C,
        tester_id: i64,
    ) -> Result<testers::Model, DomainError> {
        repos::testers::find_by_id(conn, tester_id)
            .await?
            .ok_or_else(|| DomainError::tester_not_found(tester_id))
    }

    async fn publisher_record<C: ConnectionTrait>(
        &self,
        conn: &C,
        publisher: &publishers::Model,
    ) -> Result<PublisherRecord, DomainError> {
        let games = repos::games::find_by_publisher(conn, publisher.id).await?;
        let mut game_records = Vec::with_capacity(games.len());
        for game in &games {
            game_records.push(self.game_record(conn, game).await?);
        }
        Ok(PublisherRecord::from_entity(publisher, game_records))
    }

    async fn game_record<C: ConnectionTrait>(
        &self,
        conn: &C,
        game: &games::Model,
    ) -> Result<GameRecord, DomainError> {
        let tester_ids = repos::game_testers::tester_ids_for_game(conn, game.id).await?;
        Ok(GameRecord::from_entity(game, tester_ids))
    }
}

impl Default for TestingService {
    fn default() -> Self {
        Self::new()
    }
}
