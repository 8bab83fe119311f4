//! Relationship upkeep for the game<->tester and publisher->game relations.
//!
//! Callers never mutate one side of the game<->tester relation alone: both
//! the game's tester set and the tester's game set derive from the single
//! join row written here, so the two views cannot disagree once the
//! enclosing transaction commits.

use sea_orm::{ConnectionTrait, Set};

use crate::entities::{games, publishers, testers};
use crate::errors::domain::DomainError;
use crate::repos;

/// Link a tester to a game. Idempotent: linking the same pair twice leaves a
/// single association row. Returns whether a new link was created.
pub async fn link_tester<C: ConnectionTrait>(
    conn: &C,
    game: &games::Model,
    tester: &testers::Model,
) -> Result<bool, DomainError> {
    if repos::game_testers::find_link(conn, game.id, tester.id)
        .await?
        .is_some()
    {
        return Ok(false);
    }
    repos::game_testers::insert_link(conn, game.id, tester.id).await?;
    Ok(true)
}

/// Stamp the owning publisher onto a game. The publisher's game set derives
/// from this foreign key, so attaching an already-owned game cannot
/// duplicate it.
pub fn adopt_game(publisher: &publishers::Model, game: &mut games::ActiveModel) {
    game.publisher_id = Set(publisher.id);
}

/// Owning-side view of the relation: testers assigned to a game.
pub async fn testers_of<C: ConnectionTrait>(
    conn: &C,
    game: &games::Model,
) -> Result<Vec<testers::Model>, DomainError> {
    repos::game_testers::testers_for_game(conn, game).await
}

/// Derived inverse view: the games a tester is assigned to are queried
/// through the join rows, never stored on the tester.
pub async fn games_of<C: ConnectionTrait>(
    conn: &C,
    tester: &testers::Model,
) -> Result<Vec<games::Model>, DomainError> {
    repos::game_testers::games_for_tester(conn, tester).await
}
