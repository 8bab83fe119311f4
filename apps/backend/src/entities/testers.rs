use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "testers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
    #[sea_orm(column_name = "updated_at")]
    pub updated_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::game_testers::Entity")]
    GameTesters,
}

impl Related<super::game_testers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GameTesters.def()
    }
}

// Inverse side of the many-to-many: a tester's games are derived by query
// through game_testers, never stored on the tester itself.
impl Related<super::games::Entity> for Entity {
    fn to() -> RelationDef {
        super::game_testers::Relation::Game.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::game_testers::Relation::Tester.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
