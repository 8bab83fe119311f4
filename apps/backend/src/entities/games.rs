use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "games")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "publisher_id")]
    pub publisher_id: i64,
    pub name: String,
    pub genre: String,
    pub platforms: String,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
    #[sea_orm(column_name = "updated_at")]
    pub updated_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::publishers::Entity",
        from = "Column::PublisherId",
        to = "super::publishers::Column::Id"
    )]
    Publisher,
    #[sea_orm(has_many = "super::game_testers::Entity")]
    GameTesters,
}

impl Related<super::publishers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Publisher.def()
    }
}

impl Related<super::game_testers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GameTesters.def()
    }
}

// Many-to-many to testers through the game_testers join entity.
impl Related<super::testers::Entity> for Entity {
    fn to() -> RelationDef {
        super::game_testers::Relation::Tester.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::game_testers::Relation::Game.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
