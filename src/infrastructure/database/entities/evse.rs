//! EVSE entity

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "evses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    /// OCPI identifier text, unique system-wide
    #[sea_orm(unique)]
    pub evse_id_text: String,

    /// Status: AVAILABLE, BLOCKED, INOPERATIVE, REMOVED
    pub status: String,

    pub location_id: i64,

    pub last_updated: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::location::Entity",
        from = "Column::LocationId",
        to = "super::location::Column::Id"
    )]
    Location,
    #[sea_orm(has_many = "super::connector::Entity")]
    Connectors,
}

impl Related<super::location::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Location.def()
    }
}

impl Related<super::connector::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Connectors.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
