//! Location entity

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "locations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub name: String,
    pub address: String,

    pub latitude: f64,
    pub longitude: f64,

    pub opens_at: ChronoTime,
    pub closes_at: ChronoTime,

    pub last_updated: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::evse::Entity")]
    Evses,
}

impl Related<super::evse::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Evses.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
