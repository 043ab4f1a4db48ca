//! Connector entity

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "connectors")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub evse_id: i64,

    /// Technical standard, e.g. "IEC_62196_T2", "CHADEMO", "CCS_TYPE_2"
    pub standard: String,

    /// Power level in kW
    pub power_level: f64,

    /// Voltage in V
    pub voltage: f64,

    pub last_updated: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::evse::Entity",
        from = "Column::EvseId",
        to = "super::evse::Column::Id"
    )]
    Evse,
}

impl Related<super::evse::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Evse.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
