//! Create connectors table

use sea_orm_migration::prelude::*;

use super::m20250301_000002_create_evses::Evses;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Connectors::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Connectors::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Connectors::EvseId).big_integer().not_null())
                    .col(ColumnDef::new(Connectors::Standard).string().not_null())
                    .col(ColumnDef::new(Connectors::PowerLevel).double().not_null())
                    .col(ColumnDef::new(Connectors::Voltage).double().not_null())
                    .col(
                        ColumnDef::new(Connectors::LastUpdated)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_connectors_evse")
                            .from(Connectors::Table, Connectors::EvseId)
                            .to(Evses::Table, Evses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_connectors_evse")
                    .table(Connectors::Table)
                    .col(Connectors::EvseId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Connectors::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Connectors {
    Table,
    Id,
    EvseId,
    Standard,
    PowerLevel,
    Voltage,
    LastUpdated,
}
