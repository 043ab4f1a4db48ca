//! Create evses table

use sea_orm_migration::prelude::*;

use super::m20250301_000001_create_locations::Locations;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Evses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Evses::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Evses::EvseIdText).string().not_null())
                    .col(
                        ColumnDef::new(Evses::Status)
                            .string()
                            .not_null()
                            .default("AVAILABLE"),
                    )
                    .col(ColumnDef::new(Evses::LocationId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Evses::LastUpdated)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_evses_location")
                            .from(Evses::Table, Evses::LocationId)
                            .to(Locations::Table, Locations::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Authoritative guard for system-wide OCPI identifier uniqueness:
        // a racing duplicate insert fails here even when the application
        // pre-check passed on both sides.
        manager
            .create_index(
                Index::create()
                    .name("idx_evses_evse_id_text")
                    .table(Evses::Table)
                    .col(Evses::EvseIdText)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Evses::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Evses {
    Table,
    Id,
    EvseIdText,
    Status,
    LocationId,
    LastUpdated,
}
