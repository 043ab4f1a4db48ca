//! Database migrations module

pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_locations;
mod m20250301_000002_create_evses;
mod m20250301_000003_create_connectors;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_locations::Migration),
            Box::new(m20250301_000002_create_evses::Migration),
            Box::new(m20250301_000003_create_connectors::Migration),
        ]
    }
}
