//! SeaORM implementation of RepositoryProvider

use sea_orm::DatabaseConnection;

use crate::domain::connector::ConnectorRepository;
use crate::domain::evse::EvseRepository;
use crate::domain::location::LocationRepository;
use crate::domain::RepositoryProvider;

use super::connector_repository::SeaOrmConnectorRepository;
use super::evse_repository::SeaOrmEvseRepository;
use super::location_repository::SeaOrmLocationRepository;

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository accessors.
pub struct SeaOrmRepositoryProvider {
    locations: SeaOrmLocationRepository,
    evses: SeaOrmEvseRepository,
    connectors: SeaOrmConnectorRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            locations: SeaOrmLocationRepository::new(db.clone()),
            evses: SeaOrmEvseRepository::new(db.clone()),
            connectors: SeaOrmConnectorRepository::new(db),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn locations(&self) -> &dyn LocationRepository {
        &self.locations
    }

    fn evses(&self) -> &dyn EvseRepository {
        &self.evses
    }

    fn connectors(&self) -> &dyn ConnectorRepository {
        &self.connectors
    }
}
