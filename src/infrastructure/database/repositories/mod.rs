//! SeaORM repository implementations

mod convert;

pub mod connector_repository;
pub mod evse_repository;
pub mod location_repository;
pub mod repository_provider;

pub use connector_repository::SeaOrmConnectorRepository;
pub use evse_repository::SeaOrmEvseRepository;
pub use location_repository::SeaOrmLocationRepository;
pub use repository_provider::SeaOrmRepositoryProvider;
