//! Repository provider interface

use crate::domain::connector::ConnectorRepository;
use crate::domain::evse::EvseRepository;
use crate::domain::location::LocationRepository;

/// Per-aggregate repository accessors behind one handle.
///
/// Implemented by the SeaORM provider for production and by the in-memory
/// provider for tests.
pub trait RepositoryProvider: Send + Sync {
    fn locations(&self) -> &dyn LocationRepository;
    fn evses(&self) -> &dyn EvseRepository;
    fn connectors(&self) -> &dyn ConnectorRepository;
}
