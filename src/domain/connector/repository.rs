//! Connector repository interface

use async_trait::async_trait;

use crate::domain::DomainResult;

use super::Connector;

#[async_trait]
pub trait ConnectorRepository: Send + Sync {
    /// Persists a new connector, returning it with its identity assigned.
    async fn insert(&self, connector: &Connector) -> DomainResult<Connector>;
}
