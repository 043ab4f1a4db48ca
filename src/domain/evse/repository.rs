//! EVSE repository interface

use async_trait::async_trait;

use crate::domain::DomainResult;

use super::Evse;

#[async_trait]
pub trait EvseRepository: Send + Sync {
    /// Persists a new EVSE. The storage-level UNIQUE constraint on the OCPI
    /// identifier is the authoritative uniqueness guard; a violation maps to
    /// `DomainError::DuplicateEvseId`.
    async fn insert(&self, evse: &Evse) -> DomainResult<Evse>;

    /// Persists changes to an existing EVSE.
    async fn update(&self, evse: &Evse) -> DomainResult<Evse>;

    /// Loads an EVSE (with its connectors) by OCPI identifier text.
    async fn find_by_evse_id(&self, evse_id: &str) -> DomainResult<Option<Evse>>;
}
