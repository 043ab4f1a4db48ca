//! EVSE orchestration service

use std::sync::Arc;

use tracing::info;

use crate::application::events::SharedEventBus;
use crate::domain::{
    DomainError, DomainResult, Evse, EvseId, EvseStatus, RepositoryProvider,
};

/// Orchestrates EVSE operations, including the cross-aggregate OCPI-id
/// uniqueness check that no single Location aggregate can enforce.
pub struct EvseService {
    repos: Arc<dyn RepositoryProvider>,
    event_bus: SharedEventBus,
}

impl EvseService {
    pub fn new(repos: Arc<dyn RepositoryProvider>, event_bus: SharedEventBus) -> Self {
        Self { repos, event_bus }
    }

    /// Attaches a new EVSE to an existing Location.
    ///
    /// The identifier is validated, then checked for existence anywhere in
    /// the system. The pre-check is a fast path only: the UNIQUE constraint
    /// in storage is the authoritative guard, so a concurrent duplicate still
    /// fails at insert with the same `DuplicateEvseId` error.
    pub async fn add_evse_to_location(
        &self,
        location_id: i64,
        evse_id_text: &str,
    ) -> DomainResult<Evse> {
        let location = self
            .repos
            .locations()
            .find_by_id(location_id)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "Location",
                field: "id",
                value: location_id.to_string(),
            })?;

        let evse_id = EvseId::new(evse_id_text)?;

        if self
            .repos
            .evses()
            .find_by_evse_id(evse_id.as_str())
            .await?
            .is_some()
        {
            return Err(DomainError::DuplicateEvseId(evse_id_text.to_string()));
        }

        let mut evse = Evse::new(evse_id, &location);
        let saved = self.repos.evses().insert(&evse).await?;

        for event in evse.take_events() {
            self.event_bus.publish(event);
        }
        info!(evse_id = evse_id_text, location_id, "EVSE added to location");
        Ok(saved)
    }

    /// Changes the status of an EVSE, enforcing the transition rules.
    pub async fn change_evse_status(
        &self,
        evse_id_text: &str,
        new_status: EvseStatus,
    ) -> DomainResult<Evse> {
        let mut evse = self.load(evse_id_text).await?;
        evse.change_status(new_status)?;
        let saved = self.repos.evses().update(&evse).await?;

        for event in evse.take_events() {
            self.event_bus.publish(event);
        }
        info!(evse_id = evse_id_text, status = %new_status, "EVSE status changed");
        Ok(saved)
    }

    pub async fn find_by_evse_id(&self, evse_id_text: &str) -> DomainResult<Evse> {
        self.load(evse_id_text).await
    }

    async fn load(&self, evse_id_text: &str) -> DomainResult<Evse> {
        self.repos
            .evses()
            .find_by_evse_id(evse_id_text)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "EVSE",
                field: "evse_id",
                value: evse_id_text.to_string(),
            })
    }
}
