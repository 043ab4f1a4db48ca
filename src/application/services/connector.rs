//! Connector orchestration service

use std::sync::Arc;

use tracing::info;

use crate::application::events::SharedEventBus;
use crate::domain::{Connector, DomainError, DomainResult, RepositoryProvider};

pub struct ConnectorService {
    repos: Arc<dyn RepositoryProvider>,
    event_bus: SharedEventBus,
}

impl ConnectorService {
    pub fn new(repos: Arc<dyn RepositoryProvider>, event_bus: SharedEventBus) -> Self {
        Self { repos, event_bus }
    }

    /// Attaches a new connector to an existing EVSE.
    pub async fn add_connector_to_evse(
        &self,
        evse_id_text: &str,
        standard: &str,
        power_level: f64,
        voltage: f64,
    ) -> DomainResult<Connector> {
        let evse = self
            .repos
            .evses()
            .find_by_evse_id(evse_id_text)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "EVSE",
                field: "evse_id",
                value: evse_id_text.to_string(),
            })?;

        let mut connector = Connector::new(standard, power_level, voltage, &evse)?;
        let saved = self.repos.connectors().insert(&connector).await?;

        for event in connector.take_events() {
            self.event_bus.publish(event);
        }
        info!(
            evse_id = evse_id_text,
            standard,
            power_level_kw = power_level,
            "Connector added to EVSE"
        );
        Ok(saved)
    }
}
