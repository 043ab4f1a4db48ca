//! Background subscriber that logs every committed domain event
//!
//! Stands in for downstream consumers: dashboards, search indexing,
//! integration event publication.

use tokio::task::JoinHandle;
use tracing::info;

use crate::domain::DomainEvent;

use super::SharedEventBus;

/// Spawns a task that logs each event arriving on the bus until the bus is
/// dropped.
pub fn spawn_event_logger(bus: &SharedEventBus) -> JoinHandle<()> {
    let mut subscriber = bus.subscribe();
    tokio::spawn(async move {
        while let Some(event) = subscriber.recv().await {
            log_event(&event);
        }
    })
}

fn log_event(event: &DomainEvent) {
    match event {
        DomainEvent::LocationCreated(e) => info!(
            location_id = ?e.location_id,
            name = %e.name,
            address = %e.address,
            occurred_at = %e.occurred_at,
            "Location created"
        ),
        DomainEvent::LocationUpdated(e) => info!(
            location_id = ?e.location_id,
            name = %e.name,
            address = %e.address,
            occurred_at = %e.occurred_at,
            "Location updated"
        ),
        DomainEvent::EvseAdded(e) => info!(
            evse_id = ?e.evse_id,
            evse_ocpi_id = %e.evse_ocpi_id,
            location_id = ?e.location_id,
            initial_status = %e.initial_status,
            occurred_at = %e.occurred_at,
            "EVSE added"
        ),
        DomainEvent::EvseStatusChanged(e) => info!(
            evse_id = ?e.evse_id,
            evse_ocpi_id = %e.evse_ocpi_id,
            old_status = %e.old_status,
            new_status = %e.new_status,
            occurred_at = %e.occurred_at,
            "EVSE status changed"
        ),
        DomainEvent::ConnectorAdded(e) => info!(
            connector_id = ?e.connector_id,
            evse_ocpi_id = %e.evse_ocpi_id,
            standard = %e.standard,
            power_level_kw = e.power_level,
            voltage = e.voltage,
            occurred_at = %e.occurred_at,
            "Connector added"
        ),
    }
}
