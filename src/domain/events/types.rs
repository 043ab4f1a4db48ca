//! Domain event types
//!
//! Immutable records of state changes inside the Location aggregate.
//! Entities buffer them at mutation time; the application layer drains and
//! publishes them only after the change is durably committed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::evse::EvseStatus;

/// Domain events emitted by the Location aggregate.
///
/// DB-assigned identities may still be `None` when an event is recorded on an
/// entity that has not been persisted yet; the OCPI identifier string is
/// always carried where it applies.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum DomainEvent {
    LocationCreated(LocationCreatedEvent),
    LocationUpdated(LocationUpdatedEvent),
    EvseAdded(EvseAddedEvent),
    EvseStatusChanged(EvseStatusChangedEvent),
    ConnectorAdded(ConnectorAddedEvent),
}

impl DomainEvent {
    pub fn event_type(&self) -> &'static str {
        match self {
            DomainEvent::LocationCreated(_) => "location_created",
            DomainEvent::LocationUpdated(_) => "location_updated",
            DomainEvent::EvseAdded(_) => "evse_added",
            DomainEvent::EvseStatusChanged(_) => "evse_status_changed",
            DomainEvent::ConnectorAdded(_) => "connector_added",
        }
    }

    pub fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            DomainEvent::LocationCreated(e) => e.occurred_at,
            DomainEvent::LocationUpdated(e) => e.occurred_at,
            DomainEvent::EvseAdded(e) => e.occurred_at,
            DomainEvent::EvseStatusChanged(e) => e.occurred_at,
            DomainEvent::ConnectorAdded(e) => e.occurred_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationCreatedEvent {
    pub location_id: Option<i64>,
    pub name: String,
    pub address: String,
    pub occurred_at: DateTime<Utc>,
}

impl LocationCreatedEvent {
    pub fn new(location_id: Option<i64>, name: &str, address: &str) -> Self {
        Self {
            location_id,
            name: name.to_string(),
            address: address.to_string(),
            occurred_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationUpdatedEvent {
    pub location_id: Option<i64>,
    pub name: String,
    pub address: String,
    pub occurred_at: DateTime<Utc>,
}

impl LocationUpdatedEvent {
    pub fn new(location_id: Option<i64>, name: &str, address: &str) -> Self {
        Self {
            location_id,
            name: name.to_string(),
            address: address.to_string(),
            occurred_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvseAddedEvent {
    pub evse_id: Option<i64>,
    pub evse_ocpi_id: String,
    pub location_id: Option<i64>,
    pub initial_status: EvseStatus,
    pub occurred_at: DateTime<Utc>,
}

impl EvseAddedEvent {
    pub fn new(
        evse_id: Option<i64>,
        evse_ocpi_id: &str,
        location_id: Option<i64>,
        initial_status: EvseStatus,
    ) -> Self {
        Self {
            evse_id,
            evse_ocpi_id: evse_ocpi_id.to_string(),
            location_id,
            initial_status,
            occurred_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvseStatusChangedEvent {
    pub evse_id: Option<i64>,
    pub evse_ocpi_id: String,
    pub old_status: EvseStatus,
    pub new_status: EvseStatus,
    pub occurred_at: DateTime<Utc>,
}

impl EvseStatusChangedEvent {
    pub fn new(
        evse_id: Option<i64>,
        evse_ocpi_id: &str,
        old_status: EvseStatus,
        new_status: EvseStatus,
    ) -> Self {
        Self {
            evse_id,
            evse_ocpi_id: evse_ocpi_id.to_string(),
            old_status,
            new_status,
            occurred_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectorAddedEvent {
    pub connector_id: Option<i64>,
    pub evse_id: Option<i64>,
    pub evse_ocpi_id: String,
    pub standard: String,
    pub power_level: f64,
    pub voltage: f64,
    pub occurred_at: DateTime<Utc>,
}

impl ConnectorAddedEvent {
    pub fn new(
        connector_id: Option<i64>,
        evse_id: Option<i64>,
        evse_ocpi_id: &str,
        standard: &str,
        power_level: f64,
        voltage: f64,
    ) -> Self {
        Self {
            connector_id,
            evse_id,
            evse_ocpi_id: evse_ocpi_id.to_string(),
            standard: standard.to_string(),
            power_level,
            voltage,
            occurred_at: Utc::now(),
        }
    }
}
