//! Connector entity

use chrono::{DateTime, Utc};

use crate::domain::events::{ConnectorAddedEvent, DomainEvent};
use crate::domain::evse::{Evse, EvseId};
use crate::domain::{DomainError, DomainResult};

/// A physical charging port on an EVSE.
///
/// A connector never exists on its own: it is created against an owning EVSE
/// and keeps a back-reference (the owner's identity) that only the owner's
/// `add_connector`/`remove_connector` maintain.
#[derive(Debug, Clone)]
pub struct Connector {
    id: Option<i64>,
    standard: String,
    power_level: f64,
    voltage: f64,
    evse_id: Option<i64>,
    evse_ocpi_id: Option<EvseId>,
    last_updated: DateTime<Utc>,
    events: Vec<DomainEvent>,
}

impl Connector {
    /// Creates a connector owned by `evse` and buffers a `ConnectorAdded`
    /// event. `standard` must be non-blank, `power_level` (kW) and `voltage`
    /// (V) strictly positive; these invariants hold for the lifetime of the
    /// object.
    pub fn new(standard: &str, power_level: f64, voltage: f64, evse: &Evse) -> DomainResult<Self> {
        if standard.trim().is_empty() {
            return Err(DomainError::Validation(
                "Connector standard cannot be blank".to_string(),
            ));
        }
        if power_level <= 0.0 {
            return Err(DomainError::Validation(format!(
                "Power level must be positive, got {}",
                power_level
            )));
        }
        if voltage <= 0.0 {
            return Err(DomainError::Validation(format!(
                "Voltage must be positive, got {}",
                voltage
            )));
        }

        let mut connector = Self {
            id: None,
            standard: standard.to_string(),
            power_level,
            voltage,
            evse_id: evse.id(),
            evse_ocpi_id: Some(evse.evse_id().clone()),
            last_updated: Utc::now(),
            events: Vec::new(),
        };

        connector.events.push(DomainEvent::ConnectorAdded(
            ConnectorAddedEvent::new(
                connector.id,
                evse.id(),
                evse.evse_id().as_str(),
                &connector.standard,
                connector.power_level,
                connector.voltage,
            ),
        ));

        Ok(connector)
    }

    /// Rebuilds a persisted connector. No validation, no events.
    pub(crate) fn rehydrate(
        id: i64,
        standard: String,
        power_level: f64,
        voltage: f64,
        evse_id: Option<i64>,
        evse_ocpi_id: Option<EvseId>,
        last_updated: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Some(id),
            standard,
            power_level,
            voltage,
            evse_id,
            evse_ocpi_id,
            last_updated,
            events: Vec::new(),
        }
    }

    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub fn standard(&self) -> &str {
        &self.standard
    }

    pub fn power_level(&self) -> f64 {
        self.power_level
    }

    pub fn voltage(&self) -> f64 {
        self.voltage
    }

    /// DB identity of the owning EVSE, if both sides are persisted.
    pub fn evse_id(&self) -> Option<i64> {
        self.evse_id
    }

    /// OCPI identifier of the owning EVSE.
    pub fn evse_ocpi_id(&self) -> Option<&EvseId> {
        self.evse_ocpi_id.as_ref()
    }

    pub fn last_updated(&self) -> DateTime<Utc> {
        self.last_updated
    }

    /// Drains the buffered events, leaving the buffer empty.
    pub fn take_events(&mut self) -> Vec<DomainEvent> {
        std::mem::take(&mut self.events)
    }

    pub(crate) fn set_owner(&mut self, evse_id: Option<i64>, evse_ocpi_id: &EvseId) {
        self.evse_id = evse_id;
        self.evse_ocpi_id = Some(evse_ocpi_id.clone());
    }

    pub(crate) fn clear_owner(&mut self) {
        self.evse_id = None;
        self.evse_ocpi_id = None;
    }
}
