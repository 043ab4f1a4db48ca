//! EVSE entity

use chrono::{DateTime, Utc};

use crate::domain::connector::Connector;
use crate::domain::events::{DomainEvent, EvseAddedEvent, EvseStatusChangedEvent};
use crate::domain::location::Location;
use crate::domain::{DomainError, DomainResult};

use super::{EvseId, EvseStatus};

/// Electric Vehicle Supply Equipment: a charge point owned by exactly one
/// Location, holding an ordered collection of connectors.
///
/// Status changes go through [`EvseStatus::is_valid_transition`]; an illegal
/// transition fails without touching state, timestamp or the event buffer.
#[derive(Debug, Clone)]
pub struct Evse {
    id: Option<i64>,
    evse_id: EvseId,
    status: EvseStatus,
    location_id: Option<i64>,
    connectors: Vec<Connector>,
    last_updated: DateTime<Utc>,
    events: Vec<DomainEvent>,
}

impl Evse {
    /// Creates a new EVSE attached to `location`. The initial status is
    /// always `Available`; an `EvseAdded` event is buffered.
    pub fn new(evse_id: EvseId, location: &Location) -> Self {
        let mut evse = Self {
            id: None,
            status: EvseStatus::Available,
            location_id: location.id(),
            connectors: Vec::new(),
            last_updated: Utc::now(),
            events: Vec::new(),
            evse_id,
        };

        evse.events.push(DomainEvent::EvseAdded(EvseAddedEvent::new(
            evse.id,
            evse.evse_id.as_str(),
            location.id(),
            evse.status,
        )));

        evse
    }

    /// Rebuilds a persisted EVSE. No validation, no events.
    pub(crate) fn rehydrate(
        id: i64,
        evse_id: EvseId,
        status: EvseStatus,
        location_id: Option<i64>,
        connectors: Vec<Connector>,
        last_updated: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Some(id),
            evse_id,
            status,
            location_id,
            connectors,
            last_updated,
            events: Vec::new(),
        }
    }

    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub fn evse_id(&self) -> &EvseId {
        &self.evse_id
    }

    pub fn status(&self) -> EvseStatus {
        self.status
    }

    /// DB identity of the owning Location.
    pub fn location_id(&self) -> Option<i64> {
        self.location_id
    }

    /// Read-only view of the owned connectors, in insertion order.
    pub fn connectors(&self) -> &[Connector] {
        &self.connectors
    }

    pub fn last_updated(&self) -> DateTime<Utc> {
        self.last_updated
    }

    /// Changes the operational status, enforcing the transition rules.
    ///
    /// On success the status and `last_updated` are set and an
    /// `EvseStatusChanged` event is buffered; on failure nothing changes.
    pub fn change_status(&mut self, new_status: EvseStatus) -> DomainResult<()> {
        if !EvseStatus::is_valid_transition(Some(self.status), new_status) {
            return Err(DomainError::InvalidStatusTransition {
                from: Some(self.status),
                to: new_status,
                evse_id: self.evse_id.as_str().to_string(),
            });
        }

        let old_status = self.status;
        self.status = new_status;
        self.last_updated = Utc::now();

        self.events
            .push(DomainEvent::EvseStatusChanged(EvseStatusChangedEvent::new(
                self.id,
                self.evse_id.as_str(),
                old_status,
                new_status,
            )));

        Ok(())
    }

    /// Adds a connector to this EVSE, setting its back-reference.
    pub fn add_connector(&mut self, mut connector: Connector) {
        connector.set_owner(self.id, &self.evse_id);
        self.connectors.push(connector);
    }

    /// Removes the connector with the given DB identity, clearing its
    /// back-reference. Returns `None` (and changes nothing) if no owned
    /// connector has that identity.
    pub fn remove_connector(&mut self, connector_id: i64) -> Option<Connector> {
        let pos = self
            .connectors
            .iter()
            .position(|c| c.id() == Some(connector_id))?;
        let mut connector = self.connectors.remove(pos);
        connector.clear_owner();
        Some(connector)
    }

    /// Drains the buffered events, leaving the buffer empty.
    pub fn take_events(&mut self) -> Vec<DomainEvent> {
        std::mem::take(&mut self.events)
    }

    pub(crate) fn set_owner(&mut self, location_id: Option<i64>) {
        self.location_id = location_id;
    }

    pub(crate) fn clear_owner(&mut self) {
        self.location_id = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::{BusinessHours, Coordinates};
    use chrono::NaiveTime;

    fn test_location() -> Location {
        let location = Location::new(
            "Test Site",
            "1 Main St",
            Coordinates::new(10.0, 20.0).unwrap(),
            BusinessHours::new(
                NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
                NaiveTime::from_hms_opt(20, 0, 0).unwrap(),
            ),
        )
        .unwrap();
        Location::rehydrate(
            7,
            location.name().to_string(),
            location.address().to_string(),
            location.coordinates(),
            location.business_hours(),
            Vec::new(),
            Utc::now(),
        )
    }

    fn test_evse() -> Evse {
        Evse::new(EvseId::new("US*ABC*EVSE123").unwrap(), &test_location())
    }

    #[test]
    fn new_evse_starts_available_and_buffers_added_event() {
        let mut evse = test_evse();
        assert_eq!(evse.status(), EvseStatus::Available);
        assert_eq!(evse.location_id(), Some(7));

        let events = evse.take_events();
        assert_eq!(events.len(), 1);
        match &events[0] {
            DomainEvent::EvseAdded(e) => {
                assert_eq!(e.evse_ocpi_id, "US*ABC*EVSE123");
                assert_eq!(e.location_id, Some(7));
                assert_eq!(e.initial_status, EvseStatus::Available);
                assert_eq!(e.evse_id, None);
            }
            other => panic!("unexpected event: {:?}", other),
        }
        // drained
        assert!(evse.take_events().is_empty());
    }

    #[test]
    fn legal_status_change_updates_state_and_buffers_event() {
        let mut evse = test_evse();
        evse.take_events();

        evse.change_status(EvseStatus::Blocked).unwrap();
        assert_eq!(evse.status(), EvseStatus::Blocked);

        let events = evse.take_events();
        assert_eq!(events.len(), 1);
        match &events[0] {
            DomainEvent::EvseStatusChanged(e) => {
                assert_eq!(e.old_status, EvseStatus::Available);
                assert_eq!(e.new_status, EvseStatus::Blocked);
                assert_eq!(e.evse_ocpi_id, "US*ABC*EVSE123");
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[test]
    fn illegal_status_change_leaves_everything_untouched() {
        let mut evse = test_evse();
        evse.take_events();
        evse.change_status(EvseStatus::Blocked).unwrap();
        evse.take_events();
        let before = evse.last_updated();

        let err = evse.change_status(EvseStatus::Inoperative).unwrap_err();
        match err {
            DomainError::InvalidStatusTransition { from, to, evse_id } => {
                assert_eq!(from, Some(EvseStatus::Blocked));
                assert_eq!(to, EvseStatus::Inoperative);
                assert_eq!(evse_id, "US*ABC*EVSE123");
            }
            other => panic!("unexpected error: {:?}", other),
        }

        assert_eq!(evse.status(), EvseStatus::Blocked);
        assert_eq!(evse.last_updated(), before);
        assert!(evse.take_events().is_empty());
    }

    #[test]
    fn removed_is_reachable_from_any_state() {
        let mut evse = test_evse();
        evse.change_status(EvseStatus::Blocked).unwrap();
        evse.change_status(EvseStatus::Removed).unwrap();
        assert_eq!(evse.status(), EvseStatus::Removed);

        assert!(evse.change_status(EvseStatus::Available).is_err());
    }

    #[test]
    fn add_connector_sets_back_reference() {
        let mut evse = test_evse();
        let connector = Connector::new("IEC_62196_T2", 22.0, 400.0, &evse).unwrap();
        evse.add_connector(connector);

        assert_eq!(evse.connectors().len(), 1);
        let c = &evse.connectors()[0];
        assert_eq!(c.evse_id(), evse.id());
        assert_eq!(c.evse_ocpi_id(), Some(evse.evse_id()));
    }

    #[test]
    fn remove_connector_clears_back_reference() {
        let mut evse = test_evse();
        let connector = Connector::rehydrate(
            42,
            "CHADEMO".to_string(),
            50.0,
            500.0,
            None,
            None,
            Utc::now(),
        );
        evse.add_connector(connector);

        let removed = evse.remove_connector(42).unwrap();
        assert!(evse.connectors().is_empty());
        assert_eq!(removed.evse_id(), None);
        assert_eq!(removed.evse_ocpi_id(), None);

        // absent connector is a no-op
        assert!(evse.remove_connector(42).is_none());
    }
}
