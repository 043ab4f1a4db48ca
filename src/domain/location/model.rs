//! Location aggregate root

use chrono::{DateTime, Utc};

use crate::domain::common::{BusinessHours, Coordinates};
use crate::domain::events::{DomainEvent, LocationCreatedEvent, LocationUpdatedEvent};
use crate::domain::evse::Evse;
use crate::domain::{DomainError, DomainResult};

/// A charging site: the aggregate root for Locations, EVSEs and Connectors.
///
/// All mutation of the owned EVSEs (and through them, connectors) goes
/// through methods on this type; the collections are never handed out
/// mutably. The Location is the single consistency boundary of the system.
#[derive(Debug, Clone)]
pub struct Location {
    id: Option<i64>,
    name: String,
    address: String,
    coordinates: Coordinates,
    business_hours: BusinessHours,
    evses: Vec<Evse>,
    last_updated: DateTime<Utc>,
    events: Vec<DomainEvent>,
}

impl Location {
    /// Creates a new Location and buffers a `LocationCreated` event.
    /// `name` and `address` must be non-blank.
    pub fn new(
        name: &str,
        address: &str,
        coordinates: Coordinates,
        business_hours: BusinessHours,
    ) -> DomainResult<Self> {
        validate_name_and_address(name, address)?;

        let mut location = Self {
            id: None,
            name: name.to_string(),
            address: address.to_string(),
            coordinates,
            business_hours,
            evses: Vec::new(),
            last_updated: Utc::now(),
            events: Vec::new(),
        };

        location.events.push(DomainEvent::LocationCreated(
            LocationCreatedEvent::new(location.id, &location.name, &location.address),
        ));

        Ok(location)
    }

    /// Rebuilds a persisted Location. No validation, no events.
    pub(crate) fn rehydrate(
        id: i64,
        name: String,
        address: String,
        coordinates: Coordinates,
        business_hours: BusinessHours,
        evses: Vec<Evse>,
        last_updated: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Some(id),
            name,
            address,
            coordinates,
            business_hours,
            evses,
            last_updated,
            events: Vec::new(),
        }
    }

    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn coordinates(&self) -> Coordinates {
        self.coordinates
    }

    pub fn business_hours(&self) -> BusinessHours {
        self.business_hours
    }

    /// Read-only view of the owned EVSEs, in insertion order.
    pub fn evses(&self) -> &[Evse] {
        &self.evses
    }

    pub fn last_updated(&self) -> DateTime<Utc> {
        self.last_updated
    }

    /// Replaces all four mutable fields unconditionally (full update, not a
    /// merge), refreshes `last_updated` and buffers a `LocationUpdated`
    /// event. Fails without mutating if `name` or `address` is blank.
    pub fn update(
        &mut self,
        name: &str,
        address: &str,
        coordinates: Coordinates,
        business_hours: BusinessHours,
    ) -> DomainResult<()> {
        validate_name_and_address(name, address)?;

        self.name = name.to_string();
        self.address = address.to_string();
        self.coordinates = coordinates;
        self.business_hours = business_hours;
        self.last_updated = Utc::now();

        self.events.push(DomainEvent::LocationUpdated(
            LocationUpdatedEvent::new(self.id, &self.name, &self.address),
        ));

        Ok(())
    }

    /// Adds an EVSE to this Location, setting its back-reference.
    pub fn add_evse(&mut self, mut evse: Evse) {
        evse.set_owner(self.id);
        self.evses.push(evse);
    }

    /// Removes the EVSE with the given OCPI identifier, clearing its
    /// back-reference. Returns `None` (and changes nothing) if no owned
    /// EVSE carries that identifier.
    pub fn remove_evse(&mut self, evse_ocpi_id: &str) -> Option<Evse> {
        let pos = self
            .evses
            .iter()
            .position(|e| e.evse_id().as_str() == evse_ocpi_id)?;
        let mut evse = self.evses.remove(pos);
        evse.clear_owner();
        Some(evse)
    }

    /// Drains the buffered events, leaving the buffer empty.
    pub fn take_events(&mut self) -> Vec<DomainEvent> {
        std::mem::take(&mut self.events)
    }
}

fn validate_name_and_address(name: &str, address: &str) -> DomainResult<()> {
    if name.trim().is_empty() {
        return Err(DomainError::Validation(
            "Location name cannot be blank".to_string(),
        ));
    }
    if address.trim().is_empty() {
        return Err(DomainError::Validation(
            "Location address cannot be blank".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::evse::EvseId;
    use chrono::NaiveTime;

    fn hours() -> BusinessHours {
        BusinessHours::new(
            NaiveTime::from_hms_opt(6, 30, 0).unwrap(),
            NaiveTime::from_hms_opt(22, 0, 0).unwrap(),
        )
    }

    fn sample_location() -> Location {
        Location::new(
            "Central Hub",
            "12 Dam Square, Amsterdam",
            Coordinates::new(52.373, 4.892).unwrap(),
            hours(),
        )
        .unwrap()
    }

    #[test]
    fn creation_buffers_location_created_event() {
        let mut location = sample_location();
        let events = location.take_events();
        assert_eq!(events.len(), 1);
        match &events[0] {
            DomainEvent::LocationCreated(e) => {
                assert_eq!(e.location_id, None);
                assert_eq!(e.name, "Central Hub");
                assert_eq!(e.address, "12 Dam Square, Amsterdam");
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[test]
    fn creation_rejects_blank_name_and_address() {
        let coordinates = Coordinates::new(0.0, 0.0).unwrap();
        assert!(Location::new("", "addr", coordinates, hours()).is_err());
        assert!(Location::new("   ", "addr", coordinates, hours()).is_err());
        assert!(Location::new("name", "", coordinates, hours()).is_err());
    }

    #[test]
    fn update_replaces_every_field() {
        let mut location = sample_location();
        location.take_events();
        let before = location.last_updated();

        let new_coordinates = Coordinates::new(48.858, 2.294).unwrap();
        let new_hours = BusinessHours::new(
            NaiveTime::from_hms_opt(0, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(23, 59, 0).unwrap(),
        );
        location
            .update("Paris Hub", "5 Av. Anatole", new_coordinates, new_hours)
            .unwrap();

        assert_eq!(location.name(), "Paris Hub");
        assert_eq!(location.address(), "5 Av. Anatole");
        assert_eq!(location.coordinates(), new_coordinates);
        assert_eq!(location.business_hours(), new_hours);
        assert!(location.last_updated() >= before);

        let events = location.take_events();
        assert_eq!(events.len(), 1);
        match &events[0] {
            DomainEvent::LocationUpdated(e) => {
                assert_eq!(e.name, "Paris Hub");
                assert_eq!(e.address, "5 Av. Anatole");
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[test]
    fn failed_update_leaves_state_and_buffer_untouched() {
        let mut location = sample_location();
        location.take_events();

        let coordinates = location.coordinates();
        let result = location.update("", "still an address", coordinates, hours());
        assert!(result.is_err());
        assert_eq!(location.name(), "Central Hub");
        assert!(location.take_events().is_empty());
    }

    #[test]
    fn add_and_remove_evse_maintain_back_reference() {
        let mut location = Location::rehydrate(
            3,
            "Site".to_string(),
            "Addr".to_string(),
            Coordinates::new(1.0, 2.0).unwrap(),
            hours(),
            Vec::new(),
            Utc::now(),
        );

        let evse = Evse::new(EvseId::new("NL*TNM*001").unwrap(), &location);
        location.add_evse(evse);
        assert_eq!(location.evses().len(), 1);
        assert_eq!(location.evses()[0].location_id(), Some(3));

        let removed = location.remove_evse("NL*TNM*001").unwrap();
        assert!(location.evses().is_empty());
        assert_eq!(removed.location_id(), None);

        assert!(location.remove_evse("NL*TNM*001").is_none());
    }

    #[test]
    fn events_drain_in_append_order() {
        let mut location = sample_location();
        let coordinates = location.coordinates();
        location
            .update("Renamed", "New address", coordinates, hours())
            .unwrap();

        let events = location.take_events();
        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], DomainEvent::LocationCreated(_)));
        assert!(matches!(events[1], DomainEvent::LocationUpdated(_)));
    }
}
