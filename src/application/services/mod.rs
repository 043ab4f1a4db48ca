//! Orchestration services for the Location, EVSE and Connector operations.

pub mod connector;
pub mod evse;
pub mod location;

pub use connector::ConnectorService;
pub use evse::EvseService;
pub use location::LocationService;

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::NaiveTime;

    use super::*;
    use crate::application::events::create_event_bus;
    use crate::domain::common::{BusinessHours, Coordinates};
    use crate::domain::{DomainError, EvseStatus, Location, RepositoryProvider};
    use crate::infrastructure::InMemoryRepositoryProvider;

    fn opening_hours() -> BusinessHours {
        BusinessHours::new(
            NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(22, 0, 0).unwrap(),
        )
    }

    struct Fixture {
        locations: LocationService,
        evses: EvseService,
        connectors: ConnectorService,
        bus: crate::application::events::SharedEventBus,
    }

    fn fixture() -> Fixture {
        let repos: Arc<dyn RepositoryProvider> = Arc::new(InMemoryRepositoryProvider::new());
        let bus = create_event_bus();
        Fixture {
            locations: LocationService::new(repos.clone(), bus.clone()),
            evses: EvseService::new(repos.clone(), bus.clone()),
            connectors: ConnectorService::new(repos, bus.clone()),
            bus,
        }
    }

    async fn seed_location(fx: &Fixture) -> Location {
        fx.locations
            .create_location(
                "Central Garage",
                "1 Main St, Springfield",
                Coordinates::new(52.52, 13.405).unwrap(),
                opening_hours(),
            )
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn create_location_assigns_identity_and_publishes_event() {
        let fx = fixture();
        let mut sub = fx.bus.subscribe();

        let saved = seed_location(&fx).await;

        assert!(saved.id().is_some());
        let event = sub.try_recv().unwrap();
        assert_eq!(event.event_type(), "location_created");
        assert!(sub.try_recv().is_none());
    }

    #[tokio::test]
    async fn update_of_missing_location_is_not_found() {
        let fx = fixture();
        let err = fx
            .locations
            .update_location(
                999,
                "Nowhere",
                "0 Void Rd",
                Coordinates::new(0.0, 0.0).unwrap(),
                opening_hours(),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { entity: "Location", .. }));
    }

    #[tokio::test]
    async fn duplicate_evse_id_is_rejected_across_locations() {
        let fx = fixture();
        let first = seed_location(&fx).await;
        let second = fx
            .locations
            .create_location(
                "North Lot",
                "9 Ring Rd, Springfield",
                Coordinates::new(52.53, 13.41).unwrap(),
                opening_hours(),
            )
            .await
            .unwrap();

        fx.evses
            .add_evse_to_location(first.id().unwrap(), "US*ABC*EVSE123")
            .await
            .unwrap();

        let err = fx
            .evses
            .add_evse_to_location(second.id().unwrap(), "US*ABC*EVSE123")
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::DuplicateEvseId(_)));
    }

    #[tokio::test]
    async fn malformed_evse_id_is_rejected_before_storage() {
        let fx = fixture();
        let location = seed_location(&fx).await;

        let err = fx
            .evses
            .add_evse_to_location(location.id().unwrap(), "us*abc*evse1")
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidEvseIdFormat(_)));

        let missing = fx.evses.find_by_evse_id("us*abc*evse1").await;
        assert!(missing.is_err());
    }

    #[tokio::test]
    async fn new_evse_starts_available_and_is_findable() {
        let fx = fixture();
        let location = seed_location(&fx).await;

        let saved = fx
            .evses
            .add_evse_to_location(location.id().unwrap(), "DE*BER*STATION01")
            .await
            .unwrap();
        assert_eq!(saved.status(), EvseStatus::Available);
        assert_eq!(saved.location_id(), location.id());

        let found = fx.evses.find_by_evse_id("DE*BER*STATION01").await.unwrap();
        assert_eq!(found.id(), saved.id());
    }

    #[tokio::test]
    async fn rejected_status_change_leaves_stored_state_untouched() {
        let fx = fixture();
        let location = seed_location(&fx).await;
        fx.evses
            .add_evse_to_location(location.id().unwrap(), "NL*AMS*P1")
            .await
            .unwrap();

        fx.evses
            .change_evse_status("NL*AMS*P1", EvseStatus::Blocked)
            .await
            .unwrap();

        // Blocked may only return to Available.
        let err = fx
            .evses
            .change_evse_status("NL*AMS*P1", EvseStatus::Inoperative)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidStatusTransition { .. }));

        let stored = fx.evses.find_by_evse_id("NL*AMS*P1").await.unwrap();
        assert_eq!(stored.status(), EvseStatus::Blocked);
    }

    #[tokio::test]
    async fn events_are_published_only_after_successful_save() {
        let fx = fixture();
        let location = seed_location(&fx).await;
        fx.evses
            .add_evse_to_location(location.id().unwrap(), "FR*PAR*A7")
            .await
            .unwrap();

        let mut sub = fx.bus.subscribe();
        let err = fx
            .evses
            .change_evse_status("FR*PAR*A7", EvseStatus::Removed)
            .await;
        assert!(err.is_ok());
        assert_eq!(sub.try_recv().unwrap().event_type(), "evse_status_changed");

        // A failed transition publishes nothing.
        let _ = fx
            .evses
            .change_evse_status("FR*PAR*A7", EvseStatus::Available)
            .await
            .unwrap_err();
        assert!(sub.try_recv().is_none());
    }

    #[tokio::test]
    async fn connector_lands_on_its_evse() {
        let fx = fixture();
        let location = seed_location(&fx).await;
        fx.evses
            .add_evse_to_location(location.id().unwrap(), "GB*LON*BAY4")
            .await
            .unwrap();

        let mut sub = fx.bus.subscribe();
        let connector = fx
            .connectors
            .add_connector_to_evse("GB*LON*BAY4", "IEC_62196_T2", 22.0, 400.0)
            .await
            .unwrap();
        assert!(connector.id().is_some());
        assert_eq!(sub.try_recv().unwrap().event_type(), "connector_added");

        let evse = fx.evses.find_by_evse_id("GB*LON*BAY4").await.unwrap();
        assert_eq!(evse.connectors().len(), 1);
        assert_eq!(evse.connectors()[0].standard(), "IEC_62196_T2");
    }

    #[tokio::test]
    async fn connector_on_missing_evse_is_not_found() {
        let fx = fixture();
        let err = fx
            .connectors
            .add_connector_to_evse("SE*STO*GHOST", "CHADEMO", 50.0, 500.0)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { entity: "EVSE", .. }));
    }

    /// The end-to-end walk through the published status rules: a fresh EVSE
    /// is Available, blocking it succeeds, a Blocked unit cannot go straight
    /// to Inoperative, and Removed is reachable from anywhere.
    #[tokio::test]
    async fn full_lifecycle_scenario() {
        let fx = fixture();
        let location = seed_location(&fx).await;

        let evse = fx
            .evses
            .add_evse_to_location(location.id().unwrap(), "US*ABC*EVSE123")
            .await
            .unwrap();
        assert_eq!(evse.status(), EvseStatus::Available);

        let blocked = fx
            .evses
            .change_evse_status("US*ABC*EVSE123", EvseStatus::Blocked)
            .await
            .unwrap();
        assert_eq!(blocked.status(), EvseStatus::Blocked);

        assert!(fx
            .evses
            .change_evse_status("US*ABC*EVSE123", EvseStatus::Inoperative)
            .await
            .is_err());
        assert_eq!(
            fx.evses
                .find_by_evse_id("US*ABC*EVSE123")
                .await
                .unwrap()
                .status(),
            EvseStatus::Blocked
        );

        let removed = fx
            .evses
            .change_evse_status("US*ABC*EVSE123", EvseStatus::Removed)
            .await
            .unwrap();
        assert_eq!(removed.status(), EvseStatus::Removed);
    }

    #[tokio::test]
    async fn query_by_last_updated_filters_and_paginates() {
        let fx = fixture();
        let first = seed_location(&fx).await;
        let cutoff = first.last_updated();

        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        fx.locations
            .create_location(
                "East Hub",
                "4 Harbor Way",
                Coordinates::new(48.85, 2.35).unwrap(),
                opening_hours(),
            )
            .await
            .unwrap();

        let all = fx
            .locations
            .query_by_last_updated(None, 1, 20)
            .await
            .unwrap();
        assert_eq!(all.total, 2);

        let recent = fx
            .locations
            .query_by_last_updated(Some(cutoff), 1, 20)
            .await
            .unwrap();
        assert_eq!(recent.total, 1);
        assert_eq!(recent.items[0].name(), "East Hub");

        let page_two = fx
            .locations
            .query_by_last_updated(None, 2, 1)
            .await
            .unwrap();
        assert_eq!(page_two.total, 2);
        assert_eq!(page_two.items.len(), 1);
        assert_eq!(page_two.total_pages, 2);
    }
}
