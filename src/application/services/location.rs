//! Location orchestration service

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;

use crate::application::events::SharedEventBus;
use crate::domain::common::{BusinessHours, Coordinates};
use crate::domain::{DomainError, DomainResult, Location, RepositoryProvider};
use crate::shared::PaginatedResult;

/// Orchestrates Location aggregate operations: load, mutate through the
/// aggregate, save, then drain-and-publish the buffered events. Events are
/// published only after the save has succeeded.
pub struct LocationService {
    repos: Arc<dyn RepositoryProvider>,
    event_bus: SharedEventBus,
}

impl LocationService {
    pub fn new(repos: Arc<dyn RepositoryProvider>, event_bus: SharedEventBus) -> Self {
        Self { repos, event_bus }
    }

    pub async fn create_location(
        &self,
        name: &str,
        address: &str,
        coordinates: Coordinates,
        business_hours: BusinessHours,
    ) -> DomainResult<Location> {
        let mut location = Location::new(name, address, coordinates, business_hours)?;
        let saved = self.repos.locations().insert(&location).await?;

        for event in location.take_events() {
            self.event_bus.publish(event);
        }
        info!(location_id = ?saved.id(), name, "Location created");
        Ok(saved)
    }

    pub async fn update_location(
        &self,
        location_id: i64,
        name: &str,
        address: &str,
        coordinates: Coordinates,
        business_hours: BusinessHours,
    ) -> DomainResult<Location> {
        let mut location = self.load(location_id).await?;
        location.update(name, address, coordinates, business_hours)?;
        let saved = self.repos.locations().update(&location).await?;

        for event in location.take_events() {
            self.event_bus.publish(event);
        }
        info!(location_id, name, "Location updated");
        Ok(saved)
    }

    pub async fn find_location(&self, location_id: i64) -> DomainResult<Location> {
        self.load(location_id).await
    }

    /// Locations last updated after `after` (all when `None`), ascending by
    /// `last_updated`, paginated.
    pub async fn query_by_last_updated(
        &self,
        after: Option<DateTime<Utc>>,
        page: u64,
        limit: u64,
    ) -> DomainResult<PaginatedResult<Location>> {
        self.repos
            .locations()
            .find_updated_after(after, page, limit)
            .await
    }

    async fn load(&self, location_id: i64) -> DomainResult<Location> {
        self.repos
            .locations()
            .find_by_id(location_id)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "Location",
                field: "id",
                value: location_id.to_string(),
            })
    }
}
