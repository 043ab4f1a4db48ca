//! Location repository interface

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::DomainResult;
use crate::shared::PaginatedResult;

use super::Location;

#[async_trait]
pub trait LocationRepository: Send + Sync {
    /// Persists a new Location (and any owned EVSEs/connectors) atomically,
    /// returning the stored aggregate with identities assigned.
    async fn insert(&self, location: &Location) -> DomainResult<Location>;

    /// Persists changes to an existing Location's own fields.
    async fn update(&self, location: &Location) -> DomainResult<Location>;

    /// Loads the full aggregate: the Location, its EVSEs and their connectors.
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Location>>;

    /// Locations last updated strictly after `after` (all locations when
    /// `None`), ascending by `last_updated`, paginated. `page` is 1-based.
    async fn find_updated_after(
        &self,
        after: Option<DateTime<Utc>>,
        page: u64,
        limit: u64,
    ) -> DomainResult<PaginatedResult<Location>>;
}
