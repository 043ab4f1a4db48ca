//! In-memory repository provider for development and testing

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::domain::connector::ConnectorRepository;
use crate::domain::evse::EvseRepository;
use crate::domain::location::LocationRepository;
use crate::domain::{
    Connector, DomainError, DomainResult, Evse, Location, RepositoryProvider,
};
use crate::shared::PaginatedResult;

/// DashMap-backed stand-in for the SeaORM provider. Identity assignment and
/// the EVSE-id uniqueness guard mirror the database behavior; the `entry`
/// API gives the same one-winner semantics as the UNIQUE index under
/// concurrent inserts.
pub struct InMemoryRepositoryProvider {
    locations: DashMap<i64, Location>,
    evses: DashMap<String, Evse>,
    location_counter: AtomicI64,
    evse_counter: AtomicI64,
    connector_counter: AtomicI64,
}

impl InMemoryRepositoryProvider {
    pub fn new() -> Self {
        Self {
            locations: DashMap::new(),
            evses: DashMap::new(),
            location_counter: AtomicI64::new(1),
            evse_counter: AtomicI64::new(1),
            connector_counter: AtomicI64::new(1),
        }
    }

    fn next_connector_id(&self) -> i64 {
        self.connector_counter.fetch_add(1, Ordering::SeqCst)
    }

    /// Stores a cleared copy of `evse` under a fresh identity, failing if
    /// the OCPI identifier is already taken.
    fn store_evse(&self, evse: &Evse, location_id: i64) -> DomainResult<Evse> {
        let key = evse.evse_id().as_str().to_string();
        match self.evses.entry(key) {
            Entry::Occupied(_) => Err(DomainError::DuplicateEvseId(
                evse.evse_id().as_str().to_string(),
            )),
            Entry::Vacant(slot) => {
                let id = self.evse_counter.fetch_add(1, Ordering::SeqCst);
                let connectors = evse
                    .connectors()
                    .iter()
                    .map(|c| {
                        let connector_id = c.id().unwrap_or_else(|| self.next_connector_id());
                        Connector::rehydrate(
                            connector_id,
                            c.standard().to_string(),
                            c.power_level(),
                            c.voltage(),
                            Some(id),
                            Some(evse.evse_id().clone()),
                            c.last_updated(),
                        )
                    })
                    .collect();
                let stored = Evse::rehydrate(
                    id,
                    evse.evse_id().clone(),
                    evse.status(),
                    Some(location_id),
                    connectors,
                    evse.last_updated(),
                );
                slot.insert(stored.clone());
                Ok(stored)
            }
        }
    }

    /// Rebuilds the full aggregate: stored root plus every EVSE that points
    /// back at it, in identity order.
    fn assemble(&self, id: i64) -> Option<Location> {
        let base = self.locations.get(&id)?;
        let mut evses: Vec<Evse> = self
            .evses
            .iter()
            .filter(|e| e.location_id() == Some(id))
            .map(|e| e.value().clone())
            .collect();
        evses.sort_by_key(|e| e.id());
        Some(Location::rehydrate(
            id,
            base.name().to_string(),
            base.address().to_string(),
            base.coordinates(),
            base.business_hours(),
            evses,
            base.last_updated(),
        ))
    }
}

impl Default for InMemoryRepositoryProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LocationRepository for InMemoryRepositoryProvider {
    async fn insert(&self, location: &Location) -> DomainResult<Location> {
        let id = self.location_counter.fetch_add(1, Ordering::SeqCst);
        for owned in location.evses() {
            self.store_evse(owned, id)?;
        }
        let stored = Location::rehydrate(
            id,
            location.name().to_string(),
            location.address().to_string(),
            location.coordinates(),
            location.business_hours(),
            Vec::new(),
            location.last_updated(),
        );
        self.locations.insert(id, stored);
        self.assemble(id)
            .ok_or_else(|| DomainError::Storage("location vanished after insert".to_string()))
    }

    async fn update(&self, location: &Location) -> DomainResult<Location> {
        let id = location.id().ok_or_else(|| {
            DomainError::Storage("cannot update a Location that was never saved".to_string())
        })?;
        if !self.locations.contains_key(&id) {
            return Err(DomainError::NotFound {
                entity: "Location",
                field: "id",
                value: id.to_string(),
            });
        }
        let stored = Location::rehydrate(
            id,
            location.name().to_string(),
            location.address().to_string(),
            location.coordinates(),
            location.business_hours(),
            Vec::new(),
            location.last_updated(),
        );
        self.locations.insert(id, stored);
        self.assemble(id)
            .ok_or_else(|| DomainError::Storage("location vanished after update".to_string()))
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Location>> {
        Ok(self.assemble(id))
    }

    async fn find_updated_after(
        &self,
        after: Option<DateTime<Utc>>,
        page: u64,
        limit: u64,
    ) -> DomainResult<PaginatedResult<Location>> {
        // Collect ids first so no shard lock is held while assembling.
        let ids: Vec<i64> = self
            .locations
            .iter()
            .filter(|l| after.map_or(true, |ts| l.last_updated() > ts))
            .map(|l| *l.key())
            .collect();
        let mut matching: Vec<Location> = ids
            .into_iter()
            .filter_map(|id| self.assemble(id))
            .collect();
        matching.sort_by_key(|l| l.last_updated());

        let total = matching.len() as u64;
        let offset = (page.saturating_sub(1) * limit) as usize;
        let items: Vec<Location> = matching
            .into_iter()
            .skip(offset)
            .take(limit as usize)
            .collect();

        Ok(PaginatedResult::new(items, total, page, limit))
    }
}

#[async_trait]
impl EvseRepository for InMemoryRepositoryProvider {
    async fn insert(&self, evse: &Evse) -> DomainResult<Evse> {
        let location_id = evse.location_id().ok_or_else(|| {
            DomainError::Storage("cannot insert an EVSE without an owning Location".to_string())
        })?;
        self.store_evse(evse, location_id)
    }

    async fn update(&self, evse: &Evse) -> DomainResult<Evse> {
        let id = evse.id().ok_or_else(|| {
            DomainError::Storage("cannot update an EVSE that was never saved".to_string())
        })?;
        let key = evse.evse_id().as_str().to_string();
        let mut entry = self.evses.get_mut(&key).ok_or(DomainError::NotFound {
            entity: "EVSE",
            field: "evse_id",
            value: key.clone(),
        })?;

        let connectors = evse
            .connectors()
            .iter()
            .map(|c| {
                let connector_id = c.id().unwrap_or_else(|| self.next_connector_id());
                Connector::rehydrate(
                    connector_id,
                    c.standard().to_string(),
                    c.power_level(),
                    c.voltage(),
                    Some(id),
                    Some(evse.evse_id().clone()),
                    c.last_updated(),
                )
            })
            .collect();
        let stored = Evse::rehydrate(
            id,
            evse.evse_id().clone(),
            evse.status(),
            evse.location_id(),
            connectors,
            evse.last_updated(),
        );
        *entry = stored.clone();
        Ok(stored)
    }

    async fn find_by_evse_id(&self, evse_id: &str) -> DomainResult<Option<Evse>> {
        Ok(self.evses.get(evse_id).map(|e| e.value().clone()))
    }
}

#[async_trait]
impl ConnectorRepository for InMemoryRepositoryProvider {
    async fn insert(&self, c: &Connector) -> DomainResult<Connector> {
        let owner = c.evse_ocpi_id().ok_or_else(|| {
            DomainError::Storage("cannot insert a connector without an owning EVSE".to_string())
        })?;
        let mut entry =
            self.evses
                .get_mut(owner.as_str())
                .ok_or(DomainError::NotFound {
                    entity: "EVSE",
                    field: "evse_id",
                    value: owner.as_str().to_string(),
                })?;

        let stored = Connector::rehydrate(
            self.next_connector_id(),
            c.standard().to_string(),
            c.power_level(),
            c.voltage(),
            entry.id(),
            Some(owner.clone()),
            c.last_updated(),
        );
        entry.add_connector(stored.clone());
        Ok(stored)
    }
}

impl RepositoryProvider for InMemoryRepositoryProvider {
    fn locations(&self) -> &dyn LocationRepository {
        self
    }

    fn evses(&self) -> &dyn EvseRepository {
        self
    }

    fn connectors(&self) -> &dyn ConnectorRepository {
        self
    }
}
