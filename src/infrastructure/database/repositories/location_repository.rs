//! SeaORM implementation of LocationRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

use crate::domain::location::LocationRepository;
use crate::domain::{DomainError, DomainResult, Location};
use crate::infrastructure::database::entities::{connector, evse, location};
use crate::shared::PaginatedResult;

use super::convert::{db_err, load_evses, location_from_model};

pub struct SeaOrmLocationRepository {
    db: DatabaseConnection,
}

impl SeaOrmLocationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn load(&self, id: i64) -> DomainResult<Option<Location>> {
        let Some(model) = location::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?
        else {
            return Ok(None);
        };
        let evses = load_evses(&self.db, model.id).await?;
        location_from_model(model, evses).map(Some)
    }
}

#[async_trait]
impl LocationRepository for SeaOrmLocationRepository {
    async fn insert(&self, location: &Location) -> DomainResult<Location> {
        // One transaction for the root and any owned rows: either the whole
        // aggregate is committed or nothing is.
        let txn = self.db.begin().await.map_err(db_err)?;

        let model = location::ActiveModel {
            id: NotSet,
            name: Set(location.name().to_string()),
            address: Set(location.address().to_string()),
            latitude: Set(location.coordinates().latitude()),
            longitude: Set(location.coordinates().longitude()),
            opens_at: Set(location.business_hours().opens_at()),
            closes_at: Set(location.business_hours().closes_at()),
            last_updated: Set(location.last_updated()),
        }
        .insert(&txn)
        .await
        .map_err(db_err)?;

        for owned in location.evses() {
            let evse_model = evse::ActiveModel {
                id: NotSet,
                evse_id_text: Set(owned.evse_id().as_str().to_string()),
                status: Set(owned.status().to_string()),
                location_id: Set(model.id),
                last_updated: Set(owned.last_updated()),
            }
            .insert(&txn)
            .await
            .map_err(db_err)?;

            for c in owned.connectors() {
                connector::ActiveModel {
                    id: NotSet,
                    evse_id: Set(evse_model.id),
                    standard: Set(c.standard().to_string()),
                    power_level: Set(c.power_level()),
                    voltage: Set(c.voltage()),
                    last_updated: Set(c.last_updated()),
                }
                .insert(&txn)
                .await
                .map_err(db_err)?;
            }
        }

        txn.commit().await.map_err(db_err)?;

        self.load(model.id).await?.ok_or_else(|| {
            DomainError::Storage(format!("Location {} vanished after insert", model.id))
        })
    }

    async fn update(&self, location: &Location) -> DomainResult<Location> {
        let id = location.id().ok_or_else(|| {
            DomainError::Storage("cannot update a Location that was never saved".to_string())
        })?;

        location::ActiveModel {
            id: Set(id),
            name: Set(location.name().to_string()),
            address: Set(location.address().to_string()),
            latitude: Set(location.coordinates().latitude()),
            longitude: Set(location.coordinates().longitude()),
            opens_at: Set(location.business_hours().opens_at()),
            closes_at: Set(location.business_hours().closes_at()),
            last_updated: Set(location.last_updated()),
        }
        .update(&self.db)
        .await
        .map_err(db_err)?;

        self.load(id)
            .await?
            .ok_or_else(|| DomainError::Storage(format!("Location {} vanished after update", id)))
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Location>> {
        self.load(id).await
    }

    async fn find_updated_after(
        &self,
        after: Option<DateTime<Utc>>,
        page: u64,
        limit: u64,
    ) -> DomainResult<PaginatedResult<Location>> {
        let mut query = location::Entity::find();
        if let Some(after) = after {
            query = query.filter(location::Column::LastUpdated.gt(after));
        }
        let paginator = query
            .order_by_asc(location::Column::LastUpdated)
            .paginate(&self.db, limit);

        let total = paginator.num_items().await.map_err(db_err)?;
        let models = paginator
            .fetch_page(page.saturating_sub(1))
            .await
            .map_err(db_err)?;

        let mut items = Vec::with_capacity(models.len());
        for model in models {
            let evses = load_evses(&self.db, model.id).await?;
            items.push(location_from_model(model, evses)?);
        }

        Ok(PaginatedResult::new(items, total, page, limit))
    }
}
