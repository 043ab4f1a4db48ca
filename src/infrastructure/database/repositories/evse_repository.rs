//! SeaORM implementation of EvseRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    QueryFilter, Set, SqlErr, TransactionTrait,
};

use crate::domain::evse::EvseRepository;
use crate::domain::{DomainError, DomainResult, Evse};
use crate::infrastructure::database::entities::{connector, evse};

use super::convert::{db_err, load_evse};

pub struct SeaOrmEvseRepository {
    db: DatabaseConnection,
}

impl SeaOrmEvseRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// The UNIQUE index on the OCPI identifier is the authoritative uniqueness
/// guard; its violation surfaces as `DuplicateEvseId` exactly like the
/// application-level pre-check.
fn insert_err(evse_id_text: &str, e: sea_orm::DbErr) -> DomainError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            DomainError::DuplicateEvseId(evse_id_text.to_string())
        }
        _ => db_err(e),
    }
}

#[async_trait]
impl EvseRepository for SeaOrmEvseRepository {
    async fn insert(&self, evse: &Evse) -> DomainResult<Evse> {
        let location_id = evse.location_id().ok_or_else(|| {
            DomainError::Storage("cannot insert an EVSE without an owning Location".to_string())
        })?;

        let txn = self.db.begin().await.map_err(db_err)?;

        let model = evse::ActiveModel {
            id: NotSet,
            evse_id_text: Set(evse.evse_id().as_str().to_string()),
            status: Set(evse.status().to_string()),
            location_id: Set(location_id),
            last_updated: Set(evse.last_updated()),
        }
        .insert(&txn)
        .await
        .map_err(|e| insert_err(evse.evse_id().as_str(), e))?;

        for c in evse.connectors() {
            connector::ActiveModel {
                id: NotSet,
                evse_id: Set(model.id),
                standard: Set(c.standard().to_string()),
                power_level: Set(c.power_level()),
                voltage: Set(c.voltage()),
                last_updated: Set(c.last_updated()),
            }
            .insert(&txn)
            .await
            .map_err(db_err)?;
        }

        txn.commit().await.map_err(db_err)?;

        load_evse(&self.db, model).await
    }

    async fn update(&self, evse: &Evse) -> DomainResult<Evse> {
        let id = evse.id().ok_or_else(|| {
            DomainError::Storage("cannot update an EVSE that was never saved".to_string())
        })?;

        let model = evse::ActiveModel {
            id: Set(id),
            evse_id_text: Set(evse.evse_id().as_str().to_string()),
            status: Set(evse.status().to_string()),
            location_id: Set(evse.location_id().ok_or_else(|| {
                DomainError::Storage("cannot update an EVSE without an owning Location".to_string())
            })?),
            last_updated: Set(evse.last_updated()),
        }
        .update(&self.db)
        .await
        .map_err(db_err)?;

        load_evse(&self.db, model).await
    }

    async fn find_by_evse_id(&self, evse_id: &str) -> DomainResult<Option<Evse>> {
        let Some(model) = evse::Entity::find()
            .filter(evse::Column::EvseIdText.eq(evse_id))
            .one(&self.db)
            .await
            .map_err(db_err)?
        else {
            return Ok(None);
        };
        load_evse(&self.db, model).await.map(Some)
    }
}
