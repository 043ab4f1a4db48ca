//! SeaORM implementation of ConnectorRepository

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, DatabaseConnection, Set};

use crate::domain::connector::ConnectorRepository;
use crate::domain::{Connector, DomainError, DomainResult};
use crate::infrastructure::database::entities::connector;

use super::convert::{connector_from_model, db_err};

pub struct SeaOrmConnectorRepository {
    db: DatabaseConnection,
}

impl SeaOrmConnectorRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ConnectorRepository for SeaOrmConnectorRepository {
    async fn insert(&self, c: &Connector) -> DomainResult<Connector> {
        let evse_id = c.evse_id().ok_or_else(|| {
            DomainError::Storage("cannot insert a connector without an owning EVSE".to_string())
        })?;
        let owner = c.evse_ocpi_id().cloned().ok_or_else(|| {
            DomainError::Storage("cannot insert a connector without an owning EVSE".to_string())
        })?;

        let model = connector::ActiveModel {
            id: NotSet,
            evse_id: Set(evse_id),
            standard: Set(c.standard().to_string()),
            power_level: Set(c.power_level()),
            voltage: Set(c.voltage()),
            last_updated: Set(c.last_updated()),
        }
        .insert(&self.db)
        .await
        .map_err(db_err)?;

        Ok(connector_from_model(model, &owner))
    }
}
