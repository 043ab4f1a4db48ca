//! Model ⇄ domain conversion and aggregate loading helpers shared by the
//! SeaORM repositories

use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};

use crate::domain::common::{BusinessHours, Coordinates};
use crate::domain::{Connector, DomainError, DomainResult, Evse, EvseId, EvseStatus, Location};
use crate::infrastructure::database::entities::{connector, evse, location};

pub(super) fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Storage(e.to_string())
}

pub(super) fn location_from_model(
    model: location::Model,
    evses: Vec<Evse>,
) -> DomainResult<Location> {
    let coordinates = Coordinates::new(model.latitude, model.longitude)?;
    let business_hours = BusinessHours::new(model.opens_at, model.closes_at);
    Ok(Location::rehydrate(
        model.id,
        model.name,
        model.address,
        coordinates,
        business_hours,
        evses,
        model.last_updated,
    ))
}

pub(super) fn evse_from_model(
    model: evse::Model,
    connector_models: Vec<connector::Model>,
) -> DomainResult<Evse> {
    let evse_id = EvseId::new(&model.evse_id_text)?;
    let status: EvseStatus = model.status.parse()?;
    let connectors = connector_models
        .into_iter()
        .map(|c| connector_from_model(c, &evse_id))
        .collect();
    Ok(Evse::rehydrate(
        model.id,
        evse_id,
        status,
        Some(model.location_id),
        connectors,
        model.last_updated,
    ))
}

pub(super) fn connector_from_model(model: connector::Model, owner: &EvseId) -> Connector {
    Connector::rehydrate(
        model.id,
        model.standard,
        model.power_level,
        model.voltage,
        Some(model.evse_id),
        Some(owner.clone()),
        model.last_updated,
    )
}

/// Loads one EVSE with its connectors in insertion order.
pub(super) async fn load_evse<C: ConnectionTrait>(
    db: &C,
    model: evse::Model,
) -> DomainResult<Evse> {
    let connectors = connector::Entity::find()
        .filter(connector::Column::EvseId.eq(model.id))
        .order_by_asc(connector::Column::Id)
        .all(db)
        .await
        .map_err(db_err)?;
    evse_from_model(model, connectors)
}

/// Loads all EVSEs (with connectors) belonging to a location, in insertion
/// order.
pub(super) async fn load_evses<C: ConnectionTrait>(
    db: &C,
    location_id: i64,
) -> DomainResult<Vec<Evse>> {
    let models = evse::Entity::find()
        .filter(evse::Column::LocationId.eq(location_id))
        .order_by_asc(evse::Column::Id)
        .all(db)
        .await
        .map_err(db_err)?;

    let mut evses = Vec::with_capacity(models.len());
    for model in models {
        evses.push(load_evse(db, model).await?);
    }
    Ok(evses)
}
