//! EVSE and connector API DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::{Connector, Evse};

/// An EVSE with its connectors.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EvseDto {
    pub id: Option<i64>,
    /// OCPI identifier, e.g. `US*ABC*EVSE123`
    pub evse_id: String,
    /// `AVAILABLE`, `BLOCKED`, `INOPERATIVE` or `REMOVED`
    pub status: String,
    pub location_id: Option<i64>,
    pub connectors: Vec<ConnectorDto>,
    pub last_updated: DateTime<Utc>,
}

impl EvseDto {
    pub fn from_domain(evse: Evse) -> Self {
        Self {
            id: evse.id(),
            evse_id: evse.evse_id().as_str().to_string(),
            status: evse.status().to_string(),
            location_id: evse.location_id(),
            connectors: evse
                .connectors()
                .iter()
                .map(|c| ConnectorDto::from_domain(c.clone()))
                .collect(),
            last_updated: evse.last_updated(),
        }
    }
}

/// A physical connector on an EVSE.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ConnectorDto {
    pub id: Option<i64>,
    /// Connector standard, e.g. `IEC_62196_T2`
    pub standard: String,
    /// Maximum power in kW
    pub power_level: f64,
    /// Voltage in V
    pub voltage: f64,
    pub evse_id: Option<i64>,
    pub last_updated: DateTime<Utc>,
}

impl ConnectorDto {
    pub fn from_domain(connector: Connector) -> Self {
        Self {
            id: connector.id(),
            standard: connector.standard().to_string(),
            power_level: connector.power_level(),
            voltage: connector.voltage(),
            evse_id: connector.evse_id(),
            last_updated: connector.last_updated(),
        }
    }
}

/// Request body for attaching an EVSE to a location.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateEvseRequest {
    /// OCPI identifier, `CC*OOO*local` (format checked by the domain)
    #[validate(length(min = 1, max = 40, message = "must be 1-40 characters"))]
    pub evse_id: String,
}

/// Request body for an EVSE status change.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateEvseStatusRequest {
    /// Target status: `AVAILABLE`, `BLOCKED`, `INOPERATIVE` or `REMOVED`
    #[validate(length(min = 1, message = "must not be empty"))]
    pub status: String,
}

/// Request body for attaching a connector to an EVSE.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateConnectorRequest {
    #[validate(length(min = 1, max = 64, message = "must be 1-64 characters"))]
    pub standard: String,
    /// Maximum power in kW, positive
    #[validate(range(min = 0.001, message = "must be positive"))]
    pub power_level: f64,
    /// Voltage in V, positive
    #[validate(range(min = 0.001, message = "must be positive"))]
    pub voltage: f64,
}
