//! Location API DTOs

use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::domain::Location;
use crate::interfaces::http::modules::evses::dto::EvseDto;

/// A charging location with its EVSEs.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LocationDto {
    pub id: Option<i64>,
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Daily opening time, `HH:MM:SS`
    pub opens_at: NaiveTime,
    /// Daily closing time, `HH:MM:SS`
    pub closes_at: NaiveTime,
    pub evses: Vec<EvseDto>,
    pub last_updated: DateTime<Utc>,
}

impl LocationDto {
    pub fn from_domain(location: Location) -> Self {
        let coordinates = location.coordinates();
        let hours = location.business_hours();
        Self {
            id: location.id(),
            name: location.name().to_string(),
            address: location.address().to_string(),
            latitude: coordinates.latitude(),
            longitude: coordinates.longitude(),
            opens_at: hours.opens_at(),
            closes_at: hours.closes_at(),
            evses: location
                .evses()
                .iter()
                .map(|e| EvseDto::from_domain(e.clone()))
                .collect(),
            last_updated: location.last_updated(),
        }
    }
}

/// Request body for creating or fully replacing a location.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LocationRequest {
    #[validate(length(min = 1, max = 255, message = "must be 1-255 characters"))]
    pub name: String,
    #[validate(length(min = 1, max = 512, message = "must be 1-512 characters"))]
    pub address: String,
    #[validate(range(min = -90.0, max = 90.0, message = "must be between -90 and 90"))]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0, message = "must be between -180 and 180"))]
    pub longitude: f64,
    /// Daily opening time, `HH:MM:SS`
    pub opens_at: NaiveTime,
    /// Daily closing time, `HH:MM:SS`
    pub closes_at: NaiveTime,
}

/// Query parameters for the location list endpoint.
#[derive(Debug, Deserialize, IntoParams)]
pub struct LocationQuery {
    /// Only locations updated strictly after this instant (RFC 3339)
    pub last_updated: Option<DateTime<Utc>>,
    /// Page number, 1-based. Default: 1
    pub page: Option<u64>,
    /// Page size (1-100). Default: 20
    pub size: Option<u64>,
}
