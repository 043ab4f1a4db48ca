//! HTTP endpoint modules

pub mod evses;
pub mod health;
pub mod locations;

use std::sync::Arc;

use crate::application::{ConnectorService, EvseService, LocationService};

/// Shared handler state: the three orchestration services.
#[derive(Clone)]
pub struct AppState {
    pub locations: Arc<LocationService>,
    pub evses: Arc<EvseService>,
    pub connectors: Arc<ConnectorService>,
}
