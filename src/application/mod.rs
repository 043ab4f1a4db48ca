//! Application layer: orchestration services and event dispatch

pub mod events;
pub mod services;

pub use events::{create_event_bus, EventBus, SharedEventBus};
pub use services::{ConnectorService, EvseService, LocationService};
