//! # eMSP Locations
//!
//! e-Mobility Service Provider backend for managing charging locations,
//! EVSEs and their connectors.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: Aggregates, value objects, domain events and repository traits
//! - **application**: Orchestration services and the event bus
//! - **infrastructure**: SeaORM persistence and the in-memory provider
//! - **interfaces**: REST API with Swagger documentation
//! - **shared**: Pagination and request validation helpers

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod shared;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig, SeaOrmRepositoryProvider};

// Re-export API router
pub use interfaces::create_api_router;

// Re-export event plumbing
pub use application::{create_event_bus, EventBus, SharedEventBus};
