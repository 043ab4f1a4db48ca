//! Connector entity

pub mod model;
pub mod repository;

pub use model::Connector;
pub use repository::ConnectorRepository;
