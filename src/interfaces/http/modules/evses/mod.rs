//! EVSE and connector endpoints

pub mod dto;
pub mod handlers;

pub use dto::{ConnectorDto, CreateConnectorRequest, CreateEvseRequest, EvseDto, UpdateEvseStatusRequest};
