//! Domain events
//!
//! Event types that record facts about aggregate state changes. The
//! `EventBus` implementation lives in `application::events`.

pub mod types;

pub use types::{
    ConnectorAddedEvent, DomainEvent, EvseAddedEvent, EvseStatusChangedEvent,
    LocationCreatedEvent, LocationUpdatedEvent,
};
