//! Application-side event plumbing
//!
//! Event types are defined in `domain::events`; the broadcast `EventBus`
//! and the logging subscriber live here.

pub mod event_bus;
pub mod logger;

pub use event_bus::{create_event_bus, EventBus, EventSubscriber, SharedEventBus};
pub use logger::spawn_event_logger;
