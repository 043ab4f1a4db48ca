//! Domain layer: entities, value objects, status rules, events and
//! repository interfaces for the Location aggregate.

pub mod common;
pub mod connector;
pub mod error;
pub mod events;
pub mod evse;
pub mod location;
pub mod repositories;

pub use common::{BusinessHours, Coordinates};
pub use connector::Connector;
pub use error::{DomainError, DomainResult};
pub use events::DomainEvent;
pub use evse::{Evse, EvseId, EvseStatus};
pub use location::Location;
pub use repositories::RepositoryProvider;
