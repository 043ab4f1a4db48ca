//! EVSE entity, identifier value object and status state machine

pub mod evse_id;
pub mod model;
pub mod repository;
pub mod status;

pub use evse_id::EvseId;
pub use model::Evse;
pub use repository::EvseRepository;
pub use status::EvseStatus;
