//! SeaORM entity models

pub mod connector;
pub mod evse;
pub mod location;
