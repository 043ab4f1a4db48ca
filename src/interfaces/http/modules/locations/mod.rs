//! Location endpoints

pub mod dto;
pub mod handlers;

pub use dto::{LocationDto, LocationQuery, LocationRequest};
