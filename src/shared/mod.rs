pub mod pagination;
pub mod validations;

pub use pagination::*;
pub use validations::*;
