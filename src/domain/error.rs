//! Domain errors

use thiserror::Error;

use crate::domain::evse::EvseStatus;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {entity} with {field}={value}")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("Invalid EVSE ID format: {0}. Expected CC*PID*LocalID (e.g. US*ABC*EVSE123)")]
    InvalidEvseIdFormat(String),

    #[error(
        "Invalid EVSE status transition from {} to {to} for EVSE ID {evse_id}",
        .from.map(|s| s.to_string()).unwrap_or_else(|| "INITIAL".to_string())
    )]
    InvalidStatusTransition {
        from: Option<EvseStatus>,
        to: EvseStatus,
        evse_id: String,
    },

    #[error("EVSE with ID {0} already exists")]
    DuplicateEvseId(String),

    #[error("Validation: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
