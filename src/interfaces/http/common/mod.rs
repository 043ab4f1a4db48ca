//! Common API envelope types shared by every endpoint

pub mod validated_json;

use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::DomainError;
use crate::shared::PaginatedResult;

pub use validated_json::ValidatedJson;

/// Standard API response wrapper.
///
/// Every REST endpoint returns its payload in this envelope.
/// On success: `{"success": true, "data": {...}}`,
/// on failure: `{"success": false, "error": "description"}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// `true` when the request succeeded
    pub success: bool,
    /// Payload. `null` on failure
    pub data: Option<T>,
    /// Error description. `null` on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Paginated response envelope.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PaginatedResponse<T> {
    /// Items on the current page
    pub items: Vec<T>,
    /// Total number of items across all pages
    pub total: u64,
    /// Current page (1-based)
    pub page: u64,
    /// Page size
    pub limit: u64,
    /// Total number of pages
    pub total_pages: u64,
}

impl<T> PaginatedResponse<T> {
    pub fn from_result<S>(result: PaginatedResult<S>, f: impl FnMut(S) -> T) -> Self {
        Self {
            items: result.items.into_iter().map(f).collect(),
            total: result.total,
            page: result.page,
            limit: result.limit,
            total_pages: result.total_pages,
        }
    }
}

/// Maps a domain error onto an HTTP status plus error envelope.
///
/// Transition violations are conflicts with the current resource state
/// (409); malformed identifiers, duplicates and validation failures are
/// client errors (400).
pub fn error_response<T>(err: DomainError) -> (StatusCode, Json<ApiResponse<T>>) {
    let status = match &err {
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::InvalidEvseIdFormat(_)
        | DomainError::DuplicateEvseId(_)
        | DomainError::Validation(_) => StatusCode::BAD_REQUEST,
        DomainError::InvalidStatusTransition { .. } => StatusCode::CONFLICT,
        DomainError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(ApiResponse::error(err.to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::EvseStatus;

    #[test]
    fn status_mapping_per_error_kind() {
        let (status, _) = error_response::<()>(DomainError::NotFound {
            entity: "Location",
            field: "id",
            value: "7".to_string(),
        });
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) =
            error_response::<()>(DomainError::InvalidEvseIdFormat("bad".to_string()));
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) =
            error_response::<()>(DomainError::DuplicateEvseId("US*ABC*X".to_string()));
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = error_response::<()>(DomainError::InvalidStatusTransition {
            from: Some(EvseStatus::Removed),
            to: EvseStatus::Available,
            evse_id: "US*ABC*X".to_string(),
        });
        assert_eq!(status, StatusCode::CONFLICT);

        let (status, _) = error_response::<()>(DomainError::Storage("boom".to_string()));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn error_envelope_omits_error_field_on_success() {
        let ok = ApiResponse::success(1);
        let json = serde_json::to_value(&ok).unwrap();
        assert_eq!(json["success"], true);
        assert!(json.get("error").is_none());

        let err = ApiResponse::<()>::error("nope");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "nope");
    }
}
