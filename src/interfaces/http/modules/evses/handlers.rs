//! EVSE and connector API handlers

use std::str::FromStr;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::dto::{ConnectorDto, CreateConnectorRequest, CreateEvseRequest, EvseDto, UpdateEvseStatusRequest};
use crate::domain::EvseStatus;
use crate::interfaces::http::common::{error_response, ApiResponse, ValidatedJson};
use crate::interfaces::http::modules::AppState;

#[utoipa::path(
    post,
    path = "/api/v1/locations/{location_id}/evses",
    tag = "EVSEs",
    params(("location_id" = i64, Path, description = "Location ID")),
    request_body = CreateEvseRequest,
    responses(
        (status = 201, description = "EVSE attached", body = ApiResponse<EvseDto>),
        (status = 400, description = "Malformed or duplicate EVSE id"),
        (status = 404, description = "Location not found")
    )
)]
pub async fn create_evse(
    State(state): State<AppState>,
    Path(location_id): Path<i64>,
    ValidatedJson(body): ValidatedJson<CreateEvseRequest>,
) -> Result<(StatusCode, Json<ApiResponse<EvseDto>>), (StatusCode, Json<ApiResponse<EvseDto>>)> {
    let saved = state
        .evses
        .add_evse_to_location(location_id, &body.evse_id)
        .await
        .map_err(error_response)?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(EvseDto::from_domain(saved))),
    ))
}

#[utoipa::path(
    patch,
    path = "/api/v1/evses/{evse_id}/status",
    tag = "EVSEs",
    params(("evse_id" = String, Path, description = "OCPI EVSE identifier")),
    request_body = UpdateEvseStatusRequest,
    responses(
        (status = 200, description = "Status changed", body = ApiResponse<EvseDto>),
        (status = 400, description = "Unknown status value"),
        (status = 404, description = "EVSE not found"),
        (status = 409, description = "Transition not allowed")
    )
)]
pub async fn update_evse_status(
    State(state): State<AppState>,
    Path(evse_id): Path<String>,
    ValidatedJson(body): ValidatedJson<UpdateEvseStatusRequest>,
) -> Result<Json<ApiResponse<EvseDto>>, (StatusCode, Json<ApiResponse<EvseDto>>)> {
    let status = EvseStatus::from_str(&body.status).map_err(error_response)?;
    let saved = state
        .evses
        .change_evse_status(&evse_id, status)
        .await
        .map_err(error_response)?;

    Ok(Json(ApiResponse::success(EvseDto::from_domain(saved))))
}

#[utoipa::path(
    get,
    path = "/api/v1/evses/{evse_id}",
    tag = "EVSEs",
    params(("evse_id" = String, Path, description = "OCPI EVSE identifier")),
    responses(
        (status = 200, description = "EVSE details", body = ApiResponse<EvseDto>),
        (status = 404, description = "EVSE not found")
    )
)]
pub async fn get_evse(
    State(state): State<AppState>,
    Path(evse_id): Path<String>,
) -> Result<Json<ApiResponse<EvseDto>>, (StatusCode, Json<ApiResponse<EvseDto>>)> {
    let evse = state
        .evses
        .find_by_evse_id(&evse_id)
        .await
        .map_err(error_response)?;

    Ok(Json(ApiResponse::success(EvseDto::from_domain(evse))))
}

#[utoipa::path(
    post,
    path = "/api/v1/evses/{evse_id}/connectors",
    tag = "Connectors",
    params(("evse_id" = String, Path, description = "OCPI EVSE identifier")),
    request_body = CreateConnectorRequest,
    responses(
        (status = 201, description = "Connector attached", body = ApiResponse<ConnectorDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "EVSE not found")
    )
)]
pub async fn create_connector(
    State(state): State<AppState>,
    Path(evse_id): Path<String>,
    ValidatedJson(body): ValidatedJson<CreateConnectorRequest>,
) -> Result<
    (StatusCode, Json<ApiResponse<ConnectorDto>>),
    (StatusCode, Json<ApiResponse<ConnectorDto>>),
> {
    let saved = state
        .connectors
        .add_connector_to_evse(&evse_id, &body.standard, body.power_level, body.voltage)
        .await
        .map_err(error_response)?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(ConnectorDto::from_domain(saved))),
    ))
}
