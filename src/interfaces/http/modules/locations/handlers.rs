//! Location API handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use super::dto::{LocationDto, LocationQuery, LocationRequest};
use crate::domain::common::{BusinessHours, Coordinates};
use crate::interfaces::http::common::{
    error_response, ApiResponse, PaginatedResponse, ValidatedJson,
};
use crate::interfaces::http::modules::AppState;
use crate::shared::validate_pagination;

#[utoipa::path(
    post,
    path = "/api/v1/locations",
    tag = "Locations",
    request_body = LocationRequest,
    responses(
        (status = 201, description = "Location created", body = ApiResponse<LocationDto>),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_location(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<LocationRequest>,
) -> Result<(StatusCode, Json<ApiResponse<LocationDto>>), (StatusCode, Json<ApiResponse<LocationDto>>)>
{
    let coordinates = Coordinates::new(body.latitude, body.longitude).map_err(error_response)?;
    let hours = BusinessHours::new(body.opens_at, body.closes_at);

    let saved = state
        .locations
        .create_location(&body.name, &body.address, coordinates, hours)
        .await
        .map_err(error_response)?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(LocationDto::from_domain(saved))),
    ))
}

#[utoipa::path(
    put,
    path = "/api/v1/locations/{location_id}",
    tag = "Locations",
    params(("location_id" = i64, Path, description = "Location ID")),
    request_body = LocationRequest,
    responses(
        (status = 200, description = "Location replaced", body = ApiResponse<LocationDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_location(
    State(state): State<AppState>,
    Path(location_id): Path<i64>,
    ValidatedJson(body): ValidatedJson<LocationRequest>,
) -> Result<Json<ApiResponse<LocationDto>>, (StatusCode, Json<ApiResponse<LocationDto>>)> {
    let coordinates = Coordinates::new(body.latitude, body.longitude).map_err(error_response)?;
    let hours = BusinessHours::new(body.opens_at, body.closes_at);

    let saved = state
        .locations
        .update_location(location_id, &body.name, &body.address, coordinates, hours)
        .await
        .map_err(error_response)?;

    Ok(Json(ApiResponse::success(LocationDto::from_domain(saved))))
}

#[utoipa::path(
    get,
    path = "/api/v1/locations/{location_id}",
    tag = "Locations",
    params(("location_id" = i64, Path, description = "Location ID")),
    responses(
        (status = 200, description = "Location details", body = ApiResponse<LocationDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_location(
    State(state): State<AppState>,
    Path(location_id): Path<i64>,
) -> Result<Json<ApiResponse<LocationDto>>, (StatusCode, Json<ApiResponse<LocationDto>>)> {
    let location = state
        .locations
        .find_location(location_id)
        .await
        .map_err(error_response)?;

    Ok(Json(ApiResponse::success(LocationDto::from_domain(
        location,
    ))))
}

#[utoipa::path(
    get,
    path = "/api/v1/locations",
    tag = "Locations",
    params(LocationQuery),
    responses(
        (status = 200, description = "Locations ordered by last_updated ascending",
         body = ApiResponse<PaginatedResponse<LocationDto>>)
    )
)]
pub async fn list_locations(
    State(state): State<AppState>,
    Query(query): Query<LocationQuery>,
) -> Result<
    Json<ApiResponse<PaginatedResponse<LocationDto>>>,
    (StatusCode, Json<ApiResponse<PaginatedResponse<LocationDto>>>),
> {
    let (page, limit) = validate_pagination(query.page, query.size);
    let result = state
        .locations
        .query_by_last_updated(query.last_updated, page, limit)
        .await
        .map_err(error_response)?;

    Ok(Json(ApiResponse::success(PaginatedResponse::from_result(
        result,
        LocationDto::from_domain,
    ))))
}
