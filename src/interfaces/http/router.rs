//! API Router with Swagger UI

use axum::{
    routing::{get, patch, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::common::{ApiResponse, PaginatedResponse};
use super::modules::{evses, health, locations, AppState};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::handlers::health_check,
        // Locations
        locations::handlers::create_location,
        locations::handlers::update_location,
        locations::handlers::get_location,
        locations::handlers::list_locations,
        // EVSEs
        evses::handlers::create_evse,
        evses::handlers::update_evse_status,
        evses::handlers::get_evse,
        // Connectors
        evses::handlers::create_connector,
    ),
    components(
        schemas(
            // Common
            ApiResponse<String>,
            PaginatedResponse<locations::LocationDto>,
            // Locations
            locations::LocationDto,
            locations::LocationRequest,
            // EVSEs
            evses::EvseDto,
            evses::CreateEvseRequest,
            evses::UpdateEvseStatusRequest,
            // Connectors
            evses::ConnectorDto,
            evses::CreateConnectorRequest,
            // Health
            health::handlers::HealthResponse,
        )
    ),
    tags(
        (name = "Health", description = "Server health check endpoints"),
        (name = "Locations", description = "Charging location CRUD and change-based queries"),
        (name = "EVSEs", description = "EVSE attachment, lookup and status management"),
        (name = "Connectors", description = "Connector attachment to EVSEs"),
    ),
    info(
        title = "eMSP Locations API",
        version = "1.0.0",
        description = "REST API for managing charging locations, EVSEs and connectors",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let location_routes = Router::new()
        .route(
            "/",
            get(locations::handlers::list_locations).post(locations::handlers::create_location),
        )
        .route(
            "/{location_id}",
            get(locations::handlers::get_location).put(locations::handlers::update_location),
        )
        .route("/{location_id}/evses", post(evses::handlers::create_evse));

    let evse_routes = Router::new()
        .route("/{evse_id}", get(evses::handlers::get_evse))
        .route("/{evse_id}/status", patch(evses::handlers::update_evse_status))
        .route("/{evse_id}/connectors", post(evses::handlers::create_connector));

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    Router::new()
        .merge(swagger_routes)
        .route("/health", get(health::handlers::health_check))
        .nest("/api/v1/locations", location_routes)
        .nest("/api/v1/evses", evse_routes)
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::application::events::create_event_bus;
    use crate::application::{ConnectorService, EvseService, LocationService};
    use crate::domain::RepositoryProvider;
    use crate::infrastructure::InMemoryRepositoryProvider;

    fn app() -> Router {
        let repos: Arc<dyn RepositoryProvider> = Arc::new(InMemoryRepositoryProvider::new());
        let bus = create_event_bus();
        create_api_router(AppState {
            locations: Arc::new(LocationService::new(repos.clone(), bus.clone())),
            evses: Arc::new(EvseService::new(repos.clone(), bus.clone())),
            connectors: Arc::new(ConnectorService::new(repos, bus)),
        })
    }

    fn request(method: &str, uri: &str, body: Option<Value>) -> Request<Body> {
        let builder = Request::builder().method(method).uri(uri);
        match body {
            Some(value) => builder
                .header("content-type", "application/json")
                .body(Body::from(value.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        }
    }

    async fn body_json(response: axum::http::Response<Body>) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn location_body() -> Value {
        json!({
            "name": "Central Garage",
            "address": "1 Main St, Springfield",
            "latitude": 52.52,
            "longitude": 13.405,
            "opens_at": "08:00:00",
            "closes_at": "22:00:00"
        })
    }

    async fn create_location(app: &Router) -> i64 {
        let response = app
            .clone()
            .oneshot(request("POST", "/api/v1/locations", Some(location_body())))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let json = body_json(response).await;
        json["data"]["id"].as_i64().unwrap()
    }

    async fn create_evse(app: &Router, location_id: i64, evse_id: &str) -> StatusCode {
        let response = app
            .clone()
            .oneshot(request(
                "POST",
                &format!("/api/v1/locations/{}/evses", location_id),
                Some(json!({ "evse_id": evse_id })),
            ))
            .await
            .unwrap();
        response.status()
    }

    #[tokio::test]
    async fn health_endpoint_responds() {
        let response = app()
            .oneshot(request("GET", "/health", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "ok");
    }

    #[tokio::test]
    async fn location_create_and_fetch() {
        let app = app();
        let id = create_location(&app).await;

        let response = app
            .clone()
            .oneshot(request("GET", &format!("/api/v1/locations/{}", id), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["data"]["name"], "Central Garage");
        assert_eq!(json["data"]["evses"], json!([]));
    }

    #[tokio::test]
    async fn missing_location_is_404() {
        let response = app()
            .oneshot(request("GET", "/api/v1/locations/999", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert_eq!(json["success"], false);
    }

    #[tokio::test]
    async fn out_of_range_coordinates_are_400() {
        let mut body = location_body();
        body["latitude"] = json!(95.0);
        let response = app()
            .oneshot(request("POST", "/api/v1/locations", Some(body)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn evse_create_duplicate_and_malformed() {
        let app = app();
        let id = create_location(&app).await;

        assert_eq!(
            create_evse(&app, id, "US*ABC*EVSE123").await,
            StatusCode::CREATED
        );
        // Same identifier again, rejected system-wide.
        assert_eq!(
            create_evse(&app, id, "US*ABC*EVSE123").await,
            StatusCode::BAD_REQUEST
        );
        // Lowercase country code fails format validation.
        assert_eq!(
            create_evse(&app, id, "us*abc*evse1").await,
            StatusCode::BAD_REQUEST
        );
    }

    #[tokio::test]
    async fn status_transitions_over_http() {
        let app = app();
        let id = create_location(&app).await;
        create_evse(&app, id, "DE*BER*STATION01").await;

        let patch = |status: &str| {
            request(
                "PATCH",
                "/api/v1/evses/DE*BER*STATION01/status",
                Some(json!({ "status": status })),
            )
        };

        let response = app.clone().oneshot(patch("BLOCKED")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["data"]["status"], "BLOCKED");

        // Blocked cannot go straight to Inoperative.
        let response = app.clone().oneshot(patch("INOPERATIVE")).await.unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        // Unknown status value is a client error.
        let response = app.clone().oneshot(patch("CHARGING")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = app
            .clone()
            .oneshot(request("GET", "/api/v1/evses/DE*BER*STATION01", None))
            .await
            .unwrap();
        let json = body_json(response).await;
        assert_eq!(json["data"]["status"], "BLOCKED");
    }

    #[tokio::test]
    async fn connector_create_and_listing_through_location() {
        let app = app();
        let id = create_location(&app).await;
        create_evse(&app, id, "NL*AMS*P1").await;

        let response = app
            .clone()
            .oneshot(request(
                "POST",
                "/api/v1/evses/NL*AMS*P1/connectors",
                Some(json!({
                    "standard": "IEC_62196_T2",
                    "power_level": 22.0,
                    "voltage": 400.0
                })),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = app
            .clone()
            .oneshot(request("GET", &format!("/api/v1/locations/{}", id), None))
            .await
            .unwrap();
        let json = body_json(response).await;
        assert_eq!(json["data"]["evses"][0]["connectors"][0]["standard"], "IEC_62196_T2");
    }

    #[tokio::test]
    async fn connector_on_missing_evse_is_404() {
        let response = app()
            .oneshot(request(
                "POST",
                "/api/v1/evses/SE*STO*GHOST/connectors",
                Some(json!({
                    "standard": "CHADEMO",
                    "power_level": 50.0,
                    "voltage": 500.0
                })),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn list_locations_paginates() {
        let app = app();
        create_location(&app).await;

        let response = app
            .clone()
            .oneshot(request("GET", "/api/v1/locations?page=1&size=10", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["data"]["total"], 1);
        assert_eq!(json["data"]["page"], 1);
    }
}
