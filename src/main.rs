//! eMSP Locations service entrypoint
//!
//! REST API server for charging location management.
//! Reads configuration from TOML file (~/.config/emsp-locations/config.toml).

use std::sync::Arc;

use sea_orm_migration::MigratorTrait;
use tracing::{error, info};

use emsp_locations::application::events::spawn_event_logger;
use emsp_locations::application::{ConnectorService, EvseService, LocationService};
use emsp_locations::config::AppConfig;
use emsp_locations::domain::RepositoryProvider;
use emsp_locations::infrastructure::database::migrator::Migrator;
use emsp_locations::interfaces::AppState;
use emsp_locations::{
    create_api_router, create_event_bus, default_config_path, init_database, DatabaseConfig,
    SeaOrmRepositoryProvider,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ── Load configuration ─────────────────────────────────────
    let config_path = std::env::var("EMSP_CONFIG")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| default_config_path());
    let app_cfg = match AppConfig::load(&config_path) {
        Ok(cfg) => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cfg.logging.level)),
                )
                .init();
            info!("Configuration loaded from {}", config_path.display());
            cfg
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(tracing_subscriber::EnvFilter::new("info"))
                .init();
            error!("Failed to load config: {}. Using defaults.", e);
            AppConfig::default()
        }
    };

    info!("Starting eMSP Locations service...");

    // ── Database ───────────────────────────────────────────────
    let db_config = match std::env::var("DATABASE_URL") {
        Ok(url) => DatabaseConfig { url },
        Err(_) => DatabaseConfig {
            url: app_cfg.database.url.clone(),
        },
    };
    let db = match init_database(&db_config).await {
        Ok(db) => db,
        Err(e) => {
            error!("Failed to connect to database: {}", e);
            return Err(e.into());
        }
    };

    info!("Running database migrations...");
    if let Err(e) = Migrator::up(&db, None).await {
        error!("Failed to run migrations: {}", e);
        return Err(e.into());
    }
    info!("Migrations completed");

    let repos: Arc<dyn RepositoryProvider> = Arc::new(SeaOrmRepositoryProvider::new(db));

    // ── Event bus ──────────────────────────────────────────────
    let event_bus = create_event_bus();
    let _event_logger = spawn_event_logger(&event_bus);

    // ── Services and router ────────────────────────────────────
    let state = AppState {
        locations: Arc::new(LocationService::new(repos.clone(), event_bus.clone())),
        evses: Arc::new(EvseService::new(repos.clone(), event_bus.clone())),
        connectors: Arc::new(ConnectorService::new(repos, event_bus)),
    };
    let router = create_api_router(state);

    // ── Start server with graceful shutdown ────────────────────
    let addr = app_cfg.server.address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("REST API server listening on http://{}", addr);
    info!("Swagger UI available at http://{}/docs/", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                error!("Failed to listen for shutdown signal: {}", e);
            }
            info!("Shutdown signal received");
        })
        .await?;

    info!("Server stopped");
    Ok(())
}
