/**
 * Server Initialization
 *
 * Builds everything the router needs, in order:
 *
 * 1. Load configuration from the environment
 * 2. Connect the PostgreSQL pool and run pending migrations
 * 3. Create the upload directory if it does not exist
 * 4. Derive session keys and the places client
 * 5. Assemble `AppState` and the router
 *
 * Startup is fail-fast: a missing `DATABASE_URL`, an unreachable store,
 * or a failed migration aborts the boot instead of serving requests that
 * can only 500.
 */

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::backend::auth::sessions::SessionKeys;
use crate::backend::recommendations::places::PlacesClient;
use crate::backend::routes::create_router;
use crate::backend::server::config::Config;
use crate::backend::server::state::AppState;

/// Errors that can abort server startup.
#[derive(Debug, thiserror::Error)]
pub enum InitError {
    #[error("configuration error: {0}")]
    Config(#[from] super::config::ConfigError),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
    #[error("failed to create upload directory: {0}")]
    UploadDir(#[from] std::io::Error),
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Create the Axum application and return it with its loaded config.
pub async fn create_app() -> Result<(Router<()>, Arc<Config>), InitError> {
    let config = Arc::new(Config::from_env()?);
    tracing::info!(port = config.port, "configuration loaded");

    let db = connect_database(&config.database_url).await?;
    sqlx::migrate!("./migrations").run(&db).await?;
    tracing::info!("database connected and migrations applied");

    tokio::fs::create_dir_all(&config.upload_dir).await?;
    tracing::info!(dir = %config.upload_dir.display(), "upload directory ready");

    let session_keys = SessionKeys::new(&config.session_secrets);

    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(10))
        .build()?;
    let places = PlacesClient::new(http, config.google_places_api_key.clone());
    if config.google_places_api_key.is_some() {
        tracing::info!("Google Places lookups enabled");
    } else {
        tracing::info!("no Google Places key, using OpenStreetMap only");
    }

    let state = AppState {
        db,
        session_keys,
        places,
        config: config.clone(),
    };

    Ok((create_router(state), config))
}

async fn connect_database(url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(5))
        .connect(url)
        .await
}
