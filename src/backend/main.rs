/**
 * CareLink Server Entry Point
 *
 * Boots the Axum HTTP server: environment, tracing, app construction,
 * then serve. Startup failures print and exit nonzero rather than
 * leaving a half-working server up.
 */

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,carelink=debug"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let (app, config) = carelink::backend::create_app().await?;

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
