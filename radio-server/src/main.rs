use std::net::SocketAddr;

use radio_server::cache::{CacheConfig, CachedStationClient};
use radio_server::stations::{StationClient, StationClientConfig};
use radio_server::web::{AppState, create_router};

/// Default listen port.
const DEFAULT_PORT: u16 = 3000;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let port = match std::env::var("PORT") {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!("PORT={raw} is not a valid port, using {DEFAULT_PORT}");
            DEFAULT_PORT
        }),
        Err(_) => DEFAULT_PORT,
    };

    // Production serves the bundled assets next to the binary; development
    // serves the frontend build output.
    let static_dir = std::env::var("STATIC_DIR").unwrap_or_else(|_| {
        if std::env::var("APP_ENV").is_ok_and(|env| env == "production") {
            "public".to_string()
        } else {
            "dist/public".to_string()
        }
    });

    let client =
        StationClient::new(StationClientConfig::new()).expect("Failed to create station client");
    let stations = CachedStationClient::new(client, &CacheConfig::default());

    // Warm the cache so the first visitor doesn't wait on the upstream.
    // Failure is not fatal: the endpoint serves 500s until the upstream
    // recovers.
    match stations.get().await {
        Ok(payload) => tracing::info!("Loaded radio data ({} bytes)", payload.len()),
        Err(e) => tracing::warn!("Could not prefetch radio data: {e}"),
    }

    let state = AppState::new(stations);
    let app = create_router(state, &static_dir);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    println!("Radio station server listening on http://{addr}/");
    println!();
    println!("API Endpoints:");
    println!("  GET /api/stations - Station list JSON (cached)");
    println!("  GET /radio.json   - Station list JSON (legacy alias)");
    println!("  GET /api/health   - Health check");
    println!();
    println!("Serving static assets from {static_dir}/");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
