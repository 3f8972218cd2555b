mod config;
mod models;
mod routes;
mod services;

use axum::{routing::get, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::services::subtitles::SubtitleService;

/// Application state shared across handlers
pub struct AppState {
    pub config: Config,
    pub subtitles: SubtitleService,
    pub start_time: Instant,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing/logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "titlovi_addon=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    // Load configuration
    let config = Config::from_env();
    let port = config.port;

    tracing::info!("Starting Titlovi Addon v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Environment: {}", config.app_env);

    // Shared HTTP client for titlovi.com, built once from the transport settings
    let subtitles = SubtitleService::from_config(&config)?;
    tracing::info!(
        "Upstream: {} (timeout {}ms, {} concurrent downloads)",
        config.upstream_url,
        config.fetch_timeout_ms,
        config.download_concurrency
    );

    let install_url = format!("{}/manifest.json", config.base_url.trim_end_matches('/'));

    // Build application state
    let state = Arc::new(AppState {
        config,
        subtitles,
        start_time: Instant::now(),
    });

    // Build router
    let app = Router::new()
        // Health endpoints
        .route("/", get(routes::health::root))
        .route("/health", get(routes::health::health_check))
        .route("/metrics", get(routes::health::metrics))
        .route("/live", get(routes::health::live))
        // Add-on protocol
        .route("/manifest.json", get(routes::addon::manifest))
        .route("/subtitles/:type/:id", get(routes::addon::subtitles))
        .route(
            "/subtitles/:type/:id/:extra",
            get(routes::addon::subtitles_with_extra),
        )
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on http://{}", addr);
    tracing::info!("Install URL: {}", install_url);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
