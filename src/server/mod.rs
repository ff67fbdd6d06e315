//! HTTP service exposing the resolution pipeline: mapping export, raw-text
//! extraction, generated-file downloads, and health checks.

pub mod config;
pub mod handlers;

pub use config::ServerConfig;

use crate::error::Result;
use crate::ingestion::StatementParser;
use crate::resolver::ValueResolver;
use axum::http::{header, HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

pub struct AppState {
    pub resolver: ValueResolver,
    pub parser: StatementParser,
    pub config: ServerConfig,
}

pub type SharedState = Arc<AppState>;

/// Build and return the full router.
pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config);
    let export_dir = state.config.export_dir.clone();
    let shared: SharedState = Arc::new(state);

    Router::new()
        .route("/", get(handlers::health))
        .route("/health", get(handlers::health))
        .route("/api/export", post(handlers::export_report))
        .route("/api/extract", post(handlers::extract_lines))
        .nest_service("/exports", ServeDir::new(export_dir))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}

/// Create the export directory, bind, and serve until shutdown.
pub async fn serve(config: ServerConfig) -> Result<()> {
    std::fs::create_dir_all(&config.export_dir)?;

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));

    let state = AppState {
        resolver: ValueResolver::new(),
        parser: StatementParser::new(),
        config,
    };
    let router = build_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Statement Mapper API listening on {}", addr);

    axum::serve(listener, router).await?;
    Ok(())
}

fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let mut origins: Vec<HeaderValue> = Vec::new();
    for origin in &config.allowed_origins {
        match origin.parse::<HeaderValue>() {
            Ok(value) => origins.push(value),
            Err(_) => warn!("Ignoring invalid allowed origin '{}'", origin),
        }
    }

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true)
}
