/*!
 * HTTP API for the content backend.
 *
 * Exposes the query layer and the status-check log under an `/api` prefix.
 * The router builder is shared between the production binary and the
 * integration tests so both exercise the same middleware stack.
 */

use anyhow::{Context, Result};
use axum::Router;
use axum::http::Method;
use axum::http::header::CONTENT_TYPE;
use axum::routing::get;
use log::info;
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};

use crate::app_config::ServerConfig;
use crate::query::ContentQuery;
use crate::store::StatusRepository;

pub mod error;
pub mod handlers;

pub use error::{ApiError, ApiResult};

/// Shared state for request handlers
#[derive(Clone)]
pub struct AppState {
    /// Read views over the immutable content document
    pub query: ContentQuery,
    /// Append-only status-check log
    pub status: StatusRepository,
}

impl AppState {
    /// Create handler state from its two backing services
    pub fn new(query: ContentQuery, status: StatusRepository) -> Self {
        Self { query, status }
    }
}

/// Build the `/api` route tree
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::root))
        .route("/visual-styles", get(handlers::get_visual_styles))
        .route("/hooks", get(handlers::get_hooks))
        .route("/hooks/{category}", get(handlers::get_hooks_by_category))
        .route("/scripts", get(handlers::get_scripts))
        .route("/scripts/{script_type}", get(handlers::get_scripts_by_type))
        .route(
            "/status",
            axum::routing::post(handlers::create_status_check).get(handlers::list_status_checks),
        )
}

/// Build the full application router with middleware
pub fn build_router(state: AppState, config: &ServerConfig) -> Router {
    Router::new()
        .nest("/api", api_routes())
        .layer(build_cors_layer(config))
        .with_state(state)
}

/// Build the CORS middleware layer from server configuration
///
/// Panics at startup if a configured origin is invalid; misconfiguration
/// should fail fast rather than serve with the wrong policy.
pub fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let wildcard = config.cors_origins.iter().any(|o| o == "*");

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(3600));

    if wildcard {
        cors.allow_origin(Any)
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .iter()
            .map(|o| {
                o.parse()
                    .unwrap_or_else(|e| panic!("Invalid CORS origin '{}': {}", o, e))
            })
            .collect();

        cors.allow_origin(origins).allow_credentials(true)
    }
}

/// Bind and serve the API until the process terminates
pub async fn serve(state: AppState, config: &ServerConfig) -> Result<()> {
    let app = build_router(state, config);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind_addr))?;

    info!("API server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
