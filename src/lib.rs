//! OCR Relay Server Library
//!
//! Exposes the router and service types so integration tests can mount the
//! full service in-process. The server binary is in main.rs.
//!
//! # Modules
//!
//! - `config`: environment-driven service configuration
//! - `ocr`: vendor client, token cache, error taxonomy
//! - `routes`: HTTP endpoints (proxy handler, health)
//! - `state`: shared application state

use axum::http::{header, Method};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod config;
pub mod ocr;
pub mod routes;
pub mod state;

use state::AppState;

/// Build the full application router
///
/// The CORS layer answers preflight OPTIONS requests with 200 and the
/// permissive header set before any handler runs.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .nest("/health", routes::health::router())
        .nest("/api/v1/ocr", routes::ocr::router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
