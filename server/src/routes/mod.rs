//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the packing API and a health probe under a single Axum
//! router. Everything else falls through to the built browser client, served
//! as static files from the configured directory.

pub mod packing;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use scene::wire::CALCULATE_PACKING_PATH;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// API routes, health probe, and the static client fallback.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let client = ServeDir::new(&state.config.static_dir).append_index_html_on_directories(true);

    Router::new()
        .route(CALCULATE_PACKING_PATH, post(packing::calculate_packing))
        .route("/healthz", get(healthz))
        .fallback_service(client)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
