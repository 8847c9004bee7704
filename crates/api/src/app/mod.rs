//! HTTP API application wiring (Axum router + shared state).
//!
//! - `services.rs`: the shared inventory store handed to handlers
//! - `routes/`: HTTP routes + handlers (one file per resource)
//! - `dto.rs`: request extraction and JSON/JSONP response helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router};
use tower::ServiceBuilder;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(services: Arc<services::AppServices>) -> Router {
    routes::router().layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive())
            .layer(CompressionLayer::new())
            .layer(Extension(services)),
    )
}
