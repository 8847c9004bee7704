use axum::{routing::{get, post}, Router};

pub mod bottles;
pub mod cellars;
pub mod system;

/// Router for every endpoint of the service.
pub fn router() -> Router {
    Router::new()
        .route("/", get(system::banner))
        .route("/api/reset", post(system::reset))
        .merge(cellars::router())
        .merge(bottles::router())
}
