use std::sync::Arc;

use axum::extract::Extension;

use crate::app::{dto, services::AppServices};

/// Plain-text service name and version.
pub async fn banner() -> String {
    format!("{} v{}", env!("CARGO_PKG_DESCRIPTION"), env!("CARGO_PKG_VERSION"))
}

/// Restore the seed inventory. Destroys all other data.
pub async fn reset(Extension(services): Extension<Arc<AppServices>>) -> axum::response::Response {
    services.inventory().reset();
    dto::success()
}
