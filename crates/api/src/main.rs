use std::sync::Arc;

use anyhow::Context;

use cellar_api::{app, ApiConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    cellar_observability::init();

    let config = ApiConfig::from_env().context("invalid server configuration")?;
    let services = Arc::new(app::services::AppServices::new());
    let app = app::build_app(services);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
