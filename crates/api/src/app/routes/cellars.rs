use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use cellar_core::CellarId;
use cellar_inventory::CreateCellar;

use crate::app::{dto, errors};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/api/cellars", get(list_cellars).post(create_cellar))
        .route("/api/cellars/:id", get(get_cellar).delete(delete_cellar))
}

pub async fn list_cellars(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::JsonpQuery>,
) -> axum::response::Response {
    dto::json_or_jsonp(query, services.inventory().list_cellars())
}

pub async fn get_cellar(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Query(query): Query<dto::JsonpQuery>,
) -> axum::response::Response {
    let Some(id) = CellarId::parse_lenient(&id) else {
        return errors::not_found();
    };

    match services.inventory().get_cellar(id) {
        Ok(cellar) => dto::json_or_jsonp(query, cellar),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn create_cellar(
    Extension(services): Extension<Arc<AppServices>>,
    dto::Payload(body): dto::Payload<dto::CreateCellarRequest>,
) -> axum::response::Response {
    match services.inventory().create_cellar(CreateCellar::from(body)) {
        Ok(cellar) => Json(cellar).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn delete_cellar(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let Some(id) = CellarId::parse_lenient(&id) else {
        tracing::warn!(%id, "delete with unparsable cellar id");
        return errors::invalid_request();
    };

    match services.inventory().delete_cellar(id) {
        Ok(()) => dto::success(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
