use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    response::IntoResponse,
    routing::{delete, get},
    Json, Router,
};

use cellar_core::{id::is_non_negative_number, BottleId, CellarId};
use cellar_inventory::CreateBottle;

use crate::app::{dto, errors};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/api/cellars/:id/bottles", get(list_bottles).post(create_bottle))
        .route("/api/cellars/:id/bottles/:bottle_id", delete(delete_bottle))
}

pub async fn list_bottles(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Query(query): Query<dto::JsonpQuery>,
) -> axum::response::Response {
    let Some(id) = CellarId::parse_lenient(&id) else {
        return errors::not_found();
    };

    match services.inventory().list_bottles(id) {
        Ok(bottles) => dto::json_or_jsonp(query, bottles),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn create_bottle(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    dto::Payload(body): dto::Payload<dto::CreateBottleRequest>,
) -> axum::response::Response {
    // The whole segment must read as a non-negative number before the id is
    // taken from its leading digits.
    let cellar_id = is_non_negative_number(&id)
        .then(|| CellarId::parse_lenient(&id))
        .flatten();
    let Some(cellar_id) = cellar_id else {
        tracing::warn!(%id, "bottle create with unparsable cellar id");
        return errors::invalid_request();
    };

    match services.inventory().create_bottle(cellar_id, CreateBottle::from(body)) {
        Ok(bottle) => Json(bottle).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn delete_bottle(
    Extension(services): Extension<Arc<AppServices>>,
    Path((id, bottle_id)): Path<(String, String)>,
) -> axum::response::Response {
    let (Some(cellar_id), Some(bottle_id)) = (
        CellarId::parse_lenient(&id),
        BottleId::parse_lenient(&bottle_id),
    ) else {
        tracing::warn!(%id, %bottle_id, "bottle delete with unparsable id");
        return errors::invalid_request();
    };

    match services.inventory().delete_bottle(cellar_id, bottle_id) {
        Ok(cellar) => Json(cellar).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
