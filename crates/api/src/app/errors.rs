use axum::http::StatusCode;
use axum::response::IntoResponse;

use cellar_core::DomainError;

pub const NOT_FOUND_BODY: &str = "404 not found";
pub const INVALID_REQUEST_BODY: &str = "Invalid request";

/// Map a domain failure to its HTTP response.
///
/// Clients only ever see the coarse kind; the detail is logged.
pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::NotFound => not_found(),
        DomainError::InvalidInput(msg) => {
            tracing::warn!(reason = %msg, "request rejected");
            invalid_request()
        }
    }
}

pub fn not_found() -> axum::response::Response {
    (StatusCode::NOT_FOUND, NOT_FOUND_BODY).into_response()
}

pub fn invalid_request() -> axum::response::Response {
    (StatusCode::INTERNAL_SERVER_ERROR, INVALID_REQUEST_BODY).into_response()
}
