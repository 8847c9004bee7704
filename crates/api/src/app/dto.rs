use axum::{
    async_trait,
    extract::{FromRequest, Request},
    http::{header, HeaderValue, StatusCode},
    response::IntoResponse,
    Form, Json,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use cellar_inventory::{CreateBottle, CreateCellar};

use crate::app::errors;

// -------------------------
// Request extraction
// -------------------------

/// Request body decoded from either JSON or an urlencoded form.
///
/// Unlike `Json<T>`, a missing, malformed, or mistyped body never produces
/// axum's own rejection: it is answered as an invalid request.
#[derive(Debug)]
pub struct Payload<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for Payload<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = axum::response::Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_form = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("application/x-www-form-urlencoded"));

        let decoded = if is_form {
            Form::<T>::from_request(req, state)
                .await
                .map(|Form(v)| v)
                .map_err(|e| e.body_text())
        } else {
            Json::<T>::from_request(req, state)
                .await
                .map(|Json(v)| v)
                .map_err(|e| e.body_text())
        };

        match decoded {
            Ok(v) => Ok(Payload(v)),
            Err(reason) => {
                tracing::warn!(%reason, "unreadable request body");
                Err(errors::invalid_request())
            }
        }
    }
}

/// A loosely-typed body field.
///
/// Form submissions carry every value as text, and JSON clients are not
/// always careful about types, so fields are captured as-is and converted
/// when building commands.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Field {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

impl Field {
    pub fn into_text(self) -> Option<String> {
        match self {
            Field::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Numbers as-is; text only when the whole (trimmed) string is a number.
    pub fn into_number(self) -> Option<f64> {
        match self {
            Field::Number(n) => Some(n),
            Field::Text(s) => s.trim().parse().ok(),
            Field::Other(_) => None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct CreateCellarRequest {
    pub name: Option<Field>,
}

impl From<CreateCellarRequest> for CreateCellar {
    fn from(req: CreateCellarRequest) -> Self {
        CreateCellar {
            name: req.name.and_then(Field::into_text),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct CreateBottleRequest {
    pub name: Option<Field>,
    pub price: Option<Field>,
}

impl From<CreateBottleRequest> for CreateBottle {
    fn from(req: CreateBottleRequest) -> Self {
        CreateBottle {
            name: req.name.and_then(Field::into_text),
            price: req.price.and_then(Field::into_number),
        }
    }
}

// -------------------------
// Responses
// -------------------------

#[derive(Debug, Default, Deserialize)]
pub struct JsonpQuery {
    pub callback: Option<String>,
}

/// `{"success": true}` acknowledgment.
pub fn success() -> axum::response::Response {
    Json(serde_json::json!({ "success": true })).into_response()
}

/// JSON response, or a JSONP script when a usable `callback` was supplied.
///
/// Characters outside `[A-Za-z0-9_$.\[\]]` are stripped from the callback
/// name; if nothing is left, plain JSON is returned.
pub fn json_or_jsonp<T: Serialize>(query: JsonpQuery, value: T) -> axum::response::Response {
    let callback = query.callback.map(sanitize_callback).filter(|cb| !cb.is_empty());
    let Some(callback) = callback else {
        return Json(value).into_response();
    };

    let body = match serde_json::to_string(&value) {
        Ok(s) => s.replace('\u{2028}', "\\u2028").replace('\u{2029}', "\\u2029"),
        Err(e) => {
            tracing::error!("failed to serialize response: {e}");
            return (StatusCode::INTERNAL_SERVER_ERROR, errors::INVALID_REQUEST_BODY).into_response();
        }
    };

    (
        [
            (header::CONTENT_TYPE, HeaderValue::from_static("text/javascript; charset=utf-8")),
            (header::X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff")),
        ],
        format!("/**/ typeof {callback} === 'function' && {callback}({body});"),
    )
        .into_response()
}

fn sanitize_callback(raw: String) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '$' | '.' | '[' | ']'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_prices_are_parsed() {
        assert_eq!(Field::Text(" 9.5 ".to_string()).into_number(), Some(9.5));
        assert_eq!(Field::Text("cheap".to_string()).into_number(), None);
        assert_eq!(Field::Other(serde_json::json!(true)).into_number(), None);
    }

    #[test]
    fn non_text_names_are_dropped() {
        let req: CreateCellarRequest = serde_json::from_str(r#"{"name": 12}"#).unwrap();
        assert_eq!(CreateCellar::from(req).name, None);

        let req: CreateCellarRequest = serde_json::from_str(r#"{"name": "Cave"}"#).unwrap();
        assert_eq!(CreateCellar::from(req).name.as_deref(), Some("Cave"));
    }

    #[test]
    fn bottle_request_maps_to_command() {
        let req: CreateBottleRequest = serde_json::from_str(r#"{"name": "Merlot", "price": "0"}"#).unwrap();
        let cmd = CreateBottle::from(req);
        assert_eq!(cmd, CreateBottle::new("Merlot", 0.0));
    }

    #[test]
    fn callback_names_are_sanitized() {
        assert_eq!(sanitize_callback("cb".to_string()), "cb");
        assert_eq!(sanitize_callback("a.b[0]".to_string()), "a.b[0]");
        assert_eq!(sanitize_callback("alert(1);//".to_string()), "alert1");
        assert_eq!(sanitize_callback("();".to_string()), "");
    }
}
