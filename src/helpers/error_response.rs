use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// `{ "message": ... }` body with the given status.
pub fn error(message: impl Into<String>, status: StatusCode) -> Response {
    let message: String = message.into();
    (status, Json(json!({ "message": message }))).into_response()
}
