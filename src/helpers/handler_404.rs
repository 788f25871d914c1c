use axum::http::{StatusCode, Uri};
use axum::response::IntoResponse;
use crate::helpers::error_response::error;

pub async fn page_not_found_handler(uri: Uri) -> impl IntoResponse {
    error(format!("No route found for {}", uri.path()), StatusCode::NOT_FOUND)
}
