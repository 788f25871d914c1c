use axum::body::Bytes;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::Value;
use tracing::{debug, info, warn};
use crate::validators::reservation_validator::parse_reservation;

pub fn router() -> Router {
    Router::new().route("/", post(schedule_reservation))
}

/// Content type is not enforced; a body that is not JSON is treated as
/// carrying no data at all.
pub async fn schedule_reservation(body: Bytes) -> impl IntoResponse {
    let json_data = match serde_json::from_slice::<Value>(&body) {
        Ok(value) => Some(value),
        Err(e) => {
            debug!("Request body is not JSON: {}", e);
            None
        }
    };

    return match parse_reservation(json_data.as_ref()) {
        Ok(reservation) => {
            info!(
                "Accepted reservation {} from {} to {}",
                reservation.id,
                reservation.start_time,
                reservation.end_time,
            );
            (StatusCode::CREATED, Json(reservation.as_jsonapi_response())).into_response()
        }
        Err(e) => {
            warn!("Rejected reservation request due to: {}", e);
            e.into_response()
        }
    };
}
