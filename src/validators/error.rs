use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use crate::helpers::error_response::error;

/// First check a reservation request failed. The `Display` text is what the
/// caller gets back as `message`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("No JSON data found")]
    NoData,

    #[error("Expected type 'reservation', but got '{0}'")]
    UnexpectedType(String),

    #[error("Invalid startTime ({0})")]
    InvalidStartTime(String),

    #[error("Invalid endTime ({0})")]
    InvalidEndTime(String),

    #[error("Start time must be before end time")]
    StartNotBeforeEnd,

    #[error("No URL template in target")]
    MissingUrlTemplate,

    #[error("Invalid httpMethod ({0})")]
    InvalidHttpMethod(String),

    #[error("Invalid urlTemplate ({0})")]
    InvalidUrlTemplate(String),
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        error(self.to_string(), StatusCode::BAD_REQUEST)
    }
}
