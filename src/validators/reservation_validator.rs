use axum::http::Method;
use serde_json::Value;
use tracing::debug;
use crate::models::reservation::{Reservation, Target, RESOURCE_TYPE};
use crate::models::timestamp::Timestamp;
use crate::validators::error::ValidationError;

pub const NO_TYPE: &str = "no type";
pub const NO_TIME_GIVEN: &str = "no time given";
pub const DEFAULT_HTTP_METHOD: &str = "GET";

/// Turns a decoded request body into a `Reservation`, stopping at the first
/// failed check: envelope, type, startTime, endTime, ordering, then target.
pub fn parse_reservation(
    json_data: Option<&Value>,
) -> Result<Reservation, ValidationError> {
    let data = json_data
        .and_then(|body| body.get("data"))
        .ok_or(ValidationError::NoData)?;

    let data_type = match data.get("type") {
        None => NO_TYPE.to_string(),
        Some(value) => raw_text(value),
    };
    if data_type != RESOURCE_TYPE {
        return Err(ValidationError::UnexpectedType(data_type));
    }

    // A missing or non-object attributes member reads as empty.
    let attributes = data.get("attributes");

    let start_time = parse_time(attribute(attributes, "startTime"))
        .map_err(ValidationError::InvalidStartTime)?;
    let end_time = parse_time(attribute(attributes, "endTime"))
        .map_err(ValidationError::InvalidEndTime)?;

    if end_time.instant() <= start_time.instant() {
        return Err(ValidationError::StartNotBeforeEnd);
    }

    let target = match attribute(attributes, "target") {
        Some(target) => Some(parse_target(target)?),
        None => None,
    };

    Ok(Reservation::new(start_time, end_time, target))
}

fn attribute<'a>(attributes: Option<&'a Value>, name: &str) -> Option<&'a Value> {
    attributes.and_then(|a| a.get(name))
}

/// On failure returns the raw text to report back to the caller.
fn parse_time(value: Option<&Value>) -> Result<Timestamp, String> {
    let raw = match value {
        None => NO_TIME_GIVEN,
        Some(Value::String(raw)) => raw.as_str(),
        Some(other) => return Err(other.to_string()),
    };

    Timestamp::parse(raw).map_err(|e| {
        debug!("Could not parse time due to: {}", e);
        raw.to_string()
    })
}

fn parse_target(target: &Value) -> Result<Target, ValidationError> {
    let http_method = target.get("httpMethod");
    let url_template = target
        .get("urlTemplate")
        .ok_or(ValidationError::MissingUrlTemplate)?;

    let http_method = match http_method {
        None | Some(Value::Null) => DEFAULT_HTTP_METHOD.to_string(),
        Some(Value::String(method)) if is_http_method(method) => method.clone(),
        Some(other) => return Err(ValidationError::InvalidHttpMethod(raw_text(other))),
    };
    let url_template = match url_template {
        Value::String(template) => template.clone(),
        other => return Err(ValidationError::InvalidUrlTemplate(other.to_string())),
    };

    Ok(Target { http_method, url_template })
}

fn is_http_method(method: &str) -> bool {
    !method.is_empty() && Method::from_bytes(method.as_bytes()).is_ok()
}

/// Strings verbatim, anything else as its JSON text.
fn raw_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
