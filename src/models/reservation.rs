use serde::Serialize;
use uuid::Uuid;
use crate::models::action_status::ActionStatus;
use crate::models::timestamp::Timestamp;

pub const RESOURCE_TYPE: &str = "reservation";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Target {
    pub http_method: String,
    pub url_template: String,
}

/// A validated reservation. Only constructed from a request that passed
/// validation, so `end_time` is always after `start_time`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reservation {
    pub id: Uuid,
    pub start_time: Timestamp,
    pub end_time: Timestamp,
    pub target: Option<Target>,
    pub action_status: ActionStatus,
}

impl Reservation {
    pub fn new(
        start_time: Timestamp,
        end_time: Timestamp,
        target: Option<Target>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            start_time,
            end_time,
            target,
            action_status: ActionStatus::Potential,
        }
    }

    pub fn as_jsonapi_response(&self) -> ReservationResource {
        ReservationResource {
            resource_type: RESOURCE_TYPE,
            id: self.id.to_string(),
            attributes: ReservationAttributes {
                start_time: self.start_time.to_string(),
                end_time: self.end_time.to_string(),
                target: TargetAttributes {
                    http_method: self.target.as_ref().map(|t| t.http_method.clone()),
                    url_template: self.target.as_ref().map(|t| t.url_template.clone()),
                },
                action_status: self.action_status,
            },
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ReservationResource {
    #[serde(rename = "type")]
    pub resource_type: &'static str,
    pub id: String,
    pub attributes: ReservationAttributes,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReservationAttributes {
    pub start_time: String,
    pub end_time: String,
    pub target: TargetAttributes,
    pub action_status: ActionStatus,
}

/// Always rendered, with both fields null when no target was given.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TargetAttributes {
    pub http_method: Option<String>,
    pub url_template: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use serde_json::json;
    use uuid::Version;

    fn window() -> (Timestamp, Timestamp) {
        (
            Timestamp::parse("2024-01-01T10:00:00Z").unwrap(),
            Timestamp::parse("2024-01-01T11:00:00Z").unwrap(),
        )
    }

    #[test]
    fn new_reservations_are_potential() {
        let (start, end) = window();
        let reservation = Reservation::new(start, end, None);
        assert_eq!(reservation.action_status, ActionStatus::Potential);
        assert_eq!(reservation.id.get_version(), Some(Version::Random));
    }

    #[test]
    fn ids_do_not_collide() {
        let (start, end) = window();
        let ids: HashSet<Uuid> = (0..10_000)
            .map(|_| Reservation::new(start, end, None).id)
            .collect();
        assert_eq!(ids.len(), 10_000);
    }

    #[test]
    fn renders_null_target_without_one() {
        let (start, end) = window();
        let reservation = Reservation::new(start, end, None);
        let rendered = serde_json::to_value(reservation.as_jsonapi_response()).unwrap();

        assert_eq!(rendered, json!({
            "type": "reservation",
            "id": reservation.id.to_string(),
            "attributes": {
                "startTime": "2024-01-01T10:00:00+00:00",
                "endTime": "2024-01-01T11:00:00+00:00",
                "target": {
                    "httpMethod": null,
                    "urlTemplate": null,
                },
                "actionStatus": "potential",
            },
        }));
    }

    #[test]
    fn renders_target() {
        let (start, end) = window();
        let reservation = Reservation::new(start, end, Some(Target {
            http_method: "POST".to_string(),
            url_template: "http://example.com/reservation/{id}?status={status}".to_string(),
        }));
        let rendered = serde_json::to_value(reservation.as_jsonapi_response()).unwrap();

        assert_eq!(rendered["attributes"]["target"], json!({
            "httpMethod": "POST",
            "urlTemplate": "http://example.com/reservation/{id}?status={status}",
        }));
        assert!(Uuid::parse_str(rendered["id"].as_str().unwrap()).is_ok());
    }

    #[test]
    fn rendered_times_parse_back_to_the_same_instant() {
        let start = Timestamp::parse("2024-05-01T09:15:30.5+09:00").unwrap();
        let end = Timestamp::parse("2024-05-01 18:00").unwrap();
        let resource = Reservation::new(start, end, None).as_jsonapi_response();

        let start_again = Timestamp::parse(&resource.attributes.start_time).unwrap();
        let end_again = Timestamp::parse(&resource.attributes.end_time).unwrap();
        assert_eq!(start_again.instant(), start.instant());
        assert_eq!(end_again.instant(), end.instant());
    }
}
