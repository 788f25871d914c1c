use std::fmt;
use serde::Serialize;

/// Lifecycle of a reservation, after https://schema.org/ActionStatusType
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ActionStatus {
    Active,
    Completed,
    Failed,
    Potential,
}

impl ActionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionStatus::Active => "active",
            ActionStatus::Completed => "completed",
            ActionStatus::Failed => "failed",
            ActionStatus::Potential => "potential",
        }
    }
}

impl fmt::Display for ActionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn wire_strings_are_lowercase() {
        let statuses = [
            (ActionStatus::Active, "active"),
            (ActionStatus::Completed, "completed"),
            (ActionStatus::Failed, "failed"),
            (ActionStatus::Potential, "potential"),
        ];
        for (status, expected) in statuses {
            assert_eq!(status.as_str(), expected);
            assert_eq!(status.to_string(), expected);
            assert_eq!(serde_json::to_value(status).unwrap(), json!(expected));
        }
    }
}
