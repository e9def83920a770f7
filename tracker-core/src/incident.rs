use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    Open,
    #[serde(rename = "In_Progress")]
    InProgress,
    Resolved,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::Open, Status::InProgress, Status::Resolved];

    /// Wire name, as the backend stores and filters it.
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Open => "Open",
            Status::InProgress => "In_Progress",
            Status::Resolved => "Resolved",
        }
    }

    pub fn parse(value: &str) -> Option<Status> {
        match value {
            "Open" => Some(Status::Open),
            "In_Progress" => Some(Status::InProgress),
            "Resolved" => Some(Status::Resolved),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }

    pub fn parse(value: &str) -> Option<Priority> {
        match value {
            "Low" => Some(Priority::Low),
            "Medium" => Some(Priority::Medium),
            "High" => Some(Priority::High),
            _ => None,
        }
    }
}

/// An incident record as the backend serves it. The description travels under
/// the wire key `desc` and may be absent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Incident {
    pub id: i64,
    pub title: String,
    #[serde(rename = "desc", default)]
    pub description: Option<String>,
    pub status: Status,
    pub priority: Priority,
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Request body for POST /incidents/ and PUT /incidents/{id}: the four
/// mutable fields, always sent together.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncidentDraft {
    pub title: String,
    #[serde(rename = "desc")]
    pub description: String,
    pub status: Status,
    pub priority: Priority,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incident_decodes_backend_response() {
        let body = r#"{
            "id": 7,
            "title": "Dashboard unreachable",
            "desc": null,
            "status": "In_Progress",
            "priority": "High",
            "created_at": "2026-01-05T10:00:00",
            "updated_at": null
        }"#;

        let incident: Incident = serde_json::from_str(body).expect("decode");
        assert_eq!(incident.id, 7);
        assert_eq!(incident.description, None);
        assert_eq!(incident.status, Status::InProgress);
        assert_eq!(incident.priority, Priority::High);
    }

    #[test]
    fn draft_serializes_with_wire_keys() {
        let draft = IncidentDraft {
            title: "T".into(),
            description: "D".into(),
            status: Status::Open,
            priority: Priority::Low,
        };

        let value = serde_json::to_value(&draft).expect("encode");
        assert_eq!(
            value,
            serde_json::json!({
                "title": "T",
                "desc": "D",
                "status": "Open",
                "priority": "Low"
            })
        );
    }

    #[test]
    fn status_parse_roundtrips_wire_names() {
        for status in Status::ALL {
            assert_eq!(Status::parse(status.as_str()), Some(status));
        }
        assert_eq!(Status::parse(""), None);
        assert_eq!(Status::parse("open"), None);
    }
}
