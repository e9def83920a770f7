//! Shared form model for the create and edit flows. Validation is
//! client-side required-field checking only; the backend's own validation
//! errors surface as a generic mutation failure.

use crate::incident::{Incident, IncidentDraft, Priority, Status};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IncidentForm {
    pub title: String,
    pub description: String,
    pub status: Status,
    pub priority: Priority,
}

impl Default for IncidentForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            status: Status::Open,
            priority: Priority::Medium,
        }
    }
}

impl IncidentForm {
    /// Prefills the edit form from a fetched incident. A missing description
    /// becomes the empty string, matching what the form renders.
    pub fn from_incident(incident: &Incident) -> Self {
        Self {
            title: incident.title.clone(),
            description: incident.description.clone().unwrap_or_default(),
            status: incident.status,
            priority: incident.priority,
        }
    }

    pub fn validate(&self) -> Result<(), &'static str> {
        if self.title.trim().is_empty() {
            return Err("Title is required");
        }
        if self.description.trim().is_empty() {
            return Err("Description is required");
        }
        Ok(())
    }

    pub fn draft(&self) -> IncidentDraft {
        IncidentDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            status: self.status,
            priority: self.priority,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_open_and_medium() {
        let form = IncidentForm::default();
        assert_eq!(form.status, Status::Open);
        assert_eq!(form.priority, Priority::Medium);
    }

    #[test]
    fn validate_requires_title_and_description() {
        let mut form = IncidentForm::default();
        assert_eq!(form.validate(), Err("Title is required"));

        form.title = "Broken login".into();
        assert_eq!(form.validate(), Err("Description is required"));

        form.description = "   ".into();
        assert_eq!(form.validate(), Err("Description is required"));

        form.description = "Users cannot sign in".into();
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn unmodified_edit_submit_matches_fetched_fields() {
        let incident = Incident {
            id: 3,
            title: "Broken login".into(),
            description: Some("Users cannot sign in".into()),
            status: Status::InProgress,
            priority: Priority::High,
            created_at: "2026-01-05T10:00:00".into(),
            updated_at: None,
        };

        let draft = IncidentForm::from_incident(&incident).draft();
        let body = serde_json::to_value(&draft).expect("encode");
        assert_eq!(
            body,
            serde_json::json!({
                "title": "Broken login",
                "desc": "Users cannot sign in",
                "status": "In_Progress",
                "priority": "High"
            })
        );
    }

    #[test]
    fn missing_description_prefills_as_empty() {
        let incident = Incident {
            id: 4,
            title: "No details yet".into(),
            description: None,
            status: Status::Open,
            priority: Priority::Low,
            created_at: "2026-01-06T09:00:00".into(),
            updated_at: None,
        };

        let form = IncidentForm::from_incident(&incident);
        assert_eq!(form.description, "");
        // An empty description fails validation rather than submitting.
        assert_eq!(form.validate(), Err("Description is required"));
    }
}
