//! Project schema - The persisted project record and its lifecycle status

use serde::{Deserialize, Serialize};

/// Lifecycle status of a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectStatus {
    /// Project created, no brief yet
    New,
    /// Client brief captured
    Briefed,
    /// Quote issued to the client
    Quoted,
    /// Contract sent, awaiting signature
    ContractPending,
    /// Contract signed by the client
    ContractSigned,
    /// Site and materials ready, work can start
    ReadyToStart,
    /// Work on site in progress
    InProgress,
    /// Quality inspection
    Qa,
    /// Work completed and handed over
    Completed,
    /// Project closed out
    Closed,
}

impl ProjectStatus {
    /// The wire name of this status, e.g. `CONTRACT_PENDING`
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::New => "NEW",
            ProjectStatus::Briefed => "BRIEFED",
            ProjectStatus::Quoted => "QUOTED",
            ProjectStatus::ContractPending => "CONTRACT_PENDING",
            ProjectStatus::ContractSigned => "CONTRACT_SIGNED",
            ProjectStatus::ReadyToStart => "READY_TO_START",
            ProjectStatus::InProgress => "IN_PROGRESS",
            ProjectStatus::Qa => "QA",
            ProjectStatus::Completed => "COMPLETED",
            ProjectStatus::Closed => "CLOSED",
        }
    }
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ProjectStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NEW" => Ok(ProjectStatus::New),
            "BRIEFED" => Ok(ProjectStatus::Briefed),
            "QUOTED" => Ok(ProjectStatus::Quoted),
            "CONTRACT_PENDING" => Ok(ProjectStatus::ContractPending),
            "CONTRACT_SIGNED" => Ok(ProjectStatus::ContractSigned),
            "READY_TO_START" => Ok(ProjectStatus::ReadyToStart),
            "IN_PROGRESS" => Ok(ProjectStatus::InProgress),
            "QA" => Ok(ProjectStatus::Qa),
            "COMPLETED" => Ok(ProjectStatus::Completed),
            "CLOSED" => Ok(ProjectStatus::Closed),
            _ => Err(format!("Unknown project status: {}", s)),
        }
    }
}

/// One recorded status change
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusChange {
    pub from: ProjectStatus,
    pub to: ProjectStatus,
    /// ISO 8601 timestamp of the change
    pub changed_at: String,
}

/// A client project tracked through its lifecycle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Unique identifier (UUID v4)
    pub id: String,

    /// Human-readable project name
    pub name: String,

    /// Client the project is delivered for
    pub client_name: String,

    /// Free-form description / scope notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Site address for the fit-out
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_address: Option<String>,

    /// Agreed budget
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,

    /// Accepted quote this project was instantiated from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote_id: Option<String>,

    /// Current lifecycle status
    pub status: ProjectStatus,

    /// Every accepted status change, oldest first
    #[serde(default)]
    pub status_history: Vec<StatusChange>,

    /// ISO 8601 creation timestamp
    pub created_at: String,

    /// ISO 8601 last update timestamp
    pub updated_at: String,
}

impl Project {
    /// Create a new project in the given status with a fresh id
    pub fn new(name: String, client_name: String, status: ProjectStatus) -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Project {
            id: uuid::Uuid::new_v4().to_string(),
            name,
            client_name,
            description: None,
            site_address: None,
            budget: None,
            quote_id: None,
            status,
            status_history: Vec::new(),
            created_at: now.clone(),
            updated_at: now,
        }
    }

    // ===== IMMUTABLE BUILDER METHODS =====

    /// Return a new Project in `status`, recording the change and updating the timestamp.
    ///
    /// Setting the current status again is a no-op apart from the timestamp.
    pub fn with_status(mut self, status: ProjectStatus) -> Self {
        if self.status != status {
            self.status_history.push(StatusChange {
                from: self.status,
                to: status,
                changed_at: chrono::Utc::now().to_rfc3339(),
            });
            self.status = status;
        }
        self.touch_returning()
    }

    /// Return a new Project linked to the given quote
    pub fn with_quote(mut self, quote_id: Option<String>) -> Self {
        self.quote_id = quote_id;
        self.touch_returning()
    }

    /// Return a new Project with updated_at set to now
    pub fn with_updated_timestamp(self) -> Self {
        self.touch_returning()
    }

    fn touch_returning(mut self) -> Self {
        self.updated_at = chrono::Utc::now().to_rfc3339();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_project() -> Project {
        Project::new(
            "Lobby refit".to_string(),
            "Acme Hotels".to_string(),
            ProjectStatus::New,
        )
    }

    #[test]
    fn test_status_serialization() {
        assert_eq!(serde_json::to_string(&ProjectStatus::New).unwrap(), "\"NEW\"");
        assert_eq!(
            serde_json::to_string(&ProjectStatus::ContractPending).unwrap(),
            "\"CONTRACT_PENDING\""
        );
        assert_eq!(
            serde_json::to_string(&ProjectStatus::ReadyToStart).unwrap(),
            "\"READY_TO_START\""
        );
        assert_eq!(serde_json::to_string(&ProjectStatus::Qa).unwrap(), "\"QA\"");
    }

    #[test]
    fn test_status_rejects_unknown_on_deserialize() {
        assert!(serde_json::from_str::<ProjectStatus>("\"NOT_A_REAL_STATE\"").is_err());
        assert!(serde_json::from_str::<ProjectStatus>("\"new\"").is_err());
    }

    #[test]
    fn test_status_display_matches_serde() {
        for status in crate::domain::PROJECT_STATES {
            let json = serde_json::to_string(status).unwrap();
            assert_eq!(json, format!("\"{}\"", status));
            assert_eq!(status.as_str().parse::<ProjectStatus>().unwrap(), *status);
        }
    }

    #[test]
    fn test_status_from_str_unknown() {
        let err = "DONE".parse::<ProjectStatus>().unwrap_err();
        assert_eq!(err, "Unknown project status: DONE");
    }

    #[test]
    fn test_project_serializes_camel_case() {
        let mut project = make_project();
        project.site_address = Some("1 Harbour St".to_string());

        let json = serde_json::to_string(&project).unwrap();
        assert!(json.contains("\"clientName\":\"Acme Hotels\""));
        assert!(json.contains("\"siteAddress\":"));
        assert!(json.contains("\"statusHistory\":[]"));
        assert!(!json.contains("\"quoteId\""));
    }

    #[test]
    fn test_project_with_status_records_history() {
        let project = make_project();
        let updated = project.clone().with_status(ProjectStatus::Briefed);

        assert_eq!(updated.status, ProjectStatus::Briefed);
        assert_eq!(updated.status_history.len(), 1);
        assert_eq!(updated.status_history[0].from, ProjectStatus::New);
        assert_eq!(updated.status_history[0].to, ProjectStatus::Briefed);
        assert_eq!(project.status, ProjectStatus::New); // Original unchanged
        assert!(updated.updated_at >= project.updated_at);
    }

    #[test]
    fn test_project_with_same_status_has_no_history() {
        let project = make_project().with_status(ProjectStatus::New);
        assert!(project.status_history.is_empty());
    }

    #[test]
    fn test_project_ids_are_unique() {
        assert_ne!(make_project().id, make_project().id);
    }
}
