//! Project - A client engagement with an assigned team

use std::collections::BTreeSet;

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::ProjectStatus;
use crate::seed;

use super::Record;

/// Project record
///
/// `assigned_team_ids` is a set: membership order is irrelevant and
/// duplicates collapse. Members need not resolve to currently-known
/// employees; dangling ids are filtered at render time, not here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Gateway-assigned identifier, unique within a snapshot
    pub id: String,
    pub name: String,
    pub client: String,
    pub deadline: NaiveDate,
    pub status: ProjectStatus,
    /// Completion percentage, 0..=100
    pub progress: u8,
    pub assigned_team_ids: BTreeSet<String>,
}

/// Create draft: a [`Project`] minus the server-managed fields
/// (`id`, `progress`, `assignedTeamIds`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    pub name: String,
    pub client: String,
    pub deadline: NaiveDate,
    pub status: ProjectStatus,
}

impl Record for Project {
    type Draft = NewProject;

    fn id(&self) -> &str {
        &self.id
    }

    fn seed() -> Vec<Self> {
        seed::projects()
    }

    fn local_placeholder(draft: NewProject) -> Self {
        Project {
            id: format!("mock-proj-{}", Utc::now().timestamp_millis()),
            name: draft.name,
            client: draft.client,
            deadline: draft.deadline,
            status: draft.status,
            progress: 0,
            assigned_team_ids: BTreeSet::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn team_serializes_as_array() {
        let project = Project {
            id: "proj4".to_string(),
            name: "Starlight Socials".to_string(),
            client: "Momentum Media".to_string(),
            deadline: NaiveDate::from_ymd_opt(2024, 11, 1).unwrap(),
            status: ProjectStatus::NotStarted,
            progress: 0,
            assigned_team_ids: BTreeSet::from(["8".to_string()]),
        };

        let json = serde_json::to_value(&project).unwrap();
        assert_eq!(json["status"], "Not Started");
        assert_eq!(json["assignedTeamIds"], serde_json::json!(["8"]));
    }

    #[test]
    fn duplicate_team_members_collapse_on_decode() {
        let json = r#"{
            "id": "proj9", "name": "X", "client": "Y",
            "deadline": "2024-12-01", "status": "In Progress",
            "progress": 10, "assignedTeamIds": ["1", "2", "1"]
        }"#;

        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.assigned_team_ids.len(), 2);
    }

    #[test]
    fn placeholder_defaults_server_fields() {
        let draft = NewProject {
            name: "Aurora Rebrand".to_string(),
            client: "Polaris Ltd".to_string(),
            deadline: NaiveDate::from_ymd_opt(2025, 1, 31).unwrap(),
            status: ProjectStatus::NotStarted,
        };

        let record = Project::local_placeholder(draft);
        assert!(record.id.starts_with("mock-proj-"));
        assert_eq!(record.progress, 0);
        assert!(record.assigned_team_ids.is_empty());
    }
}
