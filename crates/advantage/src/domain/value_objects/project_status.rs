//! ProjectStatus - Delivery phase of a client project

use serde::{Deserialize, Serialize};

/// Project delivery status, spaced display forms on the wire
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub enum ProjectStatus {
    #[default]
    #[serde(rename = "Not Started")]
    NotStarted,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProjectStatus::NotStarted => write!(f, "Not Started"),
            ProjectStatus::InProgress => write!(f, "In Progress"),
            ProjectStatus::Completed => write!(f, "Completed"),
        }
    }
}

impl std::str::FromStr for ProjectStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "not started" | "not-started" | "notstarted" => Ok(ProjectStatus::NotStarted),
            "in progress" | "in-progress" | "inprogress" => Ok(ProjectStatus::InProgress),
            "completed" => Ok(ProjectStatus::Completed),
            _ => Err(format!("Unknown project status: {}", s)),
        }
    }
}
