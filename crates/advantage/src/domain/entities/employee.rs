//! Employee - A staff member record

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::EmployeeStatus;
use crate::seed;

use super::Record;

/// Employee record as held in the store and on the wire
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Gateway-assigned identifier, unique within a snapshot
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub department: String,
    pub start_date: NaiveDate,
    pub status: EmployeeStatus,
    pub avatar_url: String,
}

/// Create draft: an [`Employee`] minus the server-assigned fields
/// (`id`, `avatarUrl`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewEmployee {
    pub name: String,
    pub email: String,
    pub role: String,
    pub department: String,
    pub start_date: NaiveDate,
    pub status: EmployeeStatus,
}

impl Record for Employee {
    type Draft = NewEmployee;

    fn id(&self) -> &str {
        &self.id
    }

    fn seed() -> Vec<Self> {
        seed::employees()
    }

    /// Fabricate a local-only record when the create call failed.
    /// The `mock-` prefix keeps the id distinguishable from anything
    /// the gateway would assign.
    fn local_placeholder(draft: NewEmployee) -> Self {
        Employee {
            id: format!("mock-{}", Utc::now().timestamp_millis()),
            name: draft.name,
            email: draft.email,
            role: draft.role,
            department: draft.department,
            start_date: draft.start_date,
            status: draft.status,
            avatar_url: format!("https://picsum.photos/seed/{}/200/200", uuid::Uuid::new_v4()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_fields_are_camel_case() {
        let employee = Employee {
            id: "7".to_string(),
            name: "Robert Turner".to_string(),
            email: "robert.turner@example.com".to_string(),
            role: "Media Buyer".to_string(),
            department: "Media".to_string(),
            start_date: NaiveDate::from_ymd_opt(2022, 9, 5).unwrap(),
            status: EmployeeStatus::Terminated,
            avatar_url: "https://picsum.photos/id/1029/200/200".to_string(),
        };

        let json = serde_json::to_value(&employee).unwrap();
        assert_eq!(json["startDate"], "2022-09-05");
        assert_eq!(json["avatarUrl"], "https://picsum.photos/id/1029/200/200");
        assert_eq!(json["status"], "Terminated");
    }

    #[test]
    fn placeholder_carries_local_marker() {
        let draft = NewEmployee {
            name: "New Hire".to_string(),
            email: "new.hire@example.com".to_string(),
            role: "Designer".to_string(),
            department: "Creative".to_string(),
            start_date: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
            status: EmployeeStatus::Active,
        };

        let record = Employee::local_placeholder(draft);
        assert!(record.id.starts_with("mock-"));
        assert!(!record.avatar_url.is_empty());
        assert_eq!(record.name, "New Hire");
    }
}
