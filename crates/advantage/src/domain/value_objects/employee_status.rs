//! EmployeeStatus - Employment state of a staff member

use serde::{Deserialize, Serialize};

/// Employment status
///
/// The gateway uses the spaced display forms on the wire
/// (`"On Leave"`), so the serde names carry the spaces.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub enum EmployeeStatus {
    #[default]
    Active,
    #[serde(rename = "On Leave")]
    OnLeave,
    Terminated,
}

impl std::fmt::Display for EmployeeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EmployeeStatus::Active => write!(f, "Active"),
            EmployeeStatus::OnLeave => write!(f, "On Leave"),
            EmployeeStatus::Terminated => write!(f, "Terminated"),
        }
    }
}

impl std::str::FromStr for EmployeeStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(EmployeeStatus::Active),
            "on leave" | "on-leave" | "onleave" => Ok(EmployeeStatus::OnLeave),
            "terminated" => Ok(EmployeeStatus::Terminated),
            _ => Err(format!("Unknown employee status: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_form_keeps_the_space() {
        let json = serde_json::to_string(&EmployeeStatus::OnLeave).unwrap();
        assert_eq!(json, "\"On Leave\"");

        let back: EmployeeStatus = serde_json::from_str("\"On Leave\"").unwrap();
        assert_eq!(back, EmployeeStatus::OnLeave);
    }

    #[test]
    fn parses_cli_spellings() {
        assert_eq!("on-leave".parse::<EmployeeStatus>().unwrap(), EmployeeStatus::OnLeave);
        assert_eq!("Active".parse::<EmployeeStatus>().unwrap(), EmployeeStatus::Active);
        assert!("retired".parse::<EmployeeStatus>().is_err());
    }
}
