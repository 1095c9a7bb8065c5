//! AttendanceStatus - Daily attendance outcome

use serde::{Deserialize, Serialize};

/// Attendance outcome for one employee on one day
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AttendanceStatus {
    Present,
    Late,
    Absent,
}

impl std::fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttendanceStatus::Present => write!(f, "Present"),
            AttendanceStatus::Late => write!(f, "Late"),
            AttendanceStatus::Absent => write!(f, "Absent"),
        }
    }
}
