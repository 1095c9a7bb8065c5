//! AttendanceRecord - Daily check-in/check-out entry
//!
//! Render-only: attendance has no gateway endpoints yet, so these
//! records come from the embedded seed dataset.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::AttendanceStatus;

/// One employee's attendance on one day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub id: String,
    pub employee_id: String,
    pub employee_name: String,
    pub date: NaiveDate,
    /// Clock time (`"09:05"`) or `"-"` when absent
    pub check_in: String,
    pub check_out: String,
    pub status: AttendanceStatus,
}
