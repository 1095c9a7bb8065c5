//! Value Objects
//!
//! Immutable enumerated values shared by the domain entities.

mod attendance_status;
mod employee_status;
mod project_status;
mod user_role;

pub use attendance_status::AttendanceStatus;
pub use employee_status::EmployeeStatus;
pub use project_status::ProjectStatus;
pub use user_role::UserRole;
