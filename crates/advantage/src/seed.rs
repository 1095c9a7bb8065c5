//! Embedded seed datasets
//!
//! Fixed placeholder collections installed when an initial load fails
//! (and by the employee store's local `reset`). The UI always has a
//! non-empty, render-able collection even with the gateway down.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::domain::{
    AttendanceRecord, AttendanceStatus, Employee, EmployeeStatus, Project, ProjectStatus,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date")
}

fn employee(
    id: &str,
    name: &str,
    email: &str,
    role: &str,
    department: &str,
    start_date: NaiveDate,
    status: EmployeeStatus,
    avatar_seed: u32,
) -> Employee {
    Employee {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        role: role.to_string(),
        department: department.to_string(),
        start_date,
        status,
        avatar_url: format!("https://picsum.photos/id/{}/200/200", avatar_seed),
    }
}

/// The reference employee dataset: exactly 8 records.
pub fn employees() -> Vec<Employee> {
    use EmployeeStatus::*;

    vec![
        employee(
            "1",
            "John Doe",
            "john.doe@example.com",
            "Creative Director",
            "Creative",
            date(2022, 1, 15),
            Active,
            1005,
        ),
        employee(
            "2",
            "Jane Smith",
            "jane.smith@example.com",
            "Account Manager",
            "Client Services",
            date(2021, 11, 20),
            Active,
            1011,
        ),
        employee(
            "3",
            "Mike Johnson",
            "mike.johnson@example.com",
            "Senior Developer",
            "Technology",
            date(2020, 5, 10),
            OnLeave,
            1025,
        ),
        employee(
            "4",
            "Emily Brown",
            "emily.brown@example.com",
            "Graphic Designer",
            "Creative",
            date(2023, 2, 1),
            Active,
            1012,
        ),
        employee(
            "5",
            "David Wilson",
            "david.wilson@example.com",
            "HR Manager",
            "Administration",
            date(2019, 8, 12),
            Active,
            1027,
        ),
        employee(
            "6",
            "Sarah Clark",
            "sarah.clark@example.com",
            "Copywriter",
            "Creative",
            date(2023, 7, 22),
            Active,
            1013,
        ),
        employee(
            "7",
            "Robert Turner",
            "robert.turner@example.com",
            "Media Buyer",
            "Media",
            date(2022, 9, 5),
            Terminated,
            1029,
        ),
        employee(
            "8",
            "Olivia Martinez",
            "olivia.martinez@example.com",
            "Social Media Manager",
            "Digital",
            date(2022, 3, 18),
            Active,
            1014,
        ),
    ]
}

fn project(
    id: &str,
    name: &str,
    client: &str,
    deadline: NaiveDate,
    status: ProjectStatus,
    progress: u8,
    team: &[&str],
) -> Project {
    Project {
        id: id.to_string(),
        name: name.to_string(),
        client: client.to_string(),
        deadline,
        status,
        progress,
        assigned_team_ids: team.iter().map(|id| id.to_string()).collect(),
    }
}

/// The reference project dataset: exactly 4 records.
pub fn projects() -> Vec<Project> {
    use ProjectStatus::*;

    vec![
        project(
            "proj1",
            "QuantumLeap Campaign",
            "Innovate Corp",
            date(2024, 9, 30),
            InProgress,
            75,
            &["1", "4", "6"],
        ),
        project(
            "proj2",
            "Nebula App Launch",
            "TechFrontier",
            date(2024, 10, 15),
            InProgress,
            40,
            &["2", "3", "8"],
        ),
        project(
            "proj3",
            "EcoConnect Branding",
            "GreenSolutions",
            date(2024, 8, 25),
            Completed,
            100,
            &["1", "2", "4"],
        ),
        project(
            "proj4",
            "Starlight Socials",
            "Momentum Media",
            date(2024, 11, 1),
            NotStarted,
            0,
            &["8"],
        ),
    ]
}

fn attendance(
    id: &str,
    employee_id: &str,
    employee_name: &str,
    day: NaiveDate,
    check_in: &str,
    check_out: &str,
    status: AttendanceStatus,
) -> AttendanceRecord {
    AttendanceRecord {
        id: id.to_string(),
        employee_id: employee_id.to_string(),
        employee_name: employee_name.to_string(),
        date: day,
        check_in: check_in.to_string(),
        check_out: check_out.to_string(),
        status,
    }
}

/// Reference attendance records (render-only dataset).
pub fn attendance_records() -> Vec<AttendanceRecord> {
    use AttendanceStatus::*;

    vec![
        attendance("att1", "1", "John Doe", date(2024, 7, 28), "09:05", "17:30", Present),
        attendance("att2", "2", "Jane Smith", date(2024, 7, 28), "09:15", "17:45", Late),
        attendance("att3", "3", "Mike Johnson", date(2024, 7, 28), "-", "-", Absent),
        attendance("att4", "4", "Emily Brown", date(2024, 7, 28), "08:55", "17:20", Present),
        attendance("att5", "1", "John Doe", date(2024, 7, 27), "09:00", "17:25", Present),
        attendance("att6", "2", "Jane Smith", date(2024, 7, 27), "09:02", "17:33", Present),
        attendance("att7", "5", "David Wilson", date(2024, 7, 28), "08:45", "18:00", Present),
        attendance("att8", "6", "Sarah Clark", date(2024, 7, 28), "-", "-", Absent),
    ]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn employee_seed_has_eight_unique_records() {
        let seed = employees();
        assert_eq!(seed.len(), 8);

        let ids: HashSet<_> = seed.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids.len(), 8);
    }

    #[test]
    fn project_seed_has_four_records_within_progress_bounds() {
        let seed = projects();
        assert_eq!(seed.len(), 4);
        assert!(seed.iter().all(|p| p.progress <= 100));

        let ids: HashSet<_> = seed.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), 4);
    }

    #[test]
    fn seed_teams_reference_seed_employees() {
        let known: HashSet<_> = employees().into_iter().map(|e| e.id).collect();
        for project in projects() {
            for member in &project.assigned_team_ids {
                assert!(known.contains(member), "dangling seed member {member}");
            }
        }
    }
}
