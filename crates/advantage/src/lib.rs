//! Ad-Vantage HRMS client core
//!
//! The data-synchronization layer behind the Ad-Vantage HR front end:
//! per-collection entity stores kept in sync with a path-prefixed REST
//! gateway through optimistic mutation with rollback, plus the auth
//! session service and the stress batch runner.
//!
//! # Architecture
//!
//! - **Domain** (`domain/`): entities (Employee, Project, User,
//!   AttendanceRecord), value objects (statuses, roles), error types
//! - **Ports** (`ports/`): resource and session-store traits
//! - **Adapters** (`adapters/`): the reqwest gateway client and the
//!   session persistence strategies
//! - **Store** (`store/`): the optimistic [`EntityStore`]
//! - **Services** (`services/`): [`AuthService`], [`StressRunner`]
//! - **Seed** (`seed`): embedded placeholder datasets installed when
//!   the gateway is unreachable
//!
//! # Usage
//!
//! ```rust,ignore
//! use advantage::{EmployeeStore, Gateway, LoadOutcome};
//!
//! let gateway = Gateway::new("http://localhost:8080");
//! let employees = EmployeeStore::new(gateway);
//! match employees.load().await {
//!     LoadOutcome::Fetched(n) => println!("{n} employees"),
//!     LoadOutcome::SeedFallback(_) => println!("gateway down, seed data"),
//! }
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod seed;
pub mod services;
pub mod store;

// Re-export commonly used types
pub use adapters::{FileSessionStore, Gateway, MemorySessionStore, MirroredSessionStore};
pub use domain::{
    AttendanceRecord, AttendanceStatus, Employee, EmployeeStatus, GatewayError, NewEmployee,
    NewProject, Project, ProjectStatus, Record, SessionError, User, UserPatch, UserRole,
};
pub use ports::{AuthResource, ProjectResource, Resource, SessionStore};
pub use services::{AuthService, StressConfig, StressReport, StressRunner};
pub use store::{EntityStore, LoadOutcome, Mutation};

/// Employee store backed by the HTTP gateway
pub type EmployeeStore = EntityStore<Employee, Gateway>;
/// Project store backed by the HTTP gateway
pub type ProjectStore = EntityStore<Project, Gateway>;
