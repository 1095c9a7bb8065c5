//! Services
//!
//! The auth session service and the stress batch runner.

pub mod session;
pub mod stress;

pub use session::AuthService;
pub use stress::{StressConfig, StressReport, StressRunner};
