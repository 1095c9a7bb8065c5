//! Domain Errors
//!
//! Error types for gateway and session operations.

use reqwest::StatusCode;
use thiserror::Error;

/// Failure of one gateway round trip.
///
/// The three variants mirror the failure taxonomy at the store
/// boundary: transport failure, non-success status, malformed body.
/// Stores collapse all three into their fallback/rollback behavior
/// and never propagate them as `Err`.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("transport failure: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("gateway returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("malformed response body: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Failure persisting or rehydrating the authenticated session
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("session record is not valid JSON: {0}")]
    Format(#[from] serde_json::Error),

    #[error("could not determine a config directory for the session file")]
    MissingConfigDir,
}
