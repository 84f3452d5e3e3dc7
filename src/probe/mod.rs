//! Liveness probing subsystem.
//!
//! # Data Flow
//! ```text
//! Monitor loop tick
//!     → http.rs issues one GET to the target
//!     → any HTTP response (100-599) → ProbeResult::Up
//!     → URL/DNS/connect error or timeout → ProbeResult::Down
//! ```
//!
//! # Design Decisions
//! - "Responded at all" means available: the status code is reported
//!   but never affects Up/Down classification
//! - Probing never fails: every error becomes a Down with a reason
//! - One request per probe, no retries

pub mod http;

pub use http::HttpProber;

use thiserror::Error;

/// Outcome of a single probe. Produced fresh each attempt, not retained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeResult {
    /// The target returned an HTTP response, whatever the status.
    Up {
        /// Status code, reported unchanged.
        status: u16,
        /// Canonical status message ("OK", "Not Found", ...).
        message: String,
    },
    /// No HTTP response was received.
    Down {
        /// Human-readable failure reason.
        reason: String,
    },
}

/// Failures that can occur while issuing a probe request.
///
/// These never leave the probe subsystem; [`HttpProber::probe`] renders
/// them into [`ProbeResult::Down`].
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The target URL does not parse.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// DNS resolution, connection, or transport failure.
    #[error("{0}")]
    Request(String),

    /// No response arrived within the configured timeout.
    #[error("Request timeout")]
    Timeout,
}
