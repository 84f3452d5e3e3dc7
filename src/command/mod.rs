//! Command execution subsystem.
//!
//! # Data Flow
//! ```text
//! Monitor loop observes Up
//!     → runner.rs spawns `sh -c <command>`
//!     → stdout/stderr captured
//!     → exit 0 → CommandResult::Success
//!     → non-zero exit or spawn failure → CommandResult::Failure
//! ```
//!
//! # Design Decisions
//! - Trust boundary: the command string runs verbatim through the host
//!   shell. Whoever supplies it can run arbitrary code as this process;
//!   no quoting or sanitization is attempted
//! - Execution never fails upward: both failure modes become a
//!   Failure value and the monitor loop decides what happens next
//! - One process per invocation; nothing is inherited back

pub mod runner;

pub use runner::CommandRunner;

/// Outcome of one command execution. Produced fresh each run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    /// The process exited with status 0.
    Success { stdout: String, stderr: String },
    /// The process exited non-zero, or could not be spawned.
    Failure { error: String, stderr: String },
}
