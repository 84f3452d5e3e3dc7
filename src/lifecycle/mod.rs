//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Shutdown (shutdown.rs):
//!     Signal received → broadcast to subscribers → loop exits → main returns 0
//!
//! Signals (signals.rs):
//!     SIGINT/SIGTERM → log notice → trigger shutdown
//! ```
//!
//! # Design Decisions
//! - Uses Tokio's signal handling (async-safe)
//! - Shutdown is cooperative: in-flight work is abandoned at the next
//!   await point, not force-canceled
//! - Graceful exit always carries status code 0

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
