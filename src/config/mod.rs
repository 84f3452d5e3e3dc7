//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! CLI arguments (url, command)
//!     → MonitorConfig (schema.rs, defaults fill the gaps)
//!     → validation.rs (semantic checks)
//!     → immutable for the process lifetime
//! ```
//!
//! # Design Decisions
//! - No config file: the target and command come from argv, everything
//!   else is a compiled-in default on the schema
//! - Timing constants carry the literal configured values
//!   (1000 ms interval, 60 000 ms timeout)
//! - An unparseable target URL is a warning, not a startup error; the
//!   prober reports it as Down on every attempt

pub mod schema;
pub mod validation;

pub use schema::MonitorConfig;
pub use schema::TimingConfig;
pub use validation::ConfigError;
