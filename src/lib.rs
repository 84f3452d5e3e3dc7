//! Service liveness monitor library.

pub mod command;
pub mod config;
pub mod lifecycle;
pub mod monitor;
pub mod probe;

pub use config::MonitorConfig;
pub use lifecycle::Shutdown;
pub use monitor::Monitor;
