//! Configuration schema definitions.
//!
//! All types derive Serde traits; defaults hold the compiled-in
//! constants so a config built from argv alone is complete.

use serde::{Deserialize, Serialize};

/// Root configuration for the monitor.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MonitorConfig {
    /// URL of the service to probe.
    pub target_url: String,

    /// Shell command to run whenever the service responds.
    pub command: String,

    /// Timing configuration.
    pub timing: TimingConfig,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            target_url: "http://localhost:3000".to_string(),
            command: "echo \"Service is now available!\"".to_string(),
            timing: TimingConfig::default(),
        }
    }
}

/// Timing configuration for the probe loop.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Delay between probe attempts in milliseconds.
    pub ping_interval_ms: u64,

    /// Timeout for a single probe request in milliseconds.
    pub request_timeout_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            ping_interval_ms: 1_000,
            request_timeout_ms: 60_000,
        }
    }
}
