//! Semantic configuration checks.

use thiserror::Error;
use url::Url;

use crate::config::schema::MonitorConfig;

/// Errors that make a configuration unusable.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Ping interval of zero would spin the loop.
    #[error("ping interval must be at least 1 ms")]
    ZeroInterval,

    /// Probe timeout of zero would fail every request.
    #[error("request timeout must be at least 1 ms")]
    ZeroTimeout,
}

/// Validate a configuration.
///
/// A target URL that fails to parse is logged as a warning rather than
/// rejected: the prober classifies it as Down on every attempt, so the
/// process keeps running and the operator sees the reason per probe.
pub fn validate_config(config: &MonitorConfig) -> Result<(), ConfigError> {
    if config.timing.ping_interval_ms == 0 {
        return Err(ConfigError::ZeroInterval);
    }
    if config.timing.request_timeout_ms == 0 {
        return Err(ConfigError::ZeroTimeout);
    }

    if let Err(e) = Url::parse(&config.target_url) {
        tracing::warn!(
            target = %config.target_url,
            error = %e,
            "Target URL does not parse; every probe will report Down"
        );
    }

    Ok(())
}
