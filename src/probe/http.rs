//! HTTP liveness probing.
//!
//! # Responsibilities
//! - Issue one GET request per probe
//! - Classify the outcome as Up or Down

use std::time::Duration;

use tokio::time;
use url::Url;

use crate::probe::{ProbeError, ProbeResult};

const USER_AGENT: &str = "Service-Monitor/1.0";

/// Probes a target URL with single GET requests.
pub struct HttpProber {
    target: String,
    timeout: Duration,
    client: reqwest::Client,
}

impl HttpProber {
    pub fn new(target: String, timeout: Duration) -> Self {
        // Timeout is enforced per probe around the whole request, so
        // the client itself carries none.
        Self {
            target,
            timeout,
            client: reqwest::Client::new(),
        }
    }

    /// Perform one probe. Never fails: every error is rendered into a
    /// `Down` reason.
    pub async fn probe(&self) -> ProbeResult {
        match self.execute().await {
            Ok(result) => result,
            Err(e) => ProbeResult::Down {
                reason: e.to_string(),
            },
        }
    }

    async fn execute(&self) -> Result<ProbeResult, ProbeError> {
        // Parsed per probe: a malformed URL downgrades to Down rather
        // than failing startup.
        let url: Url = self.target.parse()?;

        let request = self
            .client
            .get(url)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .send();

        let response = match time::timeout(self.timeout, request).await {
            Ok(Ok(response)) => response,
            Ok(Err(e)) => return Err(ProbeError::Request(e.to_string())),
            Err(_) => return Err(ProbeError::Timeout),
        };

        let status = response.status();
        Ok(ProbeResult::Up {
            status: status.as_u16(),
            message: status.canonical_reason().unwrap_or("").to_string(),
        })
    }
}
