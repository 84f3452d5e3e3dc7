//! Monitor loop subsystem.
//!
//! # States
//! - Probing: waiting out the interval, then issuing one probe
//! - Reacting: a probe came back Up; the configured command runs once
//!
//! # State Transitions
//! ```text
//! Probing → probe Down → log reason → sleep interval → Probing
//! Probing → probe Up   → Reacting
//! Reacting → command done (Success or Failure) → sleep interval → Probing
//! ```
//!
//! # Design Decisions
//! - No terminal state: the loop runs until shutdown is triggered, and
//!   the command re-runs on every subsequent Up
//! - Plain loop with an owned attempt counter; command failure feeds
//!   back as a value, it never restarts or nests the loop
//! - Every await is raced against the shutdown receiver so an
//!   interrupt never waits for another probe or command

use std::time::Duration;

use tokio::sync::broadcast;
use tokio::time;

use crate::command::{CommandResult, CommandRunner};
use crate::config::MonitorConfig;
use crate::probe::{HttpProber, ProbeResult};

/// The monitor loop: probe, react, sleep, repeat.
pub struct Monitor {
    config: MonitorConfig,
    prober: HttpProber,
    runner: CommandRunner,
}

impl Monitor {
    pub fn new(config: MonitorConfig) -> Self {
        let prober = HttpProber::new(
            config.target_url.clone(),
            Duration::from_millis(config.timing.request_timeout_ms),
        );
        Self {
            config,
            prober,
            runner: CommandRunner::new(),
        }
    }

    /// Run until the shutdown signal fires.
    pub async fn run(self, mut shutdown: broadcast::Receiver<()>) {
        let interval = Duration::from_millis(self.config.timing.ping_interval_ms);
        // Attempt counter: incremented once per Probing entry, used
        // only for log labeling.
        let mut attempts: u64 = 0;

        loop {
            attempts += 1;
            tracing::info!(
                attempt = attempts,
                target = %self.config.target_url,
                "Pinging service"
            );

            let result = tokio::select! {
                r = self.prober.probe() => r,
                _ = shutdown.recv() => break,
            };

            match result {
                ProbeResult::Up { status, message } => {
                    tracing::info!(
                        attempt = attempts,
                        status,
                        message = %message,
                        "Service is UP"
                    );
                    tracing::info!(command = %self.config.command, "Running command");

                    let outcome = tokio::select! {
                        r = self.runner.run(&self.config.command) => r,
                        _ = shutdown.recv() => break,
                    };
                    self.report(outcome);
                }
                ProbeResult::Down { reason } => {
                    tracing::info!(attempt = attempts, reason = %reason, "Service is DOWN");
                }
            }

            tokio::select! {
                _ = time::sleep(interval) => {}
                _ = shutdown.recv() => break,
            }
        }

        tracing::info!("Monitor loop received shutdown signal, exiting");
    }

    /// Print a command outcome. Captured stdout/stderr are echoed
    /// verbatim to the matching process streams.
    fn report(&self, outcome: CommandResult) {
        match outcome {
            CommandResult::Success { stdout, stderr } => {
                if !stdout.is_empty() {
                    print!("{}", stdout);
                }
                if !stderr.is_empty() {
                    eprint!("{}", stderr);
                }
                tracing::info!("Command executed successfully");
            }
            CommandResult::Failure { error, stderr } => {
                if !stderr.is_empty() {
                    eprint!("{}", stderr);
                }
                tracing::error!(error = %error, "Command execution failed");
            }
        }
    }
}
