//! Service liveness monitor.
//!
//! Polls a target URL until it responds, runs a configured shell
//! command on every successful probe, and keeps monitoring until
//! interrupted.
//!
//! # Architecture Overview
//!
//! ```text
//!              ┌────────────────────────────────────────────┐
//!              │               SERVICE MONITOR               │
//!              │                                            │
//!   argv ──────┼─▶ config ──▶ monitor loop ──▶ probe (GET) ─┼──▶ target URL
//!              │                  │                         │
//!              │                  ▼                         │
//!              │            command runner ──▶ sh -c        │
//!              │                                            │
//!              │  ┌──────────────────────────────────────┐  │
//!              │  │         Cross-Cutting Concerns        │  │
//!              │  │   tracing logs     lifecycle/signals  │  │
//!              │  └──────────────────────────────────────┘  │
//!              └────────────────────────────────────────────┘
//! ```

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use service_monitor::config::{validation, MonitorConfig};
use service_monitor::lifecycle::signals;
use service_monitor::{Monitor, Shutdown};

#[derive(Parser)]
#[command(name = "service-monitor")]
#[command(
    about = "Poll a service URL and run a command whenever it responds",
    long_about = "Continuously probes the given URL. Any HTTP response counts as \
                  the service being up, whatever the status code; the command then \
                  runs and monitoring continues. Press Ctrl+C to stop."
)]
struct Cli {
    /// URL of the service to monitor [default: http://localhost:3000]
    service_url: Option<String>,

    /// Shell command to run whenever the service responds
    /// [default: echo "Service is now available!"]
    command: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Invoked with no arguments at all: usage and out, before any
    // network activity.
    if cli.service_url.is_none() {
        let _ = Cli::command().print_help();
        return ExitCode::FAILURE;
    }

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "service_monitor=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = MonitorConfig::default();
    if let Some(url) = cli.service_url {
        config.target_url = url;
    }
    if let Some(command) = cli.command {
        config.command = command;
    }

    if let Err(e) = validation::validate_config(&config) {
        tracing::error!(error = %e, "Invalid configuration");
        return ExitCode::FAILURE;
    }

    tracing::info!(
        target = %config.target_url,
        command = %config.command,
        interval_ms = config.timing.ping_interval_ms,
        timeout_ms = config.timing.request_timeout_ms,
        "Monitoring service"
    );

    let shutdown = Shutdown::new();
    let monitor_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        signals::listen(&shutdown).await;
    });

    Monitor::new(config).run(monitor_shutdown).await;

    tracing::info!("Shutdown complete");
    ExitCode::SUCCESS
}
