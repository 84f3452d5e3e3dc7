//! Shell command execution.

use tokio::process::Command;
use tracing::debug;

use crate::command::CommandResult;

/// Runs a configured shell command and captures its output.
#[derive(Debug, Clone, Default)]
pub struct CommandRunner;

impl CommandRunner {
    pub fn new() -> Self {
        Self
    }

    /// Execute `command` through `sh -c`, capturing stdout and stderr.
    ///
    /// Never fails: spawn errors and non-zero exits are both rendered
    /// into [`CommandResult::Failure`] for the caller to act on.
    pub async fn run(&self, command: &str) -> CommandResult {
        debug!(%command, "Spawning shell command");

        let output = match Command::new("sh").arg("-c").arg(command).output().await {
            Ok(output) => output,
            Err(e) => {
                return CommandResult::Failure {
                    error: format!("failed to spawn command: {}", e),
                    stderr: String::new(),
                }
            }
        };

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if output.status.success() {
            CommandResult::Success { stdout, stderr }
        } else {
            CommandResult::Failure {
                error: format!("command exited with {}", output.status),
                stderr,
            }
        }
    }
}
