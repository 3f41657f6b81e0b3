//! Shell command execution

use async_trait::async_trait;
use tracing::debug;

use super::handle::ProcessHandle;
use crate::config::OsConfig;
use crate::error::{BerthError, BerthResult};

/// Runs shell commands on behalf of the dispatcher
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProcessRunner: Send + Sync {
    /// Run `command` to completion, failing on spawn errors and non-zero exits
    async fn run_command(&self, command: &str) -> BerthResult<()>;

    /// Build a handle the host can run in the foreground later
    fn executable_from_string(&self, command: &str) -> ProcessHandle;
}

/// [`ProcessRunner`] backed by the platform shell
#[derive(Debug, Clone)]
pub struct OsCommand {
    shell: String,
    shell_arg: String,
}

impl OsCommand {
    pub fn new(shell: impl Into<String>, shell_arg: impl Into<String>) -> Self {
        Self {
            shell: shell.into(),
            shell_arg: shell_arg.into(),
        }
    }

    /// Use the shell configured by the user
    pub fn from_config(config: &OsConfig) -> Self {
        Self::new(&config.shell, &config.shell_arg)
    }

    pub fn shell(&self) -> &str {
        &self.shell
    }
}

impl Default for OsCommand {
    fn default() -> Self {
        Self::from_config(&OsConfig::default())
    }
}

#[async_trait]
impl ProcessRunner for OsCommand {
    async fn run_command(&self, command: &str) -> BerthResult<()> {
        debug!("Executing command: {} {} {}", self.shell, self.shell_arg, command);

        let output = self
            .executable_from_string(command)
            .to_tokio_command()
            .output()
            .await
            .map_err(|e| {
                BerthError::process_exit(
                    format!("Failed to execute '{}': {}", command, e),
                    command,
                    None,
                )
            })?;

        if output.status.success() {
            return Ok(());
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        let stdout = String::from_utf8_lossy(&output.stdout);
        let message = [stderr.trim(), stdout.trim()]
            .into_iter()
            .find(|s| !s.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| format!("command exited with {}", output.status));

        Err(BerthError::process_exit(message, command, output.status.code()))
    }

    fn executable_from_string(&self, command: &str) -> ProcessHandle {
        ProcessHandle::new(&self.shell, &self.shell_arg, command)
    }
}
