//! Process handles for attached commands

use std::process::Stdio;

/// A command ready to be run in the foreground
///
/// Built by the dispatcher, spawned by the host once it has released the
/// terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessHandle {
    pub shell: String,
    pub shell_arg: String,
    pub command: String,
}

impl ProcessHandle {
    pub fn new(
        shell: impl Into<String>,
        shell_arg: impl Into<String>,
        command: impl Into<String>,
    ) -> Self {
        Self {
            shell: shell.into(),
            shell_arg: shell_arg.into(),
            command: command.into(),
        }
    }

    /// A blocking command inheriting the terminal's stdio
    pub fn to_command(&self) -> std::process::Command {
        let mut cmd = std::process::Command::new(&self.shell);
        cmd.arg(&self.shell_arg)
            .arg(&self.command)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        cmd
    }

    /// An async command capturing output
    pub fn to_tokio_command(&self) -> tokio::process::Command {
        let mut cmd = tokio::process::Command::new(&self.shell);
        cmd.arg(&self.shell_arg)
            .arg(&self.command)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        cmd
    }
}
