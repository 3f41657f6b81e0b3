//! The host's current interactive subprocess

use tracing::warn;

use super::handle::ProcessHandle;

/// Holds at most one subprocess waiting to take over the terminal
///
/// The dispatcher fills it through the host's setter; the host's main loop
/// takes it out after the menu returns.
#[derive(Debug, Default)]
pub struct SubprocessSlot {
    current: Option<ProcessHandle>,
}

impl SubprocessSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a subprocess, replacing one that was never taken
    pub fn set(&mut self, handle: ProcessHandle) {
        if let Some(stale) = self.current.replace(handle) {
            warn!(command = %stale.command, "replacing subprocess that was never run");
        }
    }

    /// Remove and return the pending subprocess
    pub fn take(&mut self) -> Option<ProcessHandle> {
        self.current.take()
    }

    pub fn is_occupied(&self) -> bool {
        self.current.is_some()
    }

    pub fn peek(&self) -> Option<&ProcessHandle> {
        self.current.as_ref()
    }
}
