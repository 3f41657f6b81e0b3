//! Process execution
//!
//! Commands are always run through the platform shell so templates can use
//! pipes, `$(...)` and quoting the way users write them in a terminal.

mod handle;
mod os_command;
mod slot;

pub use handle::ProcessHandle;
#[cfg(test)]
pub use os_command::MockProcessRunner;
pub use os_command::{OsCommand, ProcessRunner};
pub use slot::SubprocessSlot;
