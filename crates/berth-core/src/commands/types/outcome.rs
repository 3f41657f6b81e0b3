//! Dispatch outcomes

use crate::process::ProcessHandle;

/// How a confirmed menu entry ended
///
/// Every confirmation ends in exactly one of these. Failures that were
/// already shown to the user in an error panel arrive as
/// `Completed(Err(message))`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuOutcome {
    /// The cancel entry was chosen or the menu was dismissed
    Cancelled,
    /// The host must suspend rendering and run this process in the foreground
    Delegate(ProcessHandle),
    /// The entry ran to completion
    Completed(Result<(), String>),
}

impl MenuOutcome {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// Whether control passes to an interactive subprocess
    pub fn is_delegate(&self) -> bool {
        matches!(self, Self::Delegate(_))
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Completed(Ok(())))
    }

    /// Message of the error panel that was shown, if any
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Completed(Err(message)) => Some(message),
            _ => None,
        }
    }
}
