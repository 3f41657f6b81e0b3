//! Internal function registry
//!
//! Config entries can name one of the dashboard's built-in operations via
//! `internalFunction` instead of giving a shell command. The set of
//! operations is closed; names are only matched when an entry is confirmed,
//! so a typo in the config shows up as an error panel at that point.
//! [`crate::config::UserConfig::unknown_internal_functions`] can check names
//! up front.

use std::fmt;
use std::str::FromStr;

use crate::error::BerthError;

/// A built-in operation a custom command can refer to by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InternalFunction {
    /// Remove dangling and unused images
    PruneImages,
    /// Remove stopped containers
    PruneContainers,
    /// Remove volumes not used by any container
    PruneVolumes,
    /// Stop every running container
    StopContainers,
    /// Remove every container
    RemoveContainers,
}

impl InternalFunction {
    /// Every registered function, in menu order
    pub const ALL: [InternalFunction; 5] = [
        Self::PruneImages,
        Self::PruneContainers,
        Self::PruneVolumes,
        Self::StopContainers,
        Self::RemoveContainers,
    ];

    /// Find the function registered under `name`
    pub fn lookup(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }

    /// Name used for this function in config files
    pub fn name(self) -> &'static str {
        match self {
            Self::PruneImages => "pruneImages",
            Self::PruneContainers => "pruneContainers",
            Self::PruneVolumes => "pruneVolumes",
            Self::StopContainers => "stopContainers",
            Self::RemoveContainers => "removeContainers",
        }
    }

    /// Whether the function deletes data and should be confirmed first
    pub fn is_destructive(self) -> bool {
        !matches!(self, Self::StopContainers)
    }
}

impl fmt::Display for InternalFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for InternalFunction {
    type Err = BerthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s).ok_or_else(|| BerthError::internal_function(s))
    }
}
