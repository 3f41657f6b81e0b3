//! Menu entry types

use crate::config::CustomCommand;
use crate::error::BerthError;

/// What confirming a menu entry does
#[derive(Debug, Clone)]
pub enum CommandAction {
    /// Run a shell command, either detached or attached to the terminal
    Run {
        definition: CustomCommand,
        /// The substituted command, or why substitution failed
        resolved: Result<String, BerthError>,
        attach: bool,
    },
    /// Run one of the dashboard's built-in operations by name
    Internal {
        definition: CustomCommand,
        function: String,
    },
    /// The synthetic last entry; does nothing
    Cancel,
}

/// One entry of a custom command menu
#[derive(Debug, Clone)]
pub struct CommandOption {
    /// Label shown in the menu
    pub name: String,
    /// Resolved command with long hashes shortened, for display only
    pub description: String,
    pub action: CommandAction,
}

impl CommandOption {
    /// The cancel entry appended to every menu
    pub fn cancel(label: impl Into<String>) -> Self {
        Self {
            name: label.into(),
            description: String::new(),
            action: CommandAction::Cancel,
        }
    }

    /// Whether confirming this entry does anything
    pub fn run_command(&self) -> bool {
        !matches!(self.action, CommandAction::Cancel)
    }

    /// Whether this entry takes over the terminal
    pub fn attach(&self) -> bool {
        matches!(self.action, CommandAction::Run { attach: true, .. })
    }

    /// The substituted shell command, if this entry has one
    pub fn command(&self) -> Option<&str> {
        match &self.action {
            CommandAction::Run {
                resolved: Ok(command),
                ..
            } => Some(command.as_str()),
            _ => None,
        }
    }

    /// The config entry this option was built from
    pub fn definition(&self) -> Option<&CustomCommand> {
        match &self.action {
            CommandAction::Run { definition, .. } | CommandAction::Internal { definition, .. } => {
                Some(definition)
            }
            CommandAction::Cancel => None,
        }
    }

    /// Columns shown for this entry: the label and the command preview
    pub fn display_strings(&self) -> [&str; 2] {
        [self.name.as_str(), self.description.as_str()]
    }
}
