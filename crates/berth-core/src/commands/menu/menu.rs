//! Menu construction

use serde::Serialize;

use crate::commands::template::{resolve, with_short_sha};
use crate::commands::types::{CommandAction, CommandOption};
use crate::config::CustomCommand;

/// A built menu: one option per config entry plus a trailing cancel entry
#[derive(Debug, Clone)]
pub struct CommandMenu {
    pub(super) title: String,
    pub(super) waiting_status: String,
    pub(super) options: Vec<CommandOption>,
}

impl CommandMenu {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn options(&self) -> &[CommandOption] {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Never true; the cancel entry is always present
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

/// Build the options for `definitions`, resolving templates against `context`
///
/// Entries whose template fails to resolve keep their slot; confirming one
/// shows the resolution error.
pub fn create_command_menu<C: Serialize + ?Sized>(
    definitions: &[CustomCommand],
    context: &C,
    title: &str,
    waiting_status: &str,
    cancel_label: &str,
) -> CommandMenu {
    let mut options: Vec<CommandOption> = definitions
        .iter()
        .map(|definition| build_option(definition, context))
        .collect();
    options.push(CommandOption::cancel(cancel_label));

    CommandMenu {
        title: title.to_string(),
        waiting_status: waiting_status.to_string(),
        options,
    }
}

fn build_option<C: Serialize + ?Sized>(definition: &CustomCommand, context: &C) -> CommandOption {
    let resolved = resolve(&definition.command, context);
    let description = with_short_sha(resolved.as_deref().unwrap_or(&definition.command));

    let action = match definition.internal_function() {
        Some(function) => CommandAction::Internal {
            definition: definition.clone(),
            function: function.to_string(),
        },
        None => CommandAction::Run {
            definition: definition.clone(),
            resolved,
            attach: definition.attach,
        },
    };

    CommandOption {
        name: definition.name.clone(),
        description,
        action,
    }
}
