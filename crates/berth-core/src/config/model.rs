//! Configuration model

use std::fmt;

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::commands::InternalFunction;

/// One user-defined menu entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomCommand {
    /// Label shown in the menu
    pub name: String,
    /// Shell command template
    #[serde(default)]
    pub command: String,
    /// Run in the foreground, handing the terminal to the process
    #[serde(default)]
    pub attach: bool,
    /// Built-in operation to run instead of `command`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub internal_function: Option<String>,
    /// Services this entry applies to; empty means all of them
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub service_names: Vec<String>,
}

impl CustomCommand {
    /// Create a shell command entry
    pub fn new(name: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            command: command.into(),
            ..Self::default()
        }
    }

    /// Create an entry that runs a built-in operation
    pub fn internal(name: impl Into<String>, function: InternalFunction) -> Self {
        Self {
            name: name.into(),
            internal_function: Some(function.name().to_string()),
            ..Self::default()
        }
    }

    /// Mark as attached
    pub fn attached(mut self) -> Self {
        self.attach = true;
        self
    }

    /// Restrict to the given services
    pub fn for_services<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.service_names = names.into_iter().map(Into::into).collect();
        self
    }

    /// The internal function name, treating an empty string as unset
    pub fn internal_function(&self) -> Option<&str> {
        self.internal_function
            .as_deref()
            .filter(|name| !name.is_empty())
    }

    /// Whether this entry is offered for `service`
    pub fn applies_to_service(&self, service: &str) -> bool {
        self.service_names.is_empty() || self.service_names.iter().any(|s| s == service)
    }
}

/// Dashboard panel a set of commands belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandScope {
    Containers,
    Services,
    Images,
    Volumes,
    Networks,
}

impl CommandScope {
    pub const ALL: [CommandScope; 5] = [
        Self::Containers,
        Self::Services,
        Self::Images,
        Self::Volumes,
        Self::Networks,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Containers => "containers",
            Self::Services => "services",
            Self::Images => "images",
            Self::Volumes => "volumes",
            Self::Networks => "networks",
        }
    }
}

impl fmt::Display for CommandScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Commands for each dashboard panel
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CustomCommands {
    pub containers: Vec<CustomCommand>,
    pub services: Vec<CustomCommand>,
    pub images: Vec<CustomCommand>,
    pub volumes: Vec<CustomCommand>,
    pub networks: Vec<CustomCommand>,
}

impl CustomCommands {
    /// Commands for one panel
    pub fn for_scope(&self, scope: CommandScope) -> &[CustomCommand] {
        match scope {
            CommandScope::Containers => &self.containers,
            CommandScope::Services => &self.services,
            CommandScope::Images => &self.images,
            CommandScope::Volumes => &self.volumes,
            CommandScope::Networks => &self.networks,
        }
    }

    /// Service commands offered for `service`, in config order
    pub fn for_service(&self, service: &str) -> Vec<CustomCommand> {
        self.services
            .iter()
            .filter(|cmd| cmd.applies_to_service(service))
            .cloned()
            .collect()
    }

    /// Every command with its panel
    pub fn iter(&self) -> impl Iterator<Item = (CommandScope, &CustomCommand)> {
        CommandScope::ALL
            .into_iter()
            .flat_map(move |scope| self.for_scope(scope).iter().map(move |cmd| (scope, cmd)))
    }
}

/// Shell used to run command templates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OsConfig {
    pub shell: String,
    pub shell_arg: String,
}

impl Default for OsConfig {
    fn default() -> Self {
        if cfg!(windows) {
            Self {
                shell: "cmd".to_string(),
                shell_arg: "/C".to_string(),
            }
        } else {
            Self {
                shell: "sh".to_string(),
                shell_arg: "-c".to_string(),
            }
        }
    }
}

/// Commands substituted into templates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CommandTemplatesConfig {
    /// Value of `{{ .DockerCompose }}`
    pub docker_compose: String,
}

impl Default for CommandTemplatesConfig {
    fn default() -> Self {
        Self {
            docker_compose: "docker compose".to_string(),
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserConfig {
    /// Per-item menus (`berth custom`)
    pub custom_commands: CustomCommands,
    /// Panel-wide menus (`berth bulk`)
    pub bulk_commands: CustomCommands,
    pub os: OsConfig,
    pub command_templates: CommandTemplatesConfig,
    /// Refuse to load a config naming unknown internal functions
    pub strict_internal_functions: bool,
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            custom_commands: defaults::custom_commands(),
            bulk_commands: defaults::bulk_commands(),
            os: OsConfig::default(),
            command_templates: CommandTemplatesConfig::default(),
            strict_internal_functions: false,
        }
    }
}

impl UserConfig {
    /// `(scope, command name, function name)` for every entry naming an
    /// internal function that does not exist
    pub fn unknown_internal_functions(&self) -> Vec<(CommandScope, String, String)> {
        self.custom_commands
            .iter()
            .chain(self.bulk_commands.iter())
            .filter_map(|(scope, cmd)| {
                let name = cmd.internal_function()?;
                match InternalFunction::lookup(name) {
                    Some(_) => None,
                    None => Some((scope, cmd.name.clone(), name.to_string())),
                }
            })
            .collect()
    }
}
