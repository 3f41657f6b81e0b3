//! Constructor methods for BerthError

use super::types::BerthError;

impl BerthError {
    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            context: None,
        }
    }

    /// Create a configuration error with context
    pub fn config_with_context(message: impl Into<String>, context: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            context: Some(context.into()),
        }
    }

    /// Create a template resolution error
    pub fn template(template: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Template {
            template: template.into(),
            message: message.into(),
        }
    }

    /// Create an unknown internal function error
    pub fn internal_function(name: impl Into<String>) -> Self {
        Self::InternalFunction { name: name.into() }
    }

    /// Create a process error
    pub fn process(message: impl Into<String>) -> Self {
        Self::Process {
            message: message.into(),
            command: None,
            exit_code: None,
        }
    }

    /// Create a process error for a command that exited unsuccessfully
    pub fn process_exit(
        message: impl Into<String>,
        command: impl Into<String>,
        exit_code: Option<i32>,
    ) -> Self {
        Self::Process {
            message: message.into(),
            command: Some(command.into()),
            exit_code,
        }
    }

    /// Create a new IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Create a new invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Create a new UI error
    pub fn ui(message: impl Into<String>) -> Self {
        Self::Ui {
            message: message.into(),
        }
    }
}
