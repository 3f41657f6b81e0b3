//! Core error types for berth

use thiserror::Error;

/// Result type alias for berth operations
pub type BerthResult<T> = Result<T, BerthError>;

/// Main error type for berth
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BerthError {
    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        context: Option<String>,
    },

    /// A command template could not be resolved against its context
    #[error("Template error in '{template}': {message}")]
    Template { template: String, message: String },

    /// A custom command names an internal function that does not exist
    #[error("Unknown internal function: {name}")]
    InternalFunction { name: String },

    /// A command failed to spawn or exited unsuccessfully
    #[error("{message}")]
    Process {
        message: String,
        command: Option<String>,
        exit_code: Option<i32>,
    },

    /// IO errors
    #[error("IO error: {message}")]
    Io { message: String },

    /// Invalid input errors
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// Menu, panel or terminal failures on the host side
    #[error("UI error: {message}")]
    Ui { message: String },
}

impl BerthError {
    /// Stable code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Config { .. } => "BERTH_CONFIG",
            Self::Template { .. } => "BERTH_TEMPLATE",
            Self::InternalFunction { .. } => "BERTH_INTERNAL_FUNCTION",
            Self::Process { .. } => "BERTH_PROCESS",
            Self::Io { .. } => "BERTH_IO",
            Self::InvalidInput { .. } => "BERTH_INVALID_INPUT",
            Self::Ui { .. } => "BERTH_UI",
        }
    }

    /// The bare message, without the category prefix of `Display`
    pub fn message(&self) -> &str {
        match self {
            Self::Config { message, .. } => message,
            Self::Template { message, .. } => message,
            Self::InternalFunction { name } => name,
            Self::Process { message, .. } => message,
            Self::Io { message } => message,
            Self::InvalidInput { message } => message,
            Self::Ui { message } => message,
        }
    }
}
