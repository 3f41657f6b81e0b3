//! From trait implementations for BerthError conversions

use super::types::BerthError;

impl From<std::io::Error> for BerthError {
    fn from(error: std::io::Error) -> Self {
        Self::io(error.to_string())
    }
}

impl From<serde_json::Error> for BerthError {
    fn from(error: serde_json::Error) -> Self {
        Self::config(format!("JSON error: {}", error))
    }
}

impl From<serde_yaml::Error> for BerthError {
    fn from(error: serde_yaml::Error) -> Self {
        Self::config(format!("YAML error: {}", error))
    }
}

impl From<toml::de::Error> for BerthError {
    fn from(error: toml::de::Error) -> Self {
        Self::config(format!("TOML error: {}", error))
    }
}
