//! File-based configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::model::UserConfig;
use crate::error::{BerthError, BerthResult};

/// Environment variable naming an alternative config file
pub const CONFIG_ENV_VAR: &str = "BERTH_CONFIG";

/// `~/.config/berth/config.yml`, or `./berth.yml` when there is no config dir
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .map(|dir| dir.join("berth").join("config.yml"))
        .unwrap_or_else(|| PathBuf::from("berth.yml"))
}

/// Load the config from `path`, `BERTH_CONFIG`, or the default location
///
/// Unknown internal function names are logged; with
/// `strictInternalFunctions` set they fail the load.
pub fn load_config(path: Option<&Path>) -> BerthResult<UserConfig> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => std::env::var_os(CONFIG_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(default_config_path),
    };
    debug!("Loading config from {}", path.display());

    let config = load_from_file(&path)?;

    let unknown = config.unknown_internal_functions();
    for (scope, command, function) in &unknown {
        warn!(
            scope = %scope,
            command = %command,
            "custom command refers to unknown internal function '{}'",
            function
        );
    }
    if config.strict_internal_functions && !unknown.is_empty() {
        let names: Vec<_> = unknown.iter().map(|(_, _, f)| f.as_str()).collect();
        return Err(BerthError::config_with_context(
            format!("Unknown internal functions: {}", names.join(", ")),
            format!("Validating '{}'", path.display()),
        ));
    }

    Ok(config)
}

/// Load configuration from a file
///
/// Supports JSON, TOML, and YAML formats based on file extension.
/// Returns default config if file doesn't exist.
pub fn load_from_file(path: &Path) -> BerthResult<UserConfig> {
    if !path.exists() {
        return Ok(UserConfig::default());
    }

    let content = fs::read_to_string(path).map_err(|e| {
        BerthError::config_with_context(
            format!("Failed to read config file: {}", e),
            format!("Reading configuration from '{}'", path.display()),
        )
    })?;

    let config: UserConfig = match path.extension().and_then(|s| s.to_str()) {
        Some("toml") => toml::from_str(&content).map_err(|e| {
            BerthError::config_with_context(
                format!("Failed to parse TOML config: {}", e),
                format!("Deserializing TOML configuration from '{}'", path.display()),
            )
        })?,
        Some("json") => serde_json::from_str(&content).map_err(|e| {
            BerthError::config_with_context(
                format!("Failed to parse JSON config: {}", e),
                format!("Deserializing JSON configuration from '{}'", path.display()),
            )
        })?,
        _ => serde_yaml::from_str(&content).map_err(|e| {
            BerthError::config_with_context(
                format!("Failed to parse YAML config: {}", e),
                format!("Deserializing YAML configuration from '{}'", path.display()),
            )
        })?,
    };

    Ok(config)
}
