//! User configuration
//!
//! Loaded from `~/.config/berth/config.yml` (or the file named by
//! `BERTH_CONFIG`). YAML, TOML and JSON are accepted based on the file
//! extension. Any top-level section left out of the file keeps its default.

mod defaults;
mod file_loader;
mod model;

pub use file_loader::{default_config_path, load_config, load_from_file};
pub use model::{
    CommandScope, CommandTemplatesConfig, CustomCommand, CustomCommands, OsConfig, UserConfig,
};
