//! berth core library
//!
//! Custom command menus for a terminal container dashboard: user-defined
//! command templates are resolved against the selected item, shown as a
//! menu, and the chosen entry is run as a built-in operation, a foreground
//! subprocess, or a background command under a busy indicator.

pub mod commands;
pub mod config;
pub mod error;
pub mod i18n;
pub mod process;

// Re-export commonly used types
pub use commands::{
    CommandHost, CommandMenu, CommandObject, CommandOption, InternalFunction, MenuOutcome,
    create_command_menu, open_bulk_command_menu, open_command_menu, open_custom_command_menu,
};
pub use config::{CommandScope, CustomCommand, CustomCommands, UserConfig, load_config};
pub use error::{BerthError, BerthResult};
pub use i18n::TranslationSet;
pub use process::{OsCommand, ProcessHandle, ProcessRunner, SubprocessSlot};
