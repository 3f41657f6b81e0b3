//! Custom command menus
//!
//! Users describe extra actions for each dashboard panel in their config
//! file. Each action is either a shell command template or the name of one
//! of the dashboard's built-in operations:
//!
//! ```yaml
//! customCommands:
//!   containers:
//!     - name: bash
//!       command: "docker exec -it {{ .Container.ID }} /bin/sh"
//!       attach: true
//! bulkCommands:
//!   containers:
//!     - name: stop all containers
//!       internalFunction: stopContainers
//! ```
//!
//! # Template Variables
//!
//! Placeholders use `{{ .Path }}` syntax and are resolved against a
//! [`CommandObject`]:
//!
//! - `{{ .Project }}`, `{{ .DockerCompose }}`
//! - `{{ .Container.ID }}`, `{{ .Container.Name }}`, `{{ .Container.Image }}`
//! - `{{ .Service.Name }}`, `{{ .Image.ID }}`, `{{ .Image.Name }}`, `{{ .Image.Tag }}`
//! - `{{ .Volume.Name }}`, `{{ .Network.Name }}`
//!
//! # Execution
//!
//! Confirming a menu entry ends in exactly one [`MenuOutcome`]:
//!
//! | Entry | Outcome |
//! |-------|---------|
//! | Cancel | `Cancelled` |
//! | `internalFunction` set | handler runs, `Completed` |
//! | `attach: true` | `Delegate(handle)`, the host runs the process in the foreground |
//! | otherwise | command runs under the waiting status, `Completed` |
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use berth_core::commands::{open_custom_command_menu, CommandObject, MenuOutcome};
//!
//! let context = CommandObject::new("shop").with_container(container);
//! match open_custom_command_menu(&mut host, &config.custom_commands.containers, &context).await? {
//!     MenuOutcome::Delegate(handle) => run_in_foreground(handle)?,
//!     _ => {}
//! }
//! ```

pub mod menu;
pub mod registry;
pub mod template;
pub mod types;

pub use menu::{
    CommandHost, CommandMenu, create_command_menu, open_bulk_command_menu, open_command_menu,
    open_custom_command_menu,
};
pub use registry::InternalFunction;
pub use template::{resolve, with_short_sha};
pub use types::{
    CommandAction, CommandObject, CommandOption, ContainerRef, ImageRef, MenuOutcome, NetworkRef,
    ServiceRef, VolumeRef,
};
