//! Custom command menus
//!
//! [`create_command_menu`] turns config entries into menu options;
//! [`CommandMenu::confirm`] runs whichever one the user picked. The
//! `open_*` functions do both through a [`CommandHost`].

mod dispatch;
mod host;
mod menu;

pub use dispatch::{open_bulk_command_menu, open_command_menu, open_custom_command_menu};
pub use host::CommandHost;
pub use menu::{CommandMenu, create_command_menu};

#[cfg(test)]
mod tests;
