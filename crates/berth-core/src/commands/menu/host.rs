//! Host application interface

use async_trait::async_trait;

use crate::commands::registry::InternalFunction;
use crate::commands::types::CommandOption;
use crate::error::BerthResult;
use crate::i18n::TranslationSet;
use crate::process::{ProcessHandle, ProcessRunner};

/// What the dispatcher needs from the application showing the menu
#[async_trait]
pub trait CommandHost: Send {
    /// Show the menu and wait for a choice; `None` if it was dismissed
    fn present_menu(
        &mut self,
        title: &str,
        options: &[CommandOption],
    ) -> BerthResult<Option<usize>>;

    /// Show `message` in an error panel
    fn show_error(&mut self, message: &str) -> BerthResult<()>;

    /// Show the busy indicator while a detached command runs
    fn start_waiting(&mut self, label: &str);

    fn stop_waiting(&mut self);

    /// Store the process that should take over the terminal once the menu returns
    fn set_subprocess(&mut self, handle: ProcessHandle);

    /// Run a built-in operation. Errors are shown to the user by the dispatcher.
    async fn invoke_internal(&mut self, function: InternalFunction) -> BerthResult<()>;

    fn os_command(&self) -> &dyn ProcessRunner;

    fn labels(&self) -> &TranslationSet;
}
