//! Terminal host for command menus

use async_trait::async_trait;
use berth_core::commands::{CommandHost, CommandOption};
use berth_core::config::UserConfig;
use berth_core::{
    BerthError, BerthResult, InternalFunction, OsCommand, ProcessHandle, ProcessRunner,
    SubprocessSlot, TranslationSet,
};
use colored::*;
use dialoguer::{Confirm, Select, theme::ColorfulTheme};
use tracing::info;

use crate::console::{CliConsole, WaitingSpinner};
use crate::docker;

/// [`CommandHost`] drawing menus with dialoguer and running docker locally
pub struct CliHost {
    os: OsCommand,
    labels: TranslationSet,
    console: CliConsole,
    subprocess: SubprocessSlot,
    spinner: Option<WaitingSpinner>,
    assume_yes: bool,
    declined: Option<InternalFunction>,
}

impl CliHost {
    pub fn new(config: &UserConfig, assume_yes: bool) -> Self {
        Self {
            os: OsCommand::from_config(&config.os),
            labels: TranslationSet::default(),
            console: CliConsole::new(),
            subprocess: SubprocessSlot::new(),
            spinner: None,
            assume_yes,
            declined: None,
        }
    }

    /// The process a menu handed the terminal to, if any
    pub fn take_subprocess(&mut self) -> Option<ProcessHandle> {
        self.subprocess.take()
    }

    /// The internal function the user refused to run since the last call
    pub fn take_declined(&mut self) -> Option<InternalFunction> {
        self.declined.take()
    }

    pub fn console(&self) -> &CliConsole {
        &self.console
    }

    /// Confirm `function`, remembering a refusal for [`Self::take_declined`]
    fn approve(&mut self, function: InternalFunction) -> BerthResult<bool> {
        self.declined = None;
        let approved = self.confirm(function)?;
        if !approved {
            info!(function = %function, "declined by user");
            self.declined = Some(function);
        }
        Ok(approved)
    }

    fn confirm(&self, function: InternalFunction) -> BerthResult<bool> {
        if self.assume_yes || !function.is_destructive() {
            return Ok(true);
        }
        Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("Run {}? This cannot be undone", function))
            .default(false)
            .interact()
            .map_err(|e| BerthError::ui(format!("confirmation error: {}", e)))
    }
}

#[async_trait]
impl CommandHost for CliHost {
    fn present_menu(
        &mut self,
        title: &str,
        options: &[CommandOption],
    ) -> BerthResult<Option<usize>> {
        let width = options
            .iter()
            .map(|o| o.name.chars().count())
            .max()
            .unwrap_or(0);
        let items: Vec<String> = options
            .iter()
            .map(|option| {
                let [name, description] = option.display_strings();
                format!("{:width$}  {}", name, description.cyan(), width = width)
            })
            .collect();

        Select::with_theme(&ColorfulTheme::default())
            .with_prompt(title)
            .items(&items)
            .default(0)
            .interact_opt()
            .map_err(|e| BerthError::ui(format!("selection error: {}", e)))
    }

    fn show_error(&mut self, message: &str) -> BerthResult<()> {
        self.console.error_panel(message);
        Ok(())
    }

    fn start_waiting(&mut self, label: &str) {
        if let Some(previous) = self.spinner.replace(WaitingSpinner::start(label)) {
            previous.finish();
        }
    }

    fn stop_waiting(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish();
        }
    }

    fn set_subprocess(&mut self, handle: ProcessHandle) {
        self.subprocess.set(handle);
    }

    async fn invoke_internal(&mut self, function: InternalFunction) -> BerthResult<()> {
        if !self.approve(function)? {
            return Ok(());
        }

        let spinner = WaitingSpinner::start(&format!("running {}", function));
        let result = docker::run_internal(function).await;
        spinner.finish();
        result
    }

    fn os_command(&self) -> &dyn ProcessRunner {
        &self.os
    }

    fn labels(&self) -> &TranslationSet {
        &self.labels
    }
}
