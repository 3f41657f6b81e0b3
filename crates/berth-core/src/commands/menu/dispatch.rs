//! Menu dispatch

use serde::Serialize;
use tracing::{debug, info};

use super::host::CommandHost;
use super::menu::{CommandMenu, create_command_menu};
use crate::commands::registry::InternalFunction;
use crate::commands::types::{CommandAction, MenuOutcome};
use crate::config::CustomCommand;
use crate::error::{BerthError, BerthResult};

impl CommandMenu {
    /// Run the option at `index`
    ///
    /// Failures are shown in an error panel and returned as
    /// `Completed(Err(..))`. `Err` is returned only when the panel itself
    /// could not be shown or `index` is out of range.
    pub async fn confirm(
        &self,
        index: usize,
        host: &mut dyn CommandHost,
    ) -> BerthResult<MenuOutcome> {
        let option = self.options.get(index).ok_or_else(|| {
            BerthError::invalid_input(format!(
                "menu index {} out of range for {} entries",
                index,
                self.options.len()
            ))
        })?;

        match &option.action {
            CommandAction::Cancel => Ok(MenuOutcome::Cancelled),
            CommandAction::Internal { function, .. } => run_internal(host, function).await,
            CommandAction::Run {
                resolved: Err(err), ..
            } => surface(host, err.to_string()),
            CommandAction::Run {
                resolved: Ok(command),
                attach: true,
                ..
            } => {
                let handle = host.os_command().executable_from_string(command);
                info!(command = %command, "handing terminal to subprocess");
                host.set_subprocess(handle.clone());
                Ok(MenuOutcome::Delegate(handle))
            }
            CommandAction::Run {
                resolved: Ok(command),
                attach: false,
                ..
            } => run_detached(host, &self.waiting_status, command).await,
        }
    }
}

/// Build a menu for `definitions`, present it, and run the chosen entry
pub async fn open_command_menu<C: Serialize + ?Sized>(
    host: &mut dyn CommandHost,
    definitions: &[CustomCommand],
    context: &C,
    title: &str,
    waiting_status: &str,
) -> BerthResult<MenuOutcome> {
    let cancel = host.labels().cancel.clone();
    let menu = create_command_menu(definitions, context, title, waiting_status, &cancel);
    debug!(title = %title, entries = menu.len(), "presenting command menu");

    match host.present_menu(menu.title(), menu.options())? {
        Some(index) => menu.confirm(index, host).await,
        None => Ok(MenuOutcome::Cancelled),
    }
}

/// Menu of per-item custom commands
pub async fn open_custom_command_menu<C: Serialize + ?Sized>(
    host: &mut dyn CommandHost,
    definitions: &[CustomCommand],
    context: &C,
) -> BerthResult<MenuOutcome> {
    let labels = host.labels();
    let title = labels.custom_command_title.clone();
    let status = labels.running_custom_command_status.clone();
    open_command_menu(host, definitions, context, &title, &status).await
}

/// Menu of panel-wide bulk commands
pub async fn open_bulk_command_menu<C: Serialize + ?Sized>(
    host: &mut dyn CommandHost,
    definitions: &[CustomCommand],
    context: &C,
) -> BerthResult<MenuOutcome> {
    let labels = host.labels();
    let title = labels.bulk_command_title.clone();
    let status = labels.running_bulk_command_status.clone();
    open_command_menu(host, definitions, context, &title, &status).await
}

async fn run_internal(host: &mut dyn CommandHost, name: &str) -> BerthResult<MenuOutcome> {
    let Some(function) = InternalFunction::lookup(name) else {
        let message = host.labels().unknown_internal_function(name);
        debug!("config refers to unknown internal function '{}'", name);
        return surface(host, message);
    };

    debug!(function = %function, "invoking internal function");
    match host.invoke_internal(function).await {
        Ok(()) => Ok(MenuOutcome::Completed(Ok(()))),
        Err(err) => surface(host, err.to_string()),
    }
}

async fn run_detached(
    host: &mut dyn CommandHost,
    waiting_status: &str,
    command: &str,
) -> BerthResult<MenuOutcome> {
    host.start_waiting(waiting_status);
    let result = host.os_command().run_command(command).await;
    host.stop_waiting();

    match result {
        Ok(()) => Ok(MenuOutcome::Completed(Ok(()))),
        Err(err) => surface(host, err.to_string()),
    }
}

fn surface(host: &mut dyn CommandHost, message: String) -> BerthResult<MenuOutcome> {
    host.show_error(&message)?;
    Ok(MenuOutcome::Completed(Err(message)))
}
