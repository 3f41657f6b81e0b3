//! Command routing

use anyhow::{Context, Result, bail};
use berth_core::commands::{resolve, with_short_sha};
use berth_core::config::{CommandScope, CustomCommand, UserConfig, load_config};
use berth_core::{CommandObject, MenuOutcome, open_bulk_command_menu, open_custom_command_menu};
use colored::*;
use console::Term;
use tracing::debug;

use crate::args::{Cli, Commands, TargetArgs};
use crate::host::CliHost;

#[derive(Debug, Clone, Copy)]
enum MenuKind {
    Custom,
    Bulk,
}

/// Route CLI commands to their handlers
pub async fn route(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref()).context("failed to load config")?;

    match cli.command {
        Commands::Custom { scope, target } => {
            let scope = CommandScope::from(scope);
            let definitions = custom_definitions(&config, scope, &target);
            let context = target.to_context(&config.command_templates.docker_compose);
            run_menu(&config, cli.yes, MenuKind::Custom, &definitions, &context).await
        }
        Commands::Bulk { scope, target } => {
            let definitions = config.bulk_commands.for_scope(scope.into()).to_vec();
            let context = target.to_context(&config.command_templates.docker_compose);
            run_menu(&config, cli.yes, MenuKind::Bulk, &definitions, &context).await
        }
        Commands::List { scope, target } => {
            let context = target.to_context(&config.command_templates.docker_compose);
            list_commands(&config, scope.map(CommandScope::from), &context);
            Ok(())
        }
        Commands::Validate => validate(&config),
    }
}

/// Service menus only offer the commands configured for that service
fn custom_definitions(
    config: &UserConfig,
    scope: CommandScope,
    target: &TargetArgs,
) -> Vec<CustomCommand> {
    match (scope, &target.service) {
        (CommandScope::Services, Some(service)) => config.custom_commands.for_service(service),
        _ => config.custom_commands.for_scope(scope).to_vec(),
    }
}

/// Keep presenting the menu until the user cancels
async fn run_menu(
    config: &UserConfig,
    assume_yes: bool,
    kind: MenuKind,
    definitions: &[CustomCommand],
    context: &CommandObject,
) -> Result<()> {
    let mut host = CliHost::new(config, assume_yes);

    loop {
        let outcome = match kind {
            MenuKind::Custom => open_custom_command_menu(&mut host, definitions, context).await?,
            MenuKind::Bulk => open_bulk_command_menu(&mut host, definitions, context).await?,
        };
        debug!(?outcome, "menu closed");

        match outcome {
            MenuOutcome::Cancelled => return Ok(()),
            MenuOutcome::Delegate(_) => {
                if let Some(handle) = host.take_subprocess() {
                    run_subprocess(&host, handle).await?;
                }
            }
            MenuOutcome::Completed(Ok(())) => match host.take_declined() {
                Some(function) => host.console().warn(&format!("{} skipped", function)),
                None => host.console().success("done"),
            },
            MenuOutcome::Completed(Err(_)) => {}
        }
    }
}

/// Give the terminal to `handle` until it exits
async fn run_subprocess(host: &CliHost, handle: berth_core::ProcessHandle) -> Result<()> {
    let status = tokio::process::Command::from(handle.to_command())
        .status()
        .await
        .with_context(|| format!("failed to start '{}'", handle.command))?;

    if !status.success() {
        host.console()
            .warn(&format!("'{}' exited with {}", handle.command, status));
    }

    eprintln!("{}", "press enter to return to berth".dimmed());
    Term::stderr().read_line().context("failed to read from terminal")?;
    Ok(())
}

fn list_commands(config: &UserConfig, only: Option<CommandScope>, context: &CommandObject) {
    let scopes: Vec<CommandScope> = match only {
        Some(scope) => vec![scope],
        None => CommandScope::ALL.to_vec(),
    };

    for (label, set) in [("custom", &config.custom_commands), ("bulk", &config.bulk_commands)] {
        for scope in &scopes {
            let commands = set.for_scope(*scope);
            if commands.is_empty() {
                continue;
            }
            println!("{}", format!("{} {}", label, scope).bold().underline());
            for command in commands {
                println!("  {:24} {}", command.name, describe(command, context));
            }
            println!();
        }
    }
}

fn describe(command: &CustomCommand, context: &CommandObject) -> ColoredString {
    if let Some(function) = command.internal_function() {
        return format!("<{}>", function).yellow();
    }
    let mode = if command.attach { " (attached)" } else { "" };
    match resolve(&command.command, context) {
        Ok(resolved) => format!("{}{}", with_short_sha(&resolved), mode).cyan(),
        Err(_) => format!("{}{}", command.command, mode).dimmed(),
    }
}

fn validate(config: &UserConfig) -> Result<()> {
    let unknown = config.unknown_internal_functions();
    if unknown.is_empty() {
        println!("{} config is valid", "✓".green().bold());
        return Ok(());
    }

    for (scope, command, function) in &unknown {
        eprintln!(
            "{} {} command '{}': unknown internal function '{}'",
            "✗".red().bold(),
            scope,
            command,
            function
        );
    }
    bail!("{} unknown internal function(s)", unknown.len())
}
