//! Tests for menu construction and dispatch

use async_trait::async_trait;

use super::*;
use crate::commands::registry::InternalFunction;
use crate::commands::types::{
    CommandAction, CommandObject, CommandOption, ContainerRef, MenuOutcome,
};
use crate::config::CustomCommand;
use crate::error::{BerthError, BerthResult};
use crate::i18n::TranslationSet;
use crate::process::{MockProcessRunner, ProcessHandle, ProcessRunner, SubprocessSlot};

const SHA: &str = "0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef";

#[derive(Debug, Clone, PartialEq)]
enum Event {
    StartWaiting(String),
    StopWaiting,
    Error(String),
    Internal(InternalFunction),
}

struct FakeHost {
    runner: MockProcessRunner,
    labels: TranslationSet,
    selection: Option<usize>,
    presented: Vec<(String, Vec<String>)>,
    events: Vec<Event>,
    subprocess: SubprocessSlot,
    internal_result: BerthResult<()>,
    panel_fails: bool,
}

impl FakeHost {
    fn new(runner: MockProcessRunner) -> Self {
        Self {
            runner,
            labels: TranslationSet::default(),
            selection: None,
            presented: Vec::new(),
            events: Vec::new(),
            subprocess: SubprocessSlot::new(),
            internal_result: Ok(()),
            panel_fails: false,
        }
    }

    /// A host whose runner must not be asked to do anything
    fn idle() -> Self {
        let mut runner = MockProcessRunner::new();
        runner.expect_run_command().never();
        runner.expect_executable_from_string().never();
        Self::new(runner)
    }

    fn selecting(mut self, index: usize) -> Self {
        self.selection = Some(index);
        self
    }

    fn errors(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Error(msg) => Some(msg.as_str()),
                _ => None,
            })
            .collect()
    }
}

#[async_trait]
impl CommandHost for FakeHost {
    fn present_menu(
        &mut self,
        title: &str,
        options: &[CommandOption],
    ) -> BerthResult<Option<usize>> {
        self.presented.push((
            title.to_string(),
            options.iter().map(|o| o.name.clone()).collect(),
        ));
        Ok(self.selection)
    }

    fn show_error(&mut self, message: &str) -> BerthResult<()> {
        if self.panel_fails {
            return Err(BerthError::ui("terminal closed"));
        }
        self.events.push(Event::Error(message.to_string()));
        Ok(())
    }

    fn start_waiting(&mut self, label: &str) {
        self.events.push(Event::StartWaiting(label.to_string()));
    }

    fn stop_waiting(&mut self) {
        self.events.push(Event::StopWaiting);
    }

    fn set_subprocess(&mut self, handle: ProcessHandle) {
        self.subprocess.set(handle);
    }

    async fn invoke_internal(&mut self, function: InternalFunction) -> BerthResult<()> {
        self.events.push(Event::Internal(function));
        self.internal_result.clone()
    }

    fn os_command(&self) -> &dyn ProcessRunner {
        &self.runner
    }

    fn labels(&self) -> &TranslationSet {
        &self.labels
    }
}

fn context() -> CommandObject {
    CommandObject::new("shop").with_container(ContainerRef::new(SHA, "shop-web-1"))
}

fn menu_for(definitions: &[CustomCommand]) -> CommandMenu {
    create_command_menu(definitions, &context(), "Custom Command:", "running", "Cancel")
}

#[test]
fn test_menu_appends_cancel() {
    let definitions = vec![
        CustomCommand::new("logs", "docker logs {{ .Container.ID }}"),
        CustomCommand::new("shell", "docker exec -it {{ .Container.ID }} sh").attached(),
        CustomCommand::internal("prune", InternalFunction::PruneImages),
    ];
    let menu = menu_for(&definitions);

    assert_eq!(menu.len(), definitions.len() + 1);
    let names: Vec<_> = menu.options().iter().map(|o| o.name.as_str()).collect();
    assert_eq!(names, vec!["logs", "shell", "prune", "Cancel"]);

    let last = menu.options().last().unwrap();
    assert!(!last.run_command());
    assert!(last.definition().is_none());
    assert!(menu.options()[..3].iter().all(CommandOption::run_command));
    assert!(menu.options()[1].attach());
    assert!(!menu.options()[0].attach());
}

#[test]
fn test_empty_definitions_give_cancel_only_menu() {
    let menu = menu_for(&[]);
    assert_eq!(menu.len(), 1);
    assert!(matches!(menu.options()[0].action, CommandAction::Cancel));
}

#[test]
fn test_option_description_shortens_hashes() {
    let menu = menu_for(&[CustomCommand::new("rm", "docker rm {{ .Container.ID }}")]);
    let option = &menu.options()[0];

    assert_eq!(option.command(), Some(format!("docker rm {}", SHA).as_str()));
    assert_eq!(option.description, "docker rm 0123456789");
    assert_eq!(option.display_strings(), ["rm", "docker rm 0123456789"]);
}

#[test]
fn test_unresolvable_template_keeps_its_slot() {
    let menu = menu_for(&[
        CustomCommand::new("image", "docker image rm {{ .Image.ID }}"),
        CustomCommand::new("ok", "docker ps"),
    ]);

    assert_eq!(menu.len(), 3);
    assert!(menu.options()[0].command().is_none());
    assert_eq!(menu.options()[0].description, "docker image rm {{ .Image.ID }}");
    assert_eq!(menu.options()[1].command(), Some("docker ps"));
}

#[tokio::test]
async fn test_confirm_cancel_does_nothing() {
    let menu = menu_for(&[
        CustomCommand::new("ps", "docker ps"),
        CustomCommand::internal("bogus", InternalFunction::PruneImages),
    ]);
    let mut host = FakeHost::idle();

    let outcome = menu.confirm(2, &mut host).await.unwrap();

    assert_eq!(outcome, MenuOutcome::Cancelled);
    assert!(host.events.is_empty());
    assert!(!host.subprocess.is_occupied());
}

#[tokio::test]
async fn test_confirm_unknown_internal_function() {
    let mut definition = CustomCommand::new("nuke", "");
    definition.internal_function = Some("pruneEverything".to_string());
    let menu = menu_for(&[definition]);
    let mut host = FakeHost::idle();

    let outcome = menu.confirm(0, &mut host).await.unwrap();

    assert_eq!(
        outcome.error_message(),
        Some("Unknown internal function: pruneEverything")
    );
    assert_eq!(host.errors(), vec!["Unknown internal function: pruneEverything"]);
    assert_eq!(host.events.len(), 1);
}

#[tokio::test]
async fn test_confirm_internal_function_runs_handler() {
    let menu = menu_for(&[
        CustomCommand::internal("stop all", InternalFunction::StopContainers).attached(),
    ]);
    let mut host = FakeHost::idle();

    let outcome = menu.confirm(0, &mut host).await.unwrap();

    assert!(outcome.is_success());
    assert_eq!(host.events, vec![Event::Internal(InternalFunction::StopContainers)]);
    assert!(!host.subprocess.is_occupied());
}

#[tokio::test]
async fn test_confirm_internal_function_failure_is_panel() {
    let menu = menu_for(&[CustomCommand::internal("prune", InternalFunction::PruneVolumes)]);
    let mut host = FakeHost::idle();
    host.internal_result = Err(BerthError::process("volume in use"));

    let outcome = menu.confirm(0, &mut host).await.unwrap();

    assert_eq!(outcome.error_message(), Some("volume in use"));
    assert_eq!(host.errors(), vec!["volume in use"]);
}

#[tokio::test]
async fn test_confirm_attach_delegates() {
    let expected_command = format!("docker exec -it {} sh", SHA);
    let mut runner = MockProcessRunner::new();
    runner.expect_run_command().never();
    runner
        .expect_executable_from_string()
        .withf(move |command| command.to_string() == expected_command)
        .times(1)
        .returning(|command| ProcessHandle::new("sh", "-c", command.to_string()));
    let menu = menu_for(&[
        CustomCommand::new("shell", "docker exec -it {{ .Container.ID }} sh").attached(),
    ]);
    let mut host = FakeHost::new(runner);

    let outcome = menu.confirm(0, &mut host).await.unwrap();

    let expected = ProcessHandle::new("sh", "-c", format!("docker exec -it {} sh", SHA));
    assert_eq!(outcome, MenuOutcome::Delegate(expected.clone()));
    assert_eq!(host.subprocess.take(), Some(expected));
    assert!(host.errors().is_empty());
}

#[tokio::test]
async fn test_confirm_detached_success() {
    let expected_command = format!("docker restart {}", SHA);
    let mut runner = MockProcessRunner::new();
    runner
        .expect_run_command()
        .withf(move |command| command.to_string() == expected_command)
        .times(1)
        .returning(|_| Ok(()));
    let menu = menu_for(&[CustomCommand::new("restart", "docker restart {{ .Container.ID }}")]);
    let mut host = FakeHost::new(runner);

    let outcome = menu.confirm(0, &mut host).await.unwrap();

    assert!(outcome.is_success());
    assert_eq!(
        host.events,
        vec![Event::StartWaiting("running".to_string()), Event::StopWaiting]
    );
}

#[tokio::test]
async fn test_confirm_detached_failure_is_panel() {
    let mut runner = MockProcessRunner::new();
    runner.expect_run_command().times(1).returning(|command| {
        Err(BerthError::process_exit(
            "Error response from daemon: No such container",
            command.to_string(),
            Some(1),
        ))
    });
    let menu = menu_for(&[CustomCommand::new("restart", "docker restart {{ .Container.ID }}")]);
    let mut host = FakeHost::new(runner);

    let outcome = menu.confirm(0, &mut host).await.unwrap();

    assert_eq!(
        outcome,
        MenuOutcome::Completed(Err("Error response from daemon: No such container".to_string()))
    );
    assert_eq!(
        host.events,
        vec![
            Event::StartWaiting("running".to_string()),
            Event::StopWaiting,
            Event::Error("Error response from daemon: No such container".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_confirm_template_error_is_panel() {
    let menu = menu_for(&[CustomCommand::new("image", "docker image rm {{ .Image.ID }}").attached()]);
    let mut host = FakeHost::idle();

    let outcome = menu.confirm(0, &mut host).await.unwrap();

    let message = outcome.error_message().unwrap();
    assert!(message.contains("'.Image' is not set"));
    assert_eq!(host.errors(), vec![message]);
    assert!(!host.subprocess.is_occupied());
}

#[tokio::test]
async fn test_confirm_out_of_range() {
    let menu = menu_for(&[]);
    let mut host = FakeHost::idle();

    let err = menu.confirm(1, &mut host).await.unwrap_err();
    assert!(matches!(err, BerthError::InvalidInput { .. }));
}

#[tokio::test]
async fn test_panel_failure_propagates() {
    let menu = menu_for(&[CustomCommand::new("bad", "echo {{ .Nope }}")]);
    let mut host = FakeHost::idle();
    host.panel_fails = true;

    let err = menu.confirm(0, &mut host).await.unwrap_err();
    assert_eq!(err, BerthError::ui("terminal closed"));
}

#[tokio::test]
async fn test_open_custom_command_menu_uses_custom_labels() {
    let mut runner = MockProcessRunner::new();
    runner.expect_run_command().times(1).returning(|_| Ok(()));
    let mut host = FakeHost::new(runner).selecting(0);

    let outcome = open_custom_command_menu(
        &mut host,
        &[CustomCommand::new("ps", "docker ps")],
        &context(),
    )
    .await
    .unwrap();

    assert!(outcome.is_success());
    assert_eq!(
        host.presented,
        vec![(
            "Custom Command:".to_string(),
            vec!["ps".to_string(), "Cancel".to_string()]
        )]
    );
    assert_eq!(
        host.events[0],
        Event::StartWaiting("running custom command".to_string())
    );
}

#[tokio::test]
async fn test_open_bulk_command_menu_uses_bulk_labels() {
    let mut runner = MockProcessRunner::new();
    runner.expect_run_command().times(1).returning(|_| Ok(()));
    let mut host = FakeHost::new(runner).selecting(0);

    open_bulk_command_menu(
        &mut host,
        &[CustomCommand::new("down", "docker compose down")],
        &context(),
    )
    .await
    .unwrap();

    assert_eq!(host.presented[0].0, "Bulk Command:");
    assert_eq!(
        host.events[0],
        Event::StartWaiting("running bulk command".to_string())
    );
}

#[tokio::test]
async fn test_dismissed_menu_is_cancelled() {
    let mut host = FakeHost::idle();

    let outcome = open_custom_command_menu(
        &mut host,
        &[CustomCommand::new("ps", "docker ps")],
        &context(),
    )
    .await
    .unwrap();

    assert!(outcome.is_cancelled());
    assert!(host.events.is_empty());
}
