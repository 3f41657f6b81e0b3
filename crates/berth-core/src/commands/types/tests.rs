//! Tests for command types

use super::*;
use crate::config::CustomCommand;
use crate::error::BerthError;
use crate::process::ProcessHandle;

#[test]
fn test_context_serializes_template_names() {
    let context = CommandObject::new("shop")
        .with_docker_compose("docker compose")
        .with_container(ContainerRef::new("abc", "web").with_image("nginx"));
    let value = serde_json::to_value(&context).unwrap();

    assert_eq!(value["Project"], "shop");
    assert_eq!(value["DockerCompose"], "docker compose");
    assert_eq!(value["Container"]["ID"], "abc");
    assert_eq!(value["Container"]["Name"], "web");
    assert!(value["Image"].is_null());
}

#[test]
fn test_cancel_option() {
    let option = CommandOption::cancel("Cancel");
    assert!(!option.run_command());
    assert!(!option.attach());
    assert!(option.command().is_none());
    assert!(option.definition().is_none());
}

#[test]
fn test_run_option_accessors() {
    let definition = CustomCommand::new("shell", "docker exec -it abc sh").attached();
    let option = CommandOption {
        name: "shell".to_string(),
        description: "docker exec -it abc sh".to_string(),
        action: CommandAction::Run {
            definition: definition.clone(),
            resolved: Ok("docker exec -it abc sh".to_string()),
            attach: true,
        },
    };

    assert!(option.run_command());
    assert!(option.attach());
    assert_eq!(option.command(), Some("docker exec -it abc sh"));
    assert_eq!(option.definition(), Some(&definition));
}

#[test]
fn test_failed_run_option_has_no_command() {
    let option = CommandOption {
        name: "bad".to_string(),
        description: String::new(),
        action: CommandAction::Run {
            definition: CustomCommand::new("bad", "{{ .Nope }}"),
            resolved: Err(BerthError::template("{{ .Nope }}", "missing")),
            attach: false,
        },
    };

    assert!(option.run_command());
    assert!(option.command().is_none());
}

#[test]
fn test_outcome_helpers() {
    assert!(MenuOutcome::Cancelled.is_cancelled());
    assert!(MenuOutcome::Delegate(ProcessHandle::new("sh", "-c", "top")).is_delegate());
    assert!(MenuOutcome::Completed(Ok(())).is_success());

    let failed = MenuOutcome::Completed(Err("boom".to_string()));
    assert!(!failed.is_success());
    assert_eq!(failed.error_message(), Some("boom"));
}
