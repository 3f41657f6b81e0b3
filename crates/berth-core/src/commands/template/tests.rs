//! Tests for template resolution

use super::*;
use crate::commands::types::{CommandObject, ContainerRef, ServiceRef};

const SHA: &str = "4f3c1a9b2d8e7f6a5b4c3d2e1f0a9b8c7d6e5f4a3b2c1d0e9f8a7b6c5d4e3f2a";

fn container_context() -> CommandObject {
    CommandObject::new("shop")
        .with_docker_compose("docker compose")
        .with_container(ContainerRef::new(SHA, "shop-web-1").with_image("nginx:1.27"))
}

#[test]
fn test_resolve_plain_command() {
    let resolved = resolve("docker ps", &CommandObject::default()).unwrap();
    assert_eq!(resolved, "docker ps");
}

#[test]
fn test_resolve_nested_fields() {
    let resolved = resolve(
        "docker exec -it {{ .Container.ID }} sh # {{.Container.Name}}",
        &container_context(),
    )
    .unwrap();
    assert_eq!(resolved, format!("docker exec -it {} sh # shop-web-1", SHA));
}

#[test]
fn test_resolve_top_level_fields() {
    let resolved = resolve("{{ .DockerCompose }} -p {{ .Project }} up -d", &container_context())
        .unwrap();
    assert_eq!(resolved, "docker compose -p shop up -d");
}

#[test]
fn test_resolve_unknown_field_is_error() {
    let err = resolve("docker rm {{ .Container.Uuid }}", &container_context()).unwrap_err();
    match err {
        BerthError::Template { template, message } => {
            assert_eq!(template, "docker rm {{ .Container.Uuid }}");
            assert!(message.contains(".Container.Uuid"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_resolve_unset_item_is_error() {
    let err = resolve("docker image rm {{ .Image.ID }}", &container_context()).unwrap_err();
    assert!(err.message().contains("'.Image' is not set"));
}

#[test]
fn test_resolve_unset_leaf_is_error() {
    let context = CommandObject::new("shop").with_service(ServiceRef::new("web"));
    let err = resolve("docker logs {{ .Service.ContainerID }}", &context).unwrap_err();
    assert!(err.message().contains("'.Service.ContainerID' is not set"));
}

#[test]
fn test_resolve_rejects_non_scalar() {
    let err = resolve("echo {{ .Container }}", &container_context()).unwrap_err();
    assert!(err.message().contains("not a single value"));
}

#[test]
fn test_resolve_rejects_bad_expressions() {
    assert!(resolve("echo {{ Container.ID }}", &container_context()).is_err());
    assert!(resolve("echo {{ .Container..ID }}", &container_context()).is_err());
    assert!(resolve("echo {{ .Container.ID", &container_context()).is_err());
}

#[test]
fn test_resolve_is_deterministic() {
    let context = container_context();
    let template = "docker restart {{ .Container.ID }}";

    let first = resolve(template, &context).unwrap();
    let second = resolve(template, &context).unwrap();
    assert_eq!(first, second);
    assert_eq!(with_short_sha(&first), with_short_sha(&second));
}

#[test]
fn test_with_short_sha() {
    let command = format!("docker rm {} --force", SHA);
    assert_eq!(with_short_sha(&command), "docker rm 4f3c1a9b2d --force");
}

#[test]
fn test_with_short_sha_leaves_other_words() {
    let not_hex = "z".repeat(64);
    let command = format!("echo {} {}", not_hex, &SHA[..63]);
    assert_eq!(with_short_sha(&command), command);
}

#[test]
fn test_with_short_sha_is_idempotent() {
    let once = with_short_sha(&format!("docker inspect {}", SHA));
    assert_eq!(with_short_sha(&once), once);
}
