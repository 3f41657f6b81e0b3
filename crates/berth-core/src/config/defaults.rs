//! Built-in command sets

use super::model::{CustomCommand, CustomCommands};
use crate::commands::InternalFunction;

pub(super) fn custom_commands() -> CustomCommands {
    CustomCommands {
        containers: vec![
            CustomCommand::new("bash", "docker exec -it {{ .Container.ID }} /bin/bash").attached(),
            CustomCommand::new("sh", "docker exec -it {{ .Container.ID }} /bin/sh").attached(),
            CustomCommand::new("follow logs", "docker logs --follow --tail 200 {{ .Container.ID }}")
                .attached(),
        ],
        services: vec![
            CustomCommand::new(
                "restart",
                "{{ .DockerCompose }} -p {{ .Project }} restart {{ .Service.Name }}",
            ),
            CustomCommand::new(
                "rebuild",
                "{{ .DockerCompose }} -p {{ .Project }} up -d --build {{ .Service.Name }}",
            )
            .attached(),
        ],
        images: Vec::new(),
        volumes: Vec::new(),
        networks: Vec::new(),
    }
}

pub(super) fn bulk_commands() -> CustomCommands {
    CustomCommands {
        containers: vec![
            CustomCommand::internal("stop all containers", InternalFunction::StopContainers),
            CustomCommand::internal("remove all containers", InternalFunction::RemoveContainers),
            CustomCommand::internal("prune exited containers", InternalFunction::PruneContainers),
        ],
        services: vec![
            CustomCommand::new("up", "{{ .DockerCompose }} up -d"),
            CustomCommand::new("up (attached)", "{{ .DockerCompose }} up").attached(),
            CustomCommand::new("stop", "{{ .DockerCompose }} stop"),
            CustomCommand::new("pull", "{{ .DockerCompose }} pull").attached(),
            CustomCommand::new("build", "{{ .DockerCompose }} up --build -d").attached(),
            CustomCommand::new("down", "{{ .DockerCompose }} down"),
            CustomCommand::new("down with volumes", "{{ .DockerCompose }} down --volumes"),
            CustomCommand::new("down with images", "{{ .DockerCompose }} down --rmi all"),
        ],
        images: vec![CustomCommand::internal(
            "prune unused images",
            InternalFunction::PruneImages,
        )],
        volumes: vec![CustomCommand::internal(
            "prune unused volumes",
            InternalFunction::PruneVolumes,
        )],
        networks: vec![CustomCommand::new(
            "prune unused networks",
            "docker network prune -f",
        )],
    }
}
