//! Template context types
//!
//! A [`CommandObject`] describes whatever the user had selected when they
//! opened the menu. Field names are serialized in the form templates refer
//! to them (`{{ .Container.ID }}`); unset items serialize as null so the
//! resolver can tell "not selected" apart from "no such field".

use serde::Serialize;

/// Context a command template is resolved against
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CommandObject {
    /// Compose project name
    pub project: String,
    /// Command used to invoke docker compose for this project
    pub docker_compose: String,
    pub container: Option<ContainerRef>,
    pub service: Option<ServiceRef>,
    pub image: Option<ImageRef>,
    pub volume: Option<VolumeRef>,
    pub network: Option<NetworkRef>,
}

impl CommandObject {
    /// Create a context for a compose project
    pub fn new(project: impl Into<String>) -> Self {
        Self {
            project: project.into(),
            ..Self::default()
        }
    }

    /// Set the docker compose invocation
    pub fn with_docker_compose(mut self, docker_compose: impl Into<String>) -> Self {
        self.docker_compose = docker_compose.into();
        self
    }

    /// Set the selected container
    pub fn with_container(mut self, container: ContainerRef) -> Self {
        self.container = Some(container);
        self
    }

    /// Set the selected service
    pub fn with_service(mut self, service: ServiceRef) -> Self {
        self.service = Some(service);
        self
    }

    /// Set the selected image
    pub fn with_image(mut self, image: ImageRef) -> Self {
        self.image = Some(image);
        self
    }

    /// Set the selected volume
    pub fn with_volume(mut self, volume: VolumeRef) -> Self {
        self.volume = Some(volume);
        self
    }

    /// Set the selected network
    pub fn with_network(mut self, network: NetworkRef) -> Self {
        self.network = Some(network);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ContainerRef {
    #[serde(rename = "ID")]
    pub id: String,
    pub name: String,
    pub image: String,
}

impl ContainerRef {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            image: String::new(),
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ServiceRef {
    pub name: String,
    /// Container currently backing the service, if it is running
    #[serde(rename = "ContainerID")]
    pub container_id: Option<String>,
}

impl ServiceRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            container_id: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ImageRef {
    #[serde(rename = "ID")]
    pub id: String,
    pub name: String,
    pub tag: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct VolumeRef {
    pub name: String,
    pub driver: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct NetworkRef {
    #[serde(rename = "ID")]
    pub id: String,
    pub name: String,
}
