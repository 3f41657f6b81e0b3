//! Command-line arguments

use std::path::PathBuf;

use berth_core::CommandScope;
use berth_core::commands::{
    CommandObject, ContainerRef, ImageRef, NetworkRef, ServiceRef, VolumeRef,
};
use clap::{Args, Parser, Subcommand, ValueEnum};

/// Custom command menus for docker containers, services, images, volumes and networks
#[derive(Parser, Debug)]
#[command(name = "berth")]
#[command(about = "Run configured docker commands from a menu")]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to ~/.config/berth/config.yml)
    #[arg(short, long, global = true, env = "BERTH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Skip confirmation before destructive built-in operations
    #[arg(short = 'y', long, global = true)]
    pub yes: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the custom command menu for the selected item
    Custom {
        scope: ScopeArg,
        #[command(flatten)]
        target: TargetArgs,
    },

    /// Open the bulk command menu for a panel
    Bulk {
        scope: ScopeArg,
        #[command(flatten)]
        target: TargetArgs,
    },

    /// Print configured commands with their resolved form
    List {
        /// Only this panel
        scope: Option<ScopeArg>,
        #[command(flatten)]
        target: TargetArgs,
    },

    /// Check that every internalFunction in the config exists
    Validate,
}

/// Dashboard panel
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScopeArg {
    Containers,
    Services,
    Images,
    Volumes,
    Networks,
}

impl From<ScopeArg> for CommandScope {
    fn from(scope: ScopeArg) -> Self {
        match scope {
            ScopeArg::Containers => CommandScope::Containers,
            ScopeArg::Services => CommandScope::Services,
            ScopeArg::Images => CommandScope::Images,
            ScopeArg::Volumes => CommandScope::Volumes,
            ScopeArg::Networks => CommandScope::Networks,
        }
    }
}

/// The item templates are resolved against
#[derive(Args, Debug, Default, Clone)]
pub struct TargetArgs {
    /// Compose project name (defaults to the current directory name)
    #[arg(long)]
    pub project: Option<String>,

    #[arg(long)]
    pub container: Option<String>,

    #[arg(long)]
    pub container_id: Option<String>,

    #[arg(long)]
    pub container_image: Option<String>,

    #[arg(long)]
    pub service: Option<String>,

    /// Container currently running the service
    #[arg(long)]
    pub service_container_id: Option<String>,

    #[arg(long)]
    pub image: Option<String>,

    #[arg(long)]
    pub image_id: Option<String>,

    #[arg(long)]
    pub image_tag: Option<String>,

    #[arg(long)]
    pub volume: Option<String>,

    #[arg(long)]
    pub network: Option<String>,

    #[arg(long)]
    pub network_id: Option<String>,
}

impl TargetArgs {
    /// Build the template context for these arguments
    pub fn to_context(&self, docker_compose: &str) -> CommandObject {
        let project = self.project.clone().unwrap_or_else(current_dir_name);
        let mut context = CommandObject::new(project).with_docker_compose(docker_compose);

        if self.container.is_some() || self.container_id.is_some() {
            let name = self.container.clone().unwrap_or_default();
            let id = self.container_id.clone().unwrap_or_else(|| name.clone());
            let image = self.container_image.clone().unwrap_or_default();
            context = context.with_container(ContainerRef::new(id, name).with_image(image));
        }
        if let Some(service) = &self.service {
            let mut service = ServiceRef::new(service);
            service.container_id = self.service_container_id.clone();
            context = context.with_service(service);
        }
        if self.image.is_some() || self.image_id.is_some() {
            context = context.with_image(ImageRef {
                id: self.image_id.clone().unwrap_or_default(),
                name: self.image.clone().unwrap_or_default(),
                tag: self.image_tag.clone().unwrap_or_else(|| "latest".to_string()),
            });
        }
        if let Some(volume) = &self.volume {
            context = context.with_volume(VolumeRef {
                name: volume.clone(),
                driver: "local".to_string(),
            });
        }
        if self.network.is_some() || self.network_id.is_some() {
            context = context.with_network(NetworkRef {
                id: self.network_id.clone().unwrap_or_default(),
                name: self.network.clone().unwrap_or_default(),
            });
        }

        context
    }
}

fn current_dir_name() -> String {
    std::env::current_dir()
        .ok()
        .and_then(|dir| dir.file_name().map(|n| n.to_string_lossy().into_owned()))
        .unwrap_or_default()
}
