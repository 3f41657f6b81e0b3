//! Built-in docker operations

use berth_core::{BerthError, BerthResult, InternalFunction};
use tokio::process::Command;
use tracing::debug;

/// Execute a docker command and return its stdout
pub async fn execute_docker_command(args: &[&str]) -> BerthResult<String> {
    let mut cmd = Command::new("docker");
    cmd.args(args);

    debug!("Executing docker command: docker {}", args.join(" "));

    let output = cmd.output().await.map_err(|e| {
        BerthError::process(format!(
            "Failed to execute docker command: docker {}: {}",
            args.join(" "),
            e
        ))
    })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(BerthError::process_exit(
            format!("Docker command failed: {}", stderr.trim()),
            format!("docker {}", args.join(" ")),
            output.status.code(),
        ));
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Run a built-in operation
pub async fn run_internal(function: InternalFunction) -> BerthResult<()> {
    match function {
        InternalFunction::PruneImages => {
            execute_docker_command(&["image", "prune", "--all", "--force"]).await?;
        }
        InternalFunction::PruneContainers => {
            execute_docker_command(&["container", "prune", "--force"]).await?;
        }
        InternalFunction::PruneVolumes => {
            execute_docker_command(&["volume", "prune", "--force"]).await?;
        }
        InternalFunction::StopContainers => {
            let ids = container_ids(false).await?;
            if !ids.is_empty() {
                execute_docker_command(&with_ids(&["stop"], &ids)).await?;
            }
        }
        InternalFunction::RemoveContainers => {
            let ids = container_ids(true).await?;
            if !ids.is_empty() {
                execute_docker_command(&with_ids(&["rm", "--force"], &ids)).await?;
            }
        }
    }
    Ok(())
}

async fn container_ids(all: bool) -> BerthResult<Vec<String>> {
    let args: &[&str] = if all { &["ps", "--all", "--quiet"] } else { &["ps", "--quiet"] };
    let stdout = execute_docker_command(args).await?;
    Ok(parse_ids(&stdout))
}

fn parse_ids(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

fn with_ids<'a>(prefix: &[&'a str], ids: &'a [String]) -> Vec<&'a str> {
    prefix
        .iter()
        .copied()
        .chain(ids.iter().map(String::as_str))
        .collect()
}
