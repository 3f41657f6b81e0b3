//! berth CLI application
//!
//! Opens configured custom command menus for docker containers, compose
//! services, images, volumes and networks.
//!
//! ```bash
//! berth custom containers --container shop-web-1
//! berth bulk services --project shop
//! berth list
//! ```
//!
//! Set RUST_LOG=debug for verbose logging.

mod args;
mod console;
mod docker;
mod host;
mod router;

use clap::Parser;

pub use args::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging with environment-based filtering
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    router::route(cli).await
}
