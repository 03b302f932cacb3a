//! Herald CLI
//!
//! Serves Lumen House pages with resolved metadata and inspects the route
//! catalogue from the command line.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use herald_server::cli::{Cli, Command};
use herald_server::commands;
use herald_server::config_handlers::handle_config_command;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config_path = cli.config.as_deref();

    match cli.command {
        // Config commands manage the file itself and must work without a valid one.
        Command::Config { action } => handle_config_command(config_path, action)?,
        Command::Serve { port } => {
            let mut config = commands::load_config(config_path)?;
            if let Some(port) = port {
                config.server.port = port;
            }
            commands::serve(&config).await?;
        }
        Command::Resolve { path, host, proto } => {
            let config = commands::load_config(config_path)?;
            commands::cmd_resolve(&config, &path, host.as_deref(), proto.as_deref())?;
        }
        Command::Routes => commands::cmd_routes(&commands::load_config(config_path)?)?,
    }

    Ok(())
}
