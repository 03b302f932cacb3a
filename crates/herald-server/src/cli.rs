//! Command-line interface definitions.

use clap::{Parser, Subcommand};

/// Herald - page metadata and canonical URLs for the Lumen House site
#[derive(Parser, Debug)]
#[command(name = "herald", version)]
#[command(about = "Serve and inspect Lumen House page metadata", long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP server
    Serve {
        /// Override the configured port
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Resolve metadata for a path and print the page context as JSON
    Resolve {
        /// Request path, optionally with a query string
        path: String,
        /// Host header to simulate
        #[arg(long)]
        host: Option<String>,
        /// Forwarded protocol to simulate
        #[arg(long)]
        proto: Option<String>,
    },
    /// List registered routes with their canonical URLs
    Routes,
    /// Configuration operations
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// `config` subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the resolved config file path
    Path,
    /// Print a value by dotted key (e.g. `server.port`)
    Get {
        /// Dotted key
        key: String,
    },
    /// Set a value by dotted key in the config file
    Set {
        /// Dotted key
        key: String,
        /// New value
        value: String,
    },
    /// Write a default config file
    Init {
        /// Destination (defaults to the platform config path)
        #[arg(long)]
        file: Option<String>,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Print configuration as environment variables
    Export {
        /// Format as `--env KEY=value` for docker run
        #[arg(long)]
        docker_env: bool,
    },
}
