//! # herald-server
//!
//! HTTP server and CLI for the Lumen House site metadata service.
//!
//! - [`app`]: axum router with pages behind the metadata layer, the
//!   metadata API, sitemap, robots.txt and health endpoints
//! - [`config`]: TOML configuration with environment overrides
//! - [`cli`] / [`commands`] / [`config_handlers`]: the `herald` command line
//! - [`logging`]: tracing subscriber setup

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod config_handlers;
pub mod error;
pub mod logging;

pub use app::{app, AppState};
pub use config::HeraldConfig;
pub use error::{Error, Result};
