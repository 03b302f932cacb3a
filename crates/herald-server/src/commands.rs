//! Implementations of the `serve`, `resolve` and `routes` commands.

use herald_core::{PageContext, RequestInfo};
use tokio::net::TcpListener;

use crate::app::{app, AppState};
use crate::config::HeraldConfig;
use crate::error::Result;
use crate::logging;

/// Load configuration and install the log subscriber it describes.
pub fn load_config(config_path: Option<&str>) -> Result<HeraldConfig> {
    let config = HeraldConfig::load(config_path)?;
    logging::init_logging(&config.logging);
    Ok(config)
}

/// Run the HTTP server until Ctrl-C.
pub async fn serve(config: &HeraldConfig) -> Result<()> {
    let state = AppState::from_config(config)?;
    let routes = state.resolver.table().len();
    let addr = config.bind_addr();

    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(
        addr = %addr,
        preferred_host = %state.resolver.canonical().preferred_host(),
        routes,
        "herald listening"
    );

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("herald stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
}

/// Resolve a simulated request into its page context.
pub fn resolve_context(
    config: &HeraldConfig,
    path: &str,
    host: Option<&str>,
    proto: Option<&str>,
) -> Result<PageContext> {
    let state = AppState::from_config(config)?;

    let mut req = RequestInfo::new(path);
    if let Some(host) = host {
        req = req.with_host(host);
    }
    if let Some(proto) = proto {
        req = req.with_header(herald_core::canonical::FORWARDED_PROTO, proto);
    }

    Ok(PageContext::from(state.resolver.resolve(&req)))
}

/// Print the page context for a path as pretty JSON.
pub fn cmd_resolve(
    config: &HeraldConfig,
    path: &str,
    host: Option<&str>,
    proto: Option<&str>,
) -> Result<()> {
    let ctx = resolve_context(config, path, host, proto)?;
    println!("{}", serde_json::to_string_pretty(&ctx)?);
    Ok(())
}

/// Registered routes paired with their canonical URLs.
pub fn route_listing(config: &HeraldConfig) -> Result<Vec<(String, String)>> {
    let state = AppState::from_config(config)?;
    let resolver = &state.resolver;
    Ok(resolver
        .table()
        .paths()
        .map(|p| (p.to_string(), resolver.canonical().url_for_path(p)))
        .collect())
}

/// Print every registered route.
pub fn cmd_routes(config: &HeraldConfig) -> Result<()> {
    for (path, url) in route_listing(config)? {
        println!("{path:<28} {url}");
    }
    Ok(())
}
