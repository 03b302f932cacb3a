//! axum application: page routes behind the metadata layer plus the
//! metadata API, sitemap, robots.txt and health endpoints.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Extension, Json, Router};
use herald_core::head::{escape_html, render_head};
use herald_core::sitemap::{render_robots, render_sitemap};
use herald_core::{MetadataRecord, MetadataResolver, PageContext, RouteMetadataTable};
use herald_middleware::MetadataLayer;
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;

use crate::config::HeraldConfig;
use crate::error::Result;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Resolver over the process-wide route table.
    pub resolver: Arc<MetadataResolver>,
}

impl AppState {
    /// Wrap an existing resolver.
    pub fn new(resolver: MetadataResolver) -> Self {
        Self {
            resolver: Arc::new(resolver),
        }
    }

    /// Build the site table and resolver from configuration.
    pub fn from_config(config: &HeraldConfig) -> Result<Self> {
        let table = herald_core::site::site_table()?;
        Ok(Self::with_table(table, &config.site.preferred_host))
    }

    /// Build state over an explicit table.
    pub fn with_table(table: RouteMetadataTable, preferred_host: &str) -> Self {
        Self::new(MetadataResolver::new(Arc::new(table), preferred_host))
    }
}

/// Build the application router.
pub fn app(state: AppState) -> Router {
    let pages = Router::new()
        .route("/", get(page))
        .route("/{*path}", get(page))
        .layer(MetadataLayer::new(state.resolver.clone()));

    Router::new()
        .route("/health", get(health))
        .route("/robots.txt", get(robots))
        .route("/sitemap.xml", get(sitemap))
        .route("/api/metadata", get(metadata))
        .merge(pages)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ============================================================================
// Pages
// ============================================================================

async fn page(State(state): State<AppState>, Extension(ctx): Extension<PageContext>) -> Response {
    let status = if state.resolver.table().contains(&ctx.current_path) {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    };
    let origin = state.resolver.canonical().origin();
    (status, Html(render_page(&ctx, &origin))).into_response()
}

/// Minimal document shell; the site's templates replace the body.
pub fn render_page(ctx: &PageContext, origin: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         {head}</head>\n<body>\n<main data-path=\"{path}\">\n<h1>{title}</h1>\n</main>\n</body>\n</html>\n",
        head = render_head(ctx, origin),
        path = escape_html(&ctx.current_path),
        title = escape_html(&ctx.title),
    )
}

// ============================================================================
// Metadata API
// ============================================================================

/// Query for `GET /api/metadata`.
#[derive(Debug, Deserialize)]
pub struct MetadataQuery {
    /// Path to resolve; defaults to `/`.
    pub path: Option<String>,
}

/// Response for `GET /api/metadata`.
#[derive(Debug, Serialize, Deserialize)]
pub struct MetadataResponse {
    /// Normalized path.
    pub path: String,
    /// Whether the path has its own entry.
    pub matched: bool,
    /// Record with every field filled in.
    pub metadata: MetadataRecord,
    /// Canonical URL.
    pub canonical: String,
}

async fn metadata(
    State(state): State<AppState>,
    Query(query): Query<MetadataQuery>,
) -> Json<MetadataResponse> {
    let raw = query.path.unwrap_or_else(|| "/".to_string());
    let path = herald_core::normalize_path(herald_core::path::strip_query(&raw));
    let resolver = &state.resolver;

    Json(MetadataResponse {
        matched: resolver.table().contains(&path),
        metadata: resolver.get_metadata(&path),
        canonical: resolver.canonical().url_for_path(&raw),
        path,
    })
}

// ============================================================================
// Crawler endpoints
// ============================================================================

async fn sitemap(State(state): State<AppState>) -> impl IntoResponse {
    let xml = render_sitemap(state.resolver.table(), state.resolver.canonical());
    ([(header::CONTENT_TYPE, "application/xml; charset=utf-8")], xml)
}

async fn robots(State(state): State<AppState>) -> impl IntoResponse {
    let body = render_robots(state.resolver.canonical());
    ([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], body)
}

// ============================================================================
// Health
// ============================================================================

/// Health check response.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Server status ("healthy").
    pub status: String,
    /// Server version.
    pub version: String,
    /// Number of registered routes.
    pub routes: usize,
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        routes: state.resolver.table().len(),
    })
}
