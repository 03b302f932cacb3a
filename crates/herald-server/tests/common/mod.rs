//! Common test utilities for herald-server integration tests.

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use herald_core::{MetadataRecord, RouteMetadataTable};
use herald_server::{app, AppState, HeraldConfig};
use tower::ServiceExt;

/// Preferred host used by the test harness.
pub const HOST: &str = "www.lumenhouse.org";

/// Router over the real site catalogue with default configuration.
pub fn site_app() -> Router {
    let state = AppState::from_config(&HeraldConfig::default()).unwrap();
    app(state)
}

/// Router over a small hand-built table.
pub fn small_app() -> Router {
    let default = MetadataRecord::new("Fallback", "Fallback description")
        .with_keywords("fallback")
        .with_social_image("/images/og.webp")
        .with_secondary_image("https://cdn.example.net/tw.webp");
    let table = RouteMetadataTable::builder(default)
        .route("/", MetadataRecord::new("Home", "Homepage"))
        .route(
            "/about/team",
            MetadataRecord::new("Team", "Our <team>").with_keywords("team"),
        )
        .build()
        .unwrap();
    app(AppState::with_table(table, HOST))
}

/// Send a GET request with optional extra headers.
pub async fn get(app: Router, uri: &str, headers: &[(&str, &str)]) -> Response<Body> {
    let mut builder = Request::builder().uri(uri);
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    app.oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// Collect a response body as UTF-8.
pub async fn body_string(resp: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
