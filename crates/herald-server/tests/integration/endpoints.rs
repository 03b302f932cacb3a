//! Metadata API, crawler and health endpoints.

use axum::http::{header, StatusCode};
use herald_server::app::{HealthResponse, MetadataResponse};

use crate::common::{body_string, get, site_app, small_app};

#[tokio::test]
async fn test_metadata_api_matched() {
    let resp = get(small_app(), "/api/metadata?path=/about/team/", &[]).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: MetadataResponse = serde_json::from_str(&body_string(resp).await).unwrap();
    assert_eq!(body.path, "/about/team");
    assert!(body.matched);
    assert_eq!(body.metadata.title, "Team");
    assert_eq!(body.metadata.social_image.as_deref(), Some("/images/og.webp"));
    assert_eq!(body.canonical, "https://www.lumenhouse.org/about/team");
}

#[tokio::test]
async fn test_metadata_api_defaults_to_root() {
    let resp = get(small_app(), "/api/metadata", &[]).await;
    let body: MetadataResponse = serde_json::from_str(&body_string(resp).await).unwrap();
    assert_eq!(body.path, "/");
    assert_eq!(body.metadata.title, "Home");
    assert_eq!(body.canonical, "https://www.lumenhouse.org/");
}

#[tokio::test]
async fn test_metadata_api_unmatched() {
    let resp = get(small_app(), "/api/metadata?path=/nowhere", &[]).await;
    let body: MetadataResponse = serde_json::from_str(&body_string(resp).await).unwrap();
    assert!(!body.matched);
    assert_eq!(body.metadata.title, "Fallback");
    assert_eq!(body.metadata.keywords.as_deref(), Some("fallback"));
}

#[tokio::test]
async fn test_sitemap() {
    let resp = get(site_app(), "/sitemap.xml", &[]).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()[header::CONTENT_TYPE],
        "application/xml; charset=utf-8"
    );
    let xml = body_string(resp).await;
    assert!(xml.contains("<loc>https://www.lumenhouse.org/</loc>"));
    assert!(xml.contains("<loc>https://www.lumenhouse.org/candle-shop</loc>"));
}

#[tokio::test]
async fn test_robots() {
    let body = body_string(get(site_app(), "/robots.txt", &[]).await).await;
    assert!(body.contains("Sitemap: https://www.lumenhouse.org/sitemap.xml"));
}

#[tokio::test]
async fn test_health() {
    let resp = get(small_app(), "/health", &[]).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: HealthResponse = serde_json::from_str(&body_string(resp).await).unwrap();
    assert_eq!(body.status, "healthy");
    assert_eq!(body.routes, 2);
}
