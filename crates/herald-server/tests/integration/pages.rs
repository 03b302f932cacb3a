//! Page rendering through the metadata layer.

use axum::http::StatusCode;

use crate::common::{body_string, get, site_app, small_app};

#[tokio::test]
async fn test_program_page_with_trailing_slash() {
    let resp = get(
        site_app(),
        "/programs/education/",
        &[("Host", "example.org"), ("X-Forwarded-Proto", "http")],
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let html = body_string(resp).await;
    assert!(html.contains("<title>Education Program | Lumen House</title>"));
    assert!(html.contains(
        r#"<link rel="canonical" href="https://www.lumenhouse.org/programs/education">"#
    ));
    assert!(html.contains(r#"data-path="/programs/education""#));
}

#[tokio::test]
async fn test_homepage() {
    let resp = get(site_app(), "/", &[]).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_string(resp).await;
    assert!(html.contains("<title>Lumen House | Community Nonprofit</title>"));
    assert!(html.contains(r#"<link rel="canonical" href="https://www.lumenhouse.org/">"#));
}

#[tokio::test]
async fn test_query_string_not_in_canonical() {
    let html = body_string(get(site_app(), "/contact?ref=email", &[]).await).await;
    assert!(html.contains(r#"<link rel="canonical" href="https://www.lumenhouse.org/contact">"#));
}

#[tokio::test]
async fn test_unknown_page_is_404_with_default_metadata() {
    let resp = get(small_app(), "/does/not/exist/", &[]).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let html = body_string(resp).await;
    assert!(html.contains("<title>Fallback</title>"));
    assert!(html.contains(
        r#"<link rel="canonical" href="https://www.lumenhouse.org/does/not/exist">"#
    ));
}

#[tokio::test]
async fn test_missing_fields_inherit_default_images() {
    let html = body_string(get(small_app(), "/about/team", &[]).await).await;
    assert!(html.contains(r#"<meta name="keywords" content="team">"#));
    assert!(html.contains(
        r#"<meta property="og:image" content="https://www.lumenhouse.org/images/og.webp">"#
    ));
    assert!(html.contains(
        r#"<meta name="twitter:image" content="https://cdn.example.net/tw.webp">"#
    ));
    assert!(html.contains(r#"<meta name="description" content="Our &lt;team&gt;">"#));
}
