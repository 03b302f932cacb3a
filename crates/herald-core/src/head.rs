//! `<head>` tag rendering for page templates.
//!
//! Turns a [`PageContext`] into title, description, canonical, Open Graph
//! and Twitter card tags. Site-relative image paths are made absolute so
//! social crawlers can fetch them.

use crate::resolver::PageContext;

/// Open Graph object type for every page.
pub const OG_TYPE: &str = "website";

/// Twitter card style for every page.
pub const TWITTER_CARD: &str = "summary_large_image";

/// Render the metadata portion of a document `<head>`.
///
/// `origin` is the scheme and host (no trailing slash) used to absolutize
/// image paths that start with `/`.
pub fn render_head(ctx: &PageContext, origin: &str) -> String {
    let og_image = absolute_url(&ctx.og_image, origin);
    let twitter_image = absolute_url(&ctx.twitter_image, origin);

    let lines = [
        format!("<title>{}</title>", escape_html(&ctx.title)),
        meta("name", "description", &ctx.meta_description),
        meta("name", "keywords", &ctx.keywords),
        format!(
            r#"<link rel="canonical" href="{}">"#,
            escape_html(&ctx.canonical)
        ),
        meta("property", "og:type", OG_TYPE),
        meta("property", "og:title", &ctx.title),
        meta("property", "og:description", &ctx.meta_description),
        meta("property", "og:url", &ctx.canonical),
        meta("property", "og:image", &og_image),
        meta("name", "twitter:card", TWITTER_CARD),
        meta("name", "twitter:title", &ctx.title),
        meta("name", "twitter:description", &ctx.meta_description),
        meta("name", "twitter:image", &twitter_image),
    ];

    lines.iter().map(|line| format!("{line}\n")).collect()
}

fn meta(attr: &str, key: &str, content: &str) -> String {
    format!(r#"<meta {attr}="{key}" content="{}">"#, escape_html(content))
}

/// Prefix site-relative paths with `origin`; leave absolute URLs alone.
pub fn absolute_url(value: &str, origin: &str) -> String {
    if value.starts_with('/') && !value.starts_with("//") {
        format!("{origin}{value}")
    } else {
        value.to_string()
    }
}

/// Escape text for use in HTML content and attribute values.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
