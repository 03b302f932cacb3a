//! XML sitemap and robots.txt rendering.

use crate::canonical::CanonicalUrlBuilder;
use crate::head::escape_html;
use crate::table::RouteMetadataTable;

/// Sitemap protocol namespace.
pub const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Render a sitemap listing the canonical URL of every registered route.
pub fn render_sitemap(table: &RouteMetadataTable, canonical: &CanonicalUrlBuilder) -> String {
    let urls: String = table
        .paths()
        .map(|path| {
            format!(
                "  <url><loc>{}</loc></url>\n",
                escape_html(&canonical.url_for_path(path))
            )
        })
        .collect();

    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"{SITEMAP_NS}\">\n{urls}</urlset>\n"
    )
}

/// Render a permissive robots.txt pointing at the sitemap.
pub fn render_robots(canonical: &CanonicalUrlBuilder) -> String {
    format!(
        "User-agent: *\nAllow: /\n\nSitemap: {}/sitemap.xml\n",
        canonical.origin()
    )
}
