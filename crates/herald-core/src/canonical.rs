//! Canonical URL construction.
//!
//! Every logical page has exactly one canonical URL: secure scheme, the
//! site's preferred host, no query string, no trailing slash except for the
//! root, and no `index.html` suffix. The protocol and host a request arrived
//! with never change the result.
//!
//! Requests are read through [`RequestLike`], so the same logic runs against
//! `http` request types and against plain [`RequestInfo`] values.

use crate::path::{collapse_index_html, normalize_path, strip_query};

/// Scheme emitted in every canonical URL.
pub const SECURE_SCHEME: &str = "https";

/// Header set by reverse proxies to carry the client-facing protocol.
pub const FORWARDED_PROTO: &str = "x-forwarded-proto";

// ============================================================================
// RequestLike
// ============================================================================

/// The request attributes canonicalization needs.
pub trait RequestLike {
    /// Request path. May include a query string, which is ignored.
    fn path(&self) -> &str;

    /// Protocol of the direct connection, if known.
    fn protocol(&self) -> Option<&str>;

    /// Case-insensitive header lookup.
    fn header(&self, name: &str) -> Option<&str>;

    /// Host the request was addressed to.
    fn host(&self) -> Option<&str> {
        self.header("host")
    }
}

impl<B> RequestLike for http::Request<B> {
    fn path(&self) -> &str {
        self.uri().path()
    }

    fn protocol(&self) -> Option<&str> {
        self.uri().scheme_str()
    }

    fn header(&self, name: &str) -> Option<&str> {
        self.headers().get(name).and_then(|v| v.to_str().ok())
    }

    fn host(&self) -> Option<&str> {
        self.header("host")
            .or_else(|| self.uri().authority().map(|a| a.as_str()))
    }
}

impl RequestLike for http::request::Parts {
    fn path(&self) -> &str {
        self.uri.path()
    }

    fn protocol(&self) -> Option<&str> {
        self.uri.scheme_str()
    }

    fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    fn host(&self) -> Option<&str> {
        self.header("host")
            .or_else(|| self.uri.authority().map(|a| a.as_str()))
    }
}

/// Plain-data request description.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestInfo {
    path: String,
    protocol: Option<String>,
    headers: Vec<(String, String)>,
}

impl RequestInfo {
    /// Create a request for the given path with no protocol or headers.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }

    /// Set the connection protocol (e.g. `http`).
    pub fn with_protocol(mut self, protocol: impl Into<String>) -> Self {
        self.protocol = Some(protocol.into());
        self
    }

    /// Add a header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Set the `Host` header.
    pub fn with_host(self, host: impl Into<String>) -> Self {
        self.with_header("host", host)
    }
}

impl RequestLike for RequestInfo {
    fn path(&self) -> &str {
        &self.path
    }

    fn protocol(&self) -> Option<&str> {
        self.protocol.as_deref()
    }

    fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

// ============================================================================
// Request inspection
// ============================================================================

/// Scheme the client used, lower-cased.
///
/// `X-Forwarded-Proto` (first value) wins over the connection protocol;
/// with neither present the secure scheme is assumed.
pub fn detect_scheme<R: RequestLike + ?Sized>(req: &R) -> String {
    req.header(FORWARDED_PROTO)
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .or_else(|| req.protocol())
        .unwrap_or(SECURE_SCHEME)
        .trim()
        .to_ascii_lowercase()
}

/// Host the request presented, without a default `:80` or `:443` port.
///
/// Only used for diagnostics; canonical URLs always use the preferred host.
pub fn presented_host<R: RequestLike + ?Sized>(req: &R) -> Option<String> {
    let host = req.host()?.trim();
    let host = host
        .strip_suffix(":80")
        .or_else(|| host.strip_suffix(":443"))
        .unwrap_or(host);
    Some(host.to_ascii_lowercase())
}

// ============================================================================
// CanonicalUrlBuilder
// ============================================================================

/// Builds canonical URLs under a single preferred host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CanonicalUrlBuilder {
    preferred_host: String,
}

impl CanonicalUrlBuilder {
    /// Create a builder for the given host name (e.g. `www.example.org`).
    pub fn new(preferred_host: impl Into<String>) -> Self {
        let host = preferred_host.into();
        let host = host.trim().trim_end_matches('/').to_ascii_lowercase();
        Self {
            preferred_host: host,
        }
    }

    /// The host every canonical URL uses.
    pub fn preferred_host(&self) -> &str {
        &self.preferred_host
    }

    /// `https://<preferred-host>` with no trailing slash.
    pub fn origin(&self) -> String {
        format!("{SECURE_SCHEME}://{}", self.preferred_host)
    }

    /// Canonical URL for a request.
    pub fn build<R: RequestLike + ?Sized>(&self, req: &R) -> String {
        let path = canonical_path(req.path());

        if log::log_enabled!(log::Level::Debug) {
            let scheme = detect_scheme(req);
            match presented_host(req) {
                Some(host) if host != self.preferred_host => log::debug!(
                    "Canonicalizing {scheme}://{host}{} to preferred host {}",
                    req.path(),
                    self.preferred_host
                ),
                _ => {}
            }
        }

        self.url_for(&path)
    }

    /// Canonical URL for a bare path.
    pub fn url_for_path(&self, path: &str) -> String {
        self.url_for(&canonical_path(path))
    }

    fn url_for(&self, canonical: &str) -> String {
        format!("{}{canonical}", self.origin())
    }
}

/// Path component of a canonical URL.
///
/// Drops the query string, collapses `index.html`, removes the trailing
/// slash (except for the root) and guarantees a leading slash.
///
/// # Examples
///
/// ```
/// use herald_core::canonical::canonical_path;
///
/// assert_eq!(canonical_path("/about/"), "/about");
/// assert_eq!(canonical_path("/index.html"), "/");
/// assert_eq!(canonical_path("/about/index.html?x=1"), "/about");
/// ```
pub fn canonical_path(path: &str) -> String {
    let collapsed = collapse_index_html(strip_query(path));
    let normalized = normalize_path(&collapsed);
    if normalized.starts_with('/') {
        normalized
    } else {
        format!("/{normalized}")
    }
}

/// Canonical URL for `req` under `preferred_host`.
pub fn get_canonical_url<R: RequestLike + ?Sized>(req: &R, preferred_host: &str) -> String {
    CanonicalUrlBuilder::new(preferred_host).build(req)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOST: &str = "www.lumenhouse.org";

    fn builder() -> CanonicalUrlBuilder {
        CanonicalUrlBuilder::new(HOST)
    }

    // -------------------------------------------------------------------------
    // canonical URL tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_trailing_slash_stripped() {
        let url = builder().build(&RequestInfo::new("/about/"));
        assert_eq!(url, "https://www.lumenhouse.org/about");
    }

    #[test]
    fn test_index_html_collapses_to_root() {
        let url = builder().build(&RequestInfo::new("/index.html"));
        assert_eq!(url, "https://www.lumenhouse.org/");
    }

    #[test]
    fn test_nested_index_html() {
        let url = builder().build(&RequestInfo::new("/impact/INDEX.html"));
        assert_eq!(url, "https://www.lumenhouse.org/impact");
    }

    #[test]
    fn test_query_string_dropped() {
        let url = builder().build(&RequestInfo::new("/contact?ref=email"));
        assert_eq!(url, "https://www.lumenhouse.org/contact");
    }

    #[test]
    fn test_request_host_and_scheme_ignored() {
        let req = RequestInfo::new("/media")
            .with_protocol("http")
            .with_host("example.org:80");
        assert_eq!(builder().build(&req), "https://www.lumenhouse.org/media");
    }

    #[test]
    fn test_root_keeps_slash() {
        assert_eq!(
            builder().build(&RequestInfo::new("/")),
            "https://www.lumenhouse.org/"
        );
        assert_eq!(
            builder().build(&RequestInfo::new("")),
            "https://www.lumenhouse.org/"
        );
    }

    #[test]
    fn test_relative_path_gets_leading_slash() {
        assert_eq!(canonical_path("contact"), "/contact");
    }

    #[test]
    fn test_builder_normalizes_preferred_host() {
        let b = CanonicalUrlBuilder::new(" WWW.LumenHouse.org/ ");
        assert_eq!(b.preferred_host(), HOST);
        assert_eq!(b.origin(), "https://www.lumenhouse.org");
    }

    #[test]
    fn test_get_canonical_url_with_http_request() {
        let req = http::Request::builder()
            .uri("/get-involved/volunteer/?utm_source=x")
            .header("Host", "lumenhouse.org")
            .body(())
            .unwrap();
        assert_eq!(
            get_canonical_url(&req, HOST),
            "https://www.lumenhouse.org/get-involved/volunteer"
        );
    }

    // -------------------------------------------------------------------------
    // detect_scheme tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_detect_scheme_defaults_secure() {
        assert_eq!(detect_scheme(&RequestInfo::new("/")), "https");
    }

    #[test]
    fn test_detect_scheme_forwarded_wins() {
        let req = RequestInfo::new("/")
            .with_protocol("https")
            .with_header("X-Forwarded-Proto", "HTTP, https");
        assert_eq!(detect_scheme(&req), "http");
    }

    #[test]
    fn test_detect_scheme_connection_protocol() {
        let req = RequestInfo::new("/").with_protocol("HTTP");
        assert_eq!(detect_scheme(&req), "http");
    }

    #[test]
    fn test_detect_scheme_empty_forwarded_ignored() {
        let req = RequestInfo::new("/")
            .with_protocol("http")
            .with_header("x-forwarded-proto", " ");
        assert_eq!(detect_scheme(&req), "http");
    }

    // -------------------------------------------------------------------------
    // presented_host tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_presented_host_strips_default_ports() {
        let http = RequestInfo::new("/").with_host("Example.org:80");
        let https = RequestInfo::new("/").with_host("example.org:443");
        let custom = RequestInfo::new("/").with_host("example.org:8080");
        assert_eq!(presented_host(&http).as_deref(), Some("example.org"));
        assert_eq!(presented_host(&https).as_deref(), Some("example.org"));
        assert_eq!(presented_host(&custom).as_deref(), Some("example.org:8080"));
    }

    #[test]
    fn test_presented_host_absent() {
        assert_eq!(presented_host(&RequestInfo::new("/")), None);
    }

    #[test]
    fn test_parts_request_like() {
        let (parts, _) = http::Request::builder()
            .uri("/media/?page=2")
            .header("X-Forwarded-Proto", "http")
            .body(())
            .unwrap()
            .into_parts();
        assert_eq!(RequestLike::path(&parts), "/media/");
        assert_eq!(detect_scheme(&parts), "http");
        assert_eq!(builder().build(&parts), "https://www.lumenhouse.org/media");
    }
}
