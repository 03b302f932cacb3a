//! Per-request metadata resolution.
//!
//! [`MetadataResolver::resolve`] runs the whole pipeline for one request:
//! normalize the path, look it up, fill gaps from the default record, and
//! compute the canonical URL. The result is published to templates as a
//! [`PageContext`] with fixed keys.
//!
//! Resolution is synchronous, performs no I/O, and cannot fail.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;

use crate::canonical::{CanonicalUrlBuilder, RequestLike};
use crate::path::{normalize_path, strip_query};
use crate::record::{MetadataRecord, ResolvedMetadata};
use crate::table::RouteMetadataTable;

/// Keys a template can read from a [`PageContext`].
pub const CONTEXT_KEYS: [&str; 7] = [
    "title",
    "metaDescription",
    "keywords",
    "currentPath",
    "ogImage",
    "twitterImage",
    "canonical",
];

// ============================================================================
// MetadataResolver
// ============================================================================

/// Resolves page metadata against a shared route table.
///
/// Cheap to clone; the table is shared behind an `Arc`.
#[derive(Clone, Debug)]
pub struct MetadataResolver {
    table: Arc<RouteMetadataTable>,
    canonical: CanonicalUrlBuilder,
}

impl MetadataResolver {
    /// Create a resolver over `table` emitting canonical URLs for `preferred_host`.
    pub fn new(table: Arc<RouteMetadataTable>, preferred_host: impl Into<String>) -> Self {
        Self {
            table,
            canonical: CanonicalUrlBuilder::new(preferred_host),
        }
    }

    /// The route table.
    pub fn table(&self) -> &RouteMetadataTable {
        &self.table
    }

    /// The canonical URL builder.
    pub fn canonical(&self) -> &CanonicalUrlBuilder {
        &self.canonical
    }

    /// Resolve metadata for one request.
    pub fn resolve<R: RequestLike + ?Sized>(&self, req: &R) -> ResolvedMetadata {
        let normalized = normalize_path(strip_query(req.path()));
        let record = self.table.lookup(&normalized);
        let canonical = self.canonical.build(req);

        log::debug!(
            "Resolved metadata for {} (matched: {}, canonical: {canonical})",
            req.path(),
            self.table.contains(&normalized)
        );

        ResolvedMetadata::assemble(record, self.table.default_record(), normalized, canonical)
    }

    /// Fully populated record for a path.
    pub fn get_metadata(&self, path: &str) -> MetadataRecord {
        self.table.get_metadata(path)
    }

    /// Canonical URL for a request.
    pub fn get_canonical_url<R: RequestLike + ?Sized>(&self, req: &R) -> String {
        self.canonical.build(req)
    }
}

// ============================================================================
// PageContext
// ============================================================================

/// Rendering context handed to page templates.
///
/// Serializes with exactly the keys in [`CONTEXT_KEYS`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageContext {
    /// Page title.
    pub title: String,
    /// Meta description.
    pub meta_description: String,
    /// Keywords.
    pub keywords: String,
    /// Normalized request path.
    pub current_path: String,
    /// Open Graph image.
    pub og_image: String,
    /// Twitter card image.
    pub twitter_image: String,
    /// Canonical URL.
    pub canonical: String,
}

impl PageContext {
    /// Look up a value by its template key.
    pub fn get(&self, key: &str) -> Option<&str> {
        let value = match key {
            "title" => &self.title,
            "metaDescription" => &self.meta_description,
            "keywords" => &self.keywords,
            "currentPath" => &self.current_path,
            "ogImage" => &self.og_image,
            "twitterImage" => &self.twitter_image,
            "canonical" => &self.canonical,
            _ => return None,
        };
        Some(value.as_str())
    }

    /// All values keyed by template key.
    pub fn to_map(&self) -> BTreeMap<&'static str, String> {
        CONTEXT_KEYS
            .iter()
            .filter_map(|key| self.get(key).map(|v| (*key, v.to_string())))
            .collect()
    }
}

impl From<ResolvedMetadata> for PageContext {
    fn from(resolved: ResolvedMetadata) -> Self {
        Self {
            title: resolved.title,
            meta_description: resolved.description,
            keywords: resolved.keywords,
            current_path: resolved.normalized_path,
            og_image: resolved.social_image,
            twitter_image: resolved.secondary_image,
            canonical: resolved.canonical_url,
        }
    }
}
