//! Route metadata table.
//!
//! A read-only mapping from normalized path to [`MetadataRecord`], with one
//! fully populated fallback. Built once at startup and shared behind an
//! `Arc`; there is no mutation API after [`RouteTableBuilder::build`].
//!
//! # Example
//!
//! ```
//! use herald_core::{MetadataRecord, RouteMetadataTable};
//!
//! let default = MetadataRecord::new("Site", "About the site")
//!     .with_keywords("site")
//!     .with_social_image("/og.webp")
//!     .with_secondary_image("/tw.webp");
//!
//! let table = RouteMetadataTable::builder(default)
//!     .route("/contact", MetadataRecord::new("Contact", "Get in touch"))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(table.lookup("/contact").title, "Contact");
//! assert_eq!(table.lookup("/missing").title, "Site");
//! ```

use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::path::normalize_path;
use crate::record::{DefaultRecord, MetadataRecord};

/// Key reserved for the fallback record in the authored catalogue.
pub const DEFAULT_KEY: &str = "default";

/// Immutable path → metadata mapping with a guaranteed fallback.
#[derive(Clone, Debug)]
pub struct RouteMetadataTable {
    routes: BTreeMap<String, MetadataRecord>,
    default: DefaultRecord,
}

impl RouteMetadataTable {
    /// Start building a table around the given fallback record.
    pub fn builder(default: MetadataRecord) -> RouteTableBuilder {
        RouteTableBuilder {
            default,
            routes: Vec::new(),
        }
    }

    /// Exact-key lookup; returns the default record on a miss.
    ///
    /// The caller is responsible for normalizing `path` first.
    pub fn lookup(&self, path: &str) -> &MetadataRecord {
        self.routes
            .get(path)
            .unwrap_or_else(|| self.default.record())
    }

    /// Normalize `path`, look it up, and fill missing fields from the default.
    pub fn get_metadata(&self, path: &str) -> MetadataRecord {
        let key = normalize_path(path);
        self.lookup(&key).filled_from(&self.default)
    }

    /// Whether `path` is registered as an exact key.
    pub fn contains(&self, path: &str) -> bool {
        self.routes.contains_key(path)
    }

    /// Registered keys in sorted order (the default is not included).
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.routes.keys().map(String::as_str)
    }

    /// Number of registered routes, excluding the default.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Returns `true` if only the default record is present.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// The fallback record.
    pub fn default_record(&self) -> &DefaultRecord {
        &self.default
    }
}

/// Collects routes and validates them in [`build`](Self::build).
#[derive(Debug)]
pub struct RouteTableBuilder {
    default: MetadataRecord,
    routes: Vec<(String, MetadataRecord)>,
}

impl RouteTableBuilder {
    /// Register a record for an exact, already normalized path.
    pub fn route(mut self, path: impl Into<String>, record: MetadataRecord) -> Self {
        self.routes.push((path.into(), record));
        self
    }

    /// Validate every key and the default record, then freeze the table.
    pub fn build(self) -> Result<RouteMetadataTable> {
        let default = DefaultRecord::try_from(self.default)?;

        let mut routes = BTreeMap::new();
        for (key, record) in self.routes {
            validate_key(&key)?;
            if routes.contains_key(&key) {
                return Err(Error::DuplicateRoute(key));
            }
            routes.insert(key, record);
        }

        log::debug!("Route metadata table built with {} routes", routes.len());
        Ok(RouteMetadataTable { routes, default })
    }
}

fn validate_key(key: &str) -> Result<()> {
    if key == DEFAULT_KEY {
        return Err(Error::invalid_key(key, "reserved for the fallback record"));
    }
    if !key.starts_with('/') {
        return Err(Error::invalid_key(key, "must start with '/'"));
    }
    if key != "/" && key.ends_with('/') {
        return Err(Error::invalid_key(key, "trailing slash"));
    }
    Ok(())
}
