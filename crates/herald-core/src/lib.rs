//! Herald Core — page metadata and canonical URLs for the Lumen House site.
//!
//! Resolves the title, description, keywords and share images for a page
//! request, along with the one canonical URL search engines should index.
//! It has no internal Herald dependencies.
//!
//! # Modules
//!
//! - [`record`]: Metadata records and the resolved per-request output
//! - [`table`]: Immutable route table with a guaranteed fallback
//! - [`path`]: Request path normalization
//! - [`canonical`]: Canonical URL construction over [`RequestLike`]
//! - [`resolver`]: Per-request resolution and the template [`PageContext`]
//! - [`head`]: `<head>` tag rendering
//! - [`sitemap`]: sitemap.xml and robots.txt rendering
//! - [`site`]: The site's route catalogue

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod canonical;
pub mod error;
pub mod head;
pub mod path;
pub mod record;
pub mod resolver;
pub mod site;
pub mod sitemap;
pub mod table;

// Re-export key types at crate root for convenience
pub use canonical::{get_canonical_url, CanonicalUrlBuilder, RequestInfo, RequestLike};
pub use error::{Error, Result};
pub use path::normalize_path;
pub use record::{DefaultRecord, MetadataRecord, ResolvedMetadata};
pub use resolver::{MetadataResolver, PageContext, CONTEXT_KEYS};
pub use table::{RouteMetadataTable, RouteTableBuilder};
