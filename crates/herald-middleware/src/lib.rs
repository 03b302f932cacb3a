//! Page metadata middleware for Herald.
//!
//! Provides:
//! - [`MetadataLayer`] / [`MetadataService`] — Tower middleware that resolves
//!   page metadata once per request and publishes it to handlers
//! - [`context_from_parts`] / [`canonical_from_parts`] — extraction helpers
//!
//! Handlers can also take `axum::Extension<PageContext>` directly.

mod context;
mod middleware;

pub use context::{canonical_from_parts, context_from_parts};
pub use herald_core::PageContext;
pub use middleware::{MetadataLayer, MetadataService};
