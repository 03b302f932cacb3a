//! Extraction helpers for the published page context.

use herald_core::PageContext;

/// Extract the [`PageContext`] from HTTP request `Parts`, if present.
pub fn context_from_parts(parts: &http::request::Parts) -> Option<&PageContext> {
    parts.extensions.get::<PageContext>()
}

/// Extract the canonical URL from HTTP request `Parts`.
///
/// Returns an empty string when the metadata layer did not run.
pub fn canonical_from_parts(parts: &http::request::Parts) -> &str {
    parts
        .extensions
        .get::<PageContext>()
        .map(|c| c.canonical.as_str())
        .unwrap_or("")
}
