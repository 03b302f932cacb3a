//! Metadata records for a single logical page.
//!
//! - [`MetadataRecord`]: hand-authored entry; optional fields may be absent
//! - [`DefaultRecord`]: the fallback entry, guaranteed fully populated
//! - [`ResolvedMetadata`]: per-request output with every field filled in

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

// ============================================================================
// MetadataRecord
// ============================================================================

/// Title, description, keywords and share images for one logical page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataRecord {
    /// Page title.
    pub title: String,
    /// Meta description.
    pub description: String,
    /// Comma-separated keywords; inherited from the default record when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
    /// Primary share image (Open Graph).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_image: Option<String>,
    /// Secondary share image (Twitter card).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_image: Option<String>,
}

impl MetadataRecord {
    /// Create a record with only the required fields set.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            keywords: None,
            social_image: None,
            secondary_image: None,
        }
    }

    /// Set the keywords.
    pub fn with_keywords(mut self, keywords: impl Into<String>) -> Self {
        self.keywords = Some(keywords.into());
        self
    }

    /// Set the primary share image.
    pub fn with_social_image(mut self, image: impl Into<String>) -> Self {
        self.social_image = Some(image.into());
        self
    }

    /// Set the secondary share image.
    pub fn with_secondary_image(mut self, image: impl Into<String>) -> Self {
        self.secondary_image = Some(image.into());
        self
    }

    /// Return a copy with every missing optional field taken from `default`.
    pub fn filled_from(&self, default: &DefaultRecord) -> MetadataRecord {
        MetadataRecord {
            title: self.title.clone(),
            description: self.description.clone(),
            keywords: Some(self.keywords_or(default).to_string()),
            social_image: Some(self.social_image_or(default).to_string()),
            secondary_image: Some(self.secondary_image_or(default).to_string()),
        }
    }

    fn keywords_or<'a>(&'a self, default: &'a DefaultRecord) -> &'a str {
        self.keywords.as_deref().unwrap_or(default.keywords())
    }

    fn social_image_or<'a>(&'a self, default: &'a DefaultRecord) -> &'a str {
        self.social_image.as_deref().unwrap_or(default.social_image())
    }

    fn secondary_image_or<'a>(&'a self, default: &'a DefaultRecord) -> &'a str {
        self.secondary_image
            .as_deref()
            .unwrap_or(default.secondary_image())
    }
}

// ============================================================================
// DefaultRecord
// ============================================================================

/// The fallback record. Every optional field is known to be present.
///
/// Only obtainable through [`TryFrom<MetadataRecord>`], so holding one
/// proves the fallback chain terminates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DefaultRecord {
    record: MetadataRecord,
}

impl DefaultRecord {
    /// The underlying record.
    pub fn record(&self) -> &MetadataRecord {
        &self.record
    }

    /// Default keywords.
    pub fn keywords(&self) -> &str {
        self.record.keywords.as_deref().unwrap_or_default()
    }

    /// Default primary share image.
    pub fn social_image(&self) -> &str {
        self.record.social_image.as_deref().unwrap_or_default()
    }

    /// Default secondary share image.
    pub fn secondary_image(&self) -> &str {
        self.record.secondary_image.as_deref().unwrap_or_default()
    }
}

impl TryFrom<MetadataRecord> for DefaultRecord {
    type Error = Error;

    fn try_from(record: MetadataRecord) -> Result<Self> {
        if record.keywords.is_none() {
            return Err(Error::IncompleteDefault { field: "keywords" });
        }
        if record.social_image.is_none() {
            return Err(Error::IncompleteDefault {
                field: "socialImage",
            });
        }
        if record.secondary_image.is_none() {
            return Err(Error::IncompleteDefault {
                field: "secondaryImage",
            });
        }
        Ok(Self { record })
    }
}

// ============================================================================
// ResolvedMetadata
// ============================================================================

/// Fully resolved metadata for one request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedMetadata {
    /// Page title.
    pub title: String,
    /// Meta description.
    pub description: String,
    /// Keywords, inherited from the default record when the page has none.
    pub keywords: String,
    /// Primary share image.
    pub social_image: String,
    /// Secondary share image.
    pub secondary_image: String,
    /// Request path after trailing-slash normalization.
    pub normalized_path: String,
    /// Absolute canonical URL.
    pub canonical_url: String,
}

impl ResolvedMetadata {
    /// Assemble from a record, its fallback and the per-request path values.
    pub fn assemble(
        record: &MetadataRecord,
        default: &DefaultRecord,
        normalized_path: String,
        canonical_url: String,
    ) -> Self {
        Self {
            title: record.title.clone(),
            description: record.description.clone(),
            keywords: record.keywords_or(default).to_string(),
            social_image: record.social_image_or(default).to_string(),
            secondary_image: record.secondary_image_or(default).to_string(),
            normalized_path,
            canonical_url,
        }
    }
}
