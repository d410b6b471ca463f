use crate::error::ProviderError;
use async_trait::async_trait;
use watchkeep_models::{Category, MediaMetadata};

/// A single external metadata lookup service.
#[async_trait]
pub trait MetadataProvider: Send + Sync {
    fn name(&self) -> &'static str;

    /// Whether this provider answers lookups for the given category.
    fn supports(&self, category: Category) -> bool;

    /// Whether the provider is usable at all (e.g. an API key is
    /// configured). Unavailable providers are skipped by the resolver.
    fn is_available(&self) -> bool {
        true
    }

    /// Look up the first matching result for a title.
    /// `Ok(None)` means the provider had no usable match.
    async fn lookup(
        &self,
        title: &str,
        category: Category,
    ) -> Result<Option<MediaMetadata>, ProviderError>;
}

/// The enrichment seam the store consumes. Total: network failures,
/// timeouts, and malformed payloads all surface as `None`.
#[async_trait]
pub trait MetadataLookup: Send + Sync {
    async fn fetch_metadata(&self, title: &str, category: Category) -> Option<MediaMetadata>;
}
