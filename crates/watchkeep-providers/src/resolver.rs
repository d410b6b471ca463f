use crate::jikan::JikanProvider;
use crate::omdb::OmdbProvider;
use crate::rawg::RawgProvider;
use crate::tmdb::TmdbProvider;
use crate::traits::{MetadataLookup, MetadataProvider};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};
use watchkeep_config::Config;
use watchkeep_models::{Category, MediaMetadata};

/// Create the shared reqwest Client with the lookup timeout applied.
/// A hung provider request times out and counts as "no result".
pub fn create_lookup_client(timeout_secs: u64) -> Client {
    Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()
        .unwrap_or_else(|_| Client::new())
}

/// Best-effort enrichment over the configured providers. Dispatch is by
/// category; for movies and TV the providers form a ranked fallback
/// chain (TMDb first, OMDb second) where the first usable hit wins and
/// partial results are never merged across providers.
pub struct MetadataResolver {
    providers: Vec<Box<dyn MetadataProvider>>,
}

impl MetadataResolver {
    pub fn from_config(config: &Config) -> Self {
        let client = create_lookup_client(config.lookup.timeout_secs);

        // Vec order is the fallback ranking
        let providers: Vec<Box<dyn MetadataProvider>> = vec![
            Box::new(TmdbProvider::new(
                client.clone(),
                config.providers.tmdb_api_key.clone(),
            )),
            Box::new(OmdbProvider::new(
                client.clone(),
                config.providers.omdb_api_key.clone(),
            )),
            Box::new(RawgProvider::new(
                client.clone(),
                config.providers.rawg_api_key.clone(),
            )),
            Box::new(JikanProvider::new(client)),
        ];

        Self { providers }
    }

    pub fn with_providers(providers: Vec<Box<dyn MetadataProvider>>) -> Self {
        Self { providers }
    }
}

#[async_trait]
impl MetadataLookup for MetadataResolver {
    async fn fetch_metadata(&self, title: &str, category: Category) -> Option<MediaMetadata> {
        for provider in &self.providers {
            if !provider.supports(category) {
                continue;
            }
            if !provider.is_available() {
                debug!("{}: skipped, no API key configured", provider.name());
                continue;
            }

            match provider.lookup(title, category).await {
                Ok(Some(metadata)) => {
                    debug!("{}: matched '{}'", provider.name(), title);
                    return Some(metadata);
                }
                Ok(None) => {
                    debug!("{}: no match for '{}'", provider.name(), title);
                }
                Err(e) => {
                    warn!("{}: lookup for '{}' failed: {}", provider.name(), title, e);
                }
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProviderError;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    enum StubBehavior {
        Hit(MediaMetadata),
        Miss,
        Fail,
    }

    struct StubProvider {
        name: &'static str,
        category: Category,
        available: bool,
        behavior: StubBehavior,
        calls: Arc<AtomicUsize>,
    }

    impl StubProvider {
        fn new(name: &'static str, category: Category, behavior: StubBehavior) -> Self {
            Self {
                name,
                category,
                available: true,
                behavior,
                calls: Arc::new(AtomicUsize::new(0)),
            }
        }

        fn unavailable(mut self) -> Self {
            self.available = false;
            self
        }

        fn call_counter(&self) -> Arc<AtomicUsize> {
            self.calls.clone()
        }
    }

    #[async_trait]
    impl MetadataProvider for StubProvider {
        fn name(&self) -> &'static str {
            self.name
        }

        fn supports(&self, category: Category) -> bool {
            category == self.category
        }

        fn is_available(&self) -> bool {
            self.available
        }

        async fn lookup(
            &self,
            _title: &str,
            _category: Category,
        ) -> Result<Option<MediaMetadata>, ProviderError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.behavior {
                StubBehavior::Hit(metadata) => Ok(Some(metadata.clone())),
                StubBehavior::Miss => Ok(None),
                StubBehavior::Fail => Err(ProviderError::Status {
                    provider: self.name,
                    status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
                }),
            }
        }
    }

    fn metadata_with_year(year: &str) -> MediaMetadata {
        MediaMetadata {
            year: Some(year.to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn first_hit_wins_and_fallback_is_not_queried() {
        let primary = StubProvider::new(
            "primary",
            Category::Movie,
            StubBehavior::Hit(metadata_with_year("2010")),
        );
        let fallback = StubProvider::new(
            "fallback",
            Category::Movie,
            StubBehavior::Hit(metadata_with_year("1999")),
        );
        let fallback_calls = fallback.call_counter();

        let resolver =
            MetadataResolver::with_providers(vec![Box::new(primary), Box::new(fallback)]);
        let metadata = resolver.fetch_metadata("Inception", Category::Movie).await;

        assert_eq!(metadata.unwrap().year.as_deref(), Some("2010"));
        assert_eq!(fallback_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn miss_falls_through_to_next_provider() {
        let primary = StubProvider::new("primary", Category::Movie, StubBehavior::Miss);
        let fallback = StubProvider::new(
            "fallback",
            Category::Movie,
            StubBehavior::Hit(metadata_with_year("1999")),
        );

        let resolver =
            MetadataResolver::with_providers(vec![Box::new(primary), Box::new(fallback)]);
        let metadata = resolver.fetch_metadata("The Matrix", Category::Movie).await;

        assert_eq!(metadata.unwrap().year.as_deref(), Some("1999"));
    }

    #[tokio::test]
    async fn provider_error_is_swallowed_and_falls_through() {
        let primary = StubProvider::new("primary", Category::Movie, StubBehavior::Fail);
        let fallback = StubProvider::new(
            "fallback",
            Category::Movie,
            StubBehavior::Hit(metadata_with_year("1999")),
        );

        let resolver =
            MetadataResolver::with_providers(vec![Box::new(primary), Box::new(fallback)]);
        let metadata = resolver.fetch_metadata("The Matrix", Category::Movie).await;

        assert_eq!(metadata.unwrap().year.as_deref(), Some("1999"));
    }

    #[tokio::test]
    async fn wrong_category_providers_are_never_queried() {
        let games = StubProvider::new(
            "games",
            Category::Game,
            StubBehavior::Hit(metadata_with_year("2018")),
        );
        let games_calls = games.call_counter();

        let resolver = MetadataResolver::with_providers(vec![Box::new(games)]);
        let metadata = resolver.fetch_metadata("Inception", Category::Movie).await;

        assert!(metadata.is_none());
        assert_eq!(games_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn unavailable_provider_is_skipped() {
        let keyless = StubProvider::new(
            "keyless",
            Category::Movie,
            StubBehavior::Hit(metadata_with_year("2010")),
        )
        .unavailable();
        let keyless_calls = keyless.call_counter();
        let fallback = StubProvider::new(
            "fallback",
            Category::Movie,
            StubBehavior::Hit(metadata_with_year("1999")),
        );

        let resolver =
            MetadataResolver::with_providers(vec![Box::new(keyless), Box::new(fallback)]);
        let metadata = resolver.fetch_metadata("Inception", Category::Movie).await;

        assert_eq!(metadata.unwrap().year.as_deref(), Some("1999"));
        assert_eq!(keyless_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn all_misses_yield_none() {
        let primary = StubProvider::new("primary", Category::Movie, StubBehavior::Miss);
        let fallback = StubProvider::new("fallback", Category::Movie, StubBehavior::Fail);

        let resolver =
            MetadataResolver::with_providers(vec![Box::new(primary), Box::new(fallback)]);

        assert!(resolver
            .fetch_metadata("Unknown Title", Category::Movie)
            .await
            .is_none());
    }
}
