use crate::error::ProviderError;
use crate::traits::MetadataProvider;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;
use watchkeep_models::{Category, MediaMetadata};

// TMDb API base URL
const API_BASE: &str = "https://api.themoviedb.org/3";
const POSTER_BASE: &str = "https://image.tmdb.org/t/p/w500";

#[derive(Debug, Deserialize)]
struct TmdbSearchResponse {
    #[serde(default)]
    results: Vec<TmdbSearchResult>,
}

#[derive(Debug, Deserialize)]
struct TmdbSearchResult {
    id: u64,
    poster_path: Option<String>,
    // Movies carry release_date, TV carries first_air_date
    release_date: Option<String>,
    first_air_date: Option<String>,
    vote_average: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct TmdbDetails {
    #[serde(default)]
    genres: Vec<TmdbGenre>,
    number_of_seasons: Option<u32>,
    overview: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TmdbGenre {
    name: String,
}

/// TMDb search + details lookup for movies and TV. Queried before OMDb;
/// the search endpoint gives poster/year/rating, the details endpoint
/// fills in genres, season count, and the synopsis.
pub struct TmdbProvider {
    client: Client,
    api_key: String,
}

impl TmdbProvider {
    pub fn new(client: Client, api_key: String) -> Self {
        Self { client, api_key }
    }

    fn search_kind(category: Category) -> &'static str {
        match category {
            Category::TvSeries => "tv",
            _ => "movie",
        }
    }
}

fn normalize(kind: &str, hit: TmdbSearchResult, details: TmdbDetails) -> MediaMetadata {
    let year = hit
        .release_date
        .as_deref()
        .or(hit.first_air_date.as_deref())
        .map(|date| date.chars().take(4).collect::<String>())
        .filter(|year| !year.is_empty());

    let genre = if details.genres.is_empty() {
        None
    } else {
        Some(
            details
                .genres
                .iter()
                .map(|g| g.name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        )
    };

    MediaMetadata {
        poster_url: hit
            .poster_path
            .map(|path| format!("{}{}", POSTER_BASE, path)),
        year,
        rating: hit.vote_average,
        total_seasons: if kind == "tv" {
            details.number_of_seasons
        } else {
            None
        },
        genre,
        actors: None,
        plot: details.overview.unwrap_or_default(),
    }
}

#[async_trait]
impl MetadataProvider for TmdbProvider {
    fn name(&self) -> &'static str {
        "tmdb"
    }

    fn supports(&self, category: Category) -> bool {
        matches!(category, Category::Movie | Category::TvSeries)
    }

    fn is_available(&self) -> bool {
        !self.api_key.is_empty()
    }

    async fn lookup(
        &self,
        title: &str,
        category: Category,
    ) -> Result<Option<MediaMetadata>, ProviderError> {
        let kind = Self::search_kind(category);
        let url = format!(
            "{}/search/{}?api_key={}&query={}",
            API_BASE,
            kind,
            self.api_key,
            urlencoding::encode(title)
        );

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(ProviderError::Status {
                provider: "tmdb",
                status: response.status(),
            });
        }
        let search: TmdbSearchResponse = response.json().await?;

        let hit = match search.results.into_iter().next() {
            Some(hit) => hit,
            None => {
                debug!("tmdb: no results for '{}'", title);
                return Ok(None);
            }
        };

        let details_url = format!("{}/{}/{}?api_key={}", API_BASE, kind, hit.id, self.api_key);
        let response = self.client.get(&details_url).send().await?;
        if !response.status().is_success() {
            return Err(ProviderError::Status {
                provider: "tmdb",
                status: response.status(),
            });
        }
        let details: TmdbDetails = response.json().await?;

        Ok(Some(normalize(kind, hit, details)))
    }
}
