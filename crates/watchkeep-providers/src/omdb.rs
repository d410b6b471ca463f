use crate::error::ProviderError;
use crate::traits::MetadataProvider;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;
use watchkeep_models::{Category, MediaMetadata};

// OMDb API base URL
const API_BASE: &str = "https://www.omdbapi.com/";

// OMDb reports everything as strings and uses "N/A" for missing fields
#[derive(Debug, Deserialize)]
struct OmdbResponse {
    #[serde(rename = "Response")]
    response: String,
    #[serde(rename = "Poster")]
    poster: Option<String>,
    #[serde(rename = "Year")]
    year: Option<String>,
    #[serde(rename = "imdbRating")]
    imdb_rating: Option<String>,
    #[serde(rename = "totalSeasons")]
    total_seasons: Option<String>,
    #[serde(rename = "Genre")]
    genre: Option<String>,
    #[serde(rename = "Actors")]
    actors: Option<String>,
    #[serde(rename = "Plot")]
    plot: Option<String>,
}

/// OMDb by-title lookup for movies and TV, the fallback behind TMDb.
pub struct OmdbProvider {
    client: Client,
    api_key: String,
}

impl OmdbProvider {
    pub fn new(client: Client, api_key: String) -> Self {
        Self { client, api_key }
    }

    fn search_kind(category: Category) -> &'static str {
        match category {
            Category::TvSeries => "series",
            _ => "movie",
        }
    }
}

/// Map OMDb's "N/A" sentinel (and empty strings) to absent
fn scrub(field: Option<String>) -> Option<String> {
    field.filter(|value| !value.is_empty() && value != "N/A")
}

fn normalize(response: OmdbResponse) -> MediaMetadata {
    MediaMetadata {
        poster_url: scrub(response.poster),
        year: scrub(response.year).map(|year| year.chars().take(4).collect()),
        rating: scrub(response.imdb_rating).and_then(|rating| rating.parse::<f64>().ok()),
        total_seasons: scrub(response.total_seasons).and_then(|n| n.parse::<u32>().ok()),
        genre: scrub(response.genre),
        actors: scrub(response.actors),
        plot: scrub(response.plot).unwrap_or_default(),
    }
}

#[async_trait]
impl MetadataProvider for OmdbProvider {
    fn name(&self) -> &'static str {
        "omdb"
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
        let url = format!(
            "{}?apikey={}&t={}&type={}&plot=full",
            API_BASE,
            self.api_key,
            urlencoding::encode(title),
            Self::search_kind(category)
        );

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(ProviderError::Status {
                provider: "omdb",
                status: response.status(),
            });
        }

        // OMDb answers misses with 200 + {"Response": "False"}
        let body: OmdbResponse = response.json().await?;
        if body.response != "True" {
            debug!("omdb: no match for '{}'", title);
            return Ok(None);
        }

        Ok(Some(normalize(body)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_full_movie_response() {
        let body: OmdbResponse = serde_json::from_str(
            r#"{
                "Response": "True",
                "Poster": "https://m.media-amazon.com/inception.jpg",
                "Year": "2010",
                "imdbRating": "8.8",
                "Genre": "Action, Adventure, Sci-Fi",
                "Actors": "Leonardo DiCaprio, Joseph Gordon-Levitt",
                "Plot": "A thief who steals corporate secrets."
            }"#,
        )
        .unwrap();

        let metadata = normalize(body);
        assert_eq!(metadata.year.as_deref(), Some("2010"));
        assert_eq!(metadata.rating, Some(8.8));
        assert_eq!(
            metadata.actors.as_deref(),
            Some("Leonardo DiCaprio, Joseph Gordon-Levitt")
        );
        assert_eq!(metadata.total_seasons, None);
        assert_eq!(metadata.plot, "A thief who steals corporate secrets.");
    }

    #[test]
    fn na_sentinels_map_to_absent() {
        let body: OmdbResponse = serde_json::from_str(
            r#"{
                "Response": "True",
                "Poster": "N/A",
                "Year": "N/A",
                "imdbRating": "N/A",
                "Genre": "N/A",
                "Actors": "N/A",
                "Plot": "N/A"
            }"#,
        )
        .unwrap();

        let metadata = normalize(body);
        assert!(metadata.poster_url.is_none());
        assert!(metadata.year.is_none());
        assert!(metadata.rating.is_none());
        assert!(metadata.genre.is_none());
        assert!(metadata.actors.is_none());
        assert!(metadata.plot.is_empty());
    }

    #[test]
    fn series_year_range_truncates_to_start_year() {
        let body: OmdbResponse = serde_json::from_str(
            r#"{"Response": "True", "Year": "2008-2013", "totalSeasons": "5"}"#,
        )
        .unwrap();

        let metadata = normalize(body);
        assert_eq!(metadata.year.as_deref(), Some("2008"));
        assert_eq!(metadata.total_seasons, Some(5));
    }

    #[test]
    fn unparseable_numbers_degrade_to_absent() {
        let body: OmdbResponse = serde_json::from_str(
            r#"{"Response": "True", "imdbRating": "not rated", "totalSeasons": "many"}"#,
        )
        .unwrap();

        let metadata = normalize(body);
        assert!(metadata.rating.is_none());
        assert!(metadata.total_seasons.is_none());
    }
}
