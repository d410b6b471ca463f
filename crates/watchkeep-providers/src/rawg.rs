use crate::error::ProviderError;
use crate::traits::MetadataProvider;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;
use watchkeep_models::{Category, MediaMetadata};

// RAWG API base URL
const API_BASE: &str = "https://api.rawg.io/api";

#[derive(Debug, Deserialize)]
struct RawgSearchResponse {
    #[serde(default)]
    results: Vec<RawgGame>,
}

#[derive(Debug, Deserialize)]
struct RawgGame {
    background_image: Option<String>,
    released: Option<String>,
    // RAWG rates on a 0-5 scale
    rating: Option<f64>,
    #[serde(default)]
    genres: Vec<RawgGenre>,
}

#[derive(Debug, Deserialize)]
struct RawgGenre {
    name: String,
}

/// RAWG game search. The search endpoint carries no synopsis, so `plot`
/// is always empty for games.
pub struct RawgProvider {
    client: Client,
    api_key: String,
}

impl RawgProvider {
    pub fn new(client: Client, api_key: String) -> Self {
        Self { client, api_key }
    }
}

fn normalize(game: RawgGame) -> MediaMetadata {
    let genre = if game.genres.is_empty() {
        None
    } else {
        Some(
            game.genres
                .iter()
                .map(|g| g.name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        )
    };

    MediaMetadata {
        poster_url: game
            .background_image
            .filter(|url| !url.is_empty() && url != "N/A"),
        year: game
            .released
            .as_deref()
            .map(|date| date.chars().take(4).collect::<String>())
            .filter(|year| !year.is_empty()),
        rating: game.rating,
        total_seasons: None,
        genre,
        actors: None,
        plot: String::new(),
    }
}

#[async_trait]
impl MetadataProvider for RawgProvider {
    fn name(&self) -> &'static str {
        "rawg"
    }

    fn supports(&self, category: Category) -> bool {
        category == Category::Game
    }

    fn is_available(&self) -> bool {
        !self.api_key.is_empty()
    }

    async fn lookup(
        &self,
        title: &str,
        _category: Category,
    ) -> Result<Option<MediaMetadata>, ProviderError> {
        let url = format!(
            "{}/games?search={}&key={}",
            API_BASE,
            urlencoding::encode(title),
            self.api_key
        );

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(ProviderError::Status {
                provider: "rawg",
                status: response.status(),
            });
        }
        let search: RawgSearchResponse = response.json().await?;

        match search.results.into_iter().next() {
            Some(game) => Ok(Some(normalize(game))),
            None => {
                debug!("rawg: no results for '{}'", title);
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_game_hit() {
        let game: RawgGame = serde_json::from_str(
            r#"{
                "background_image": "https://media.rawg.io/celeste.jpg",
                "released": "2018-01-25",
                "rating": 4.4,
                "genres": [{"name": "Indie"}, {"name": "Platformer"}]
            }"#,
        )
        .unwrap();

        let metadata = normalize(game);
        assert_eq!(
            metadata.poster_url.as_deref(),
            Some("https://media.rawg.io/celeste.jpg")
        );
        assert_eq!(metadata.year.as_deref(), Some("2018"));
        assert_eq!(metadata.rating, Some(4.4));
        assert_eq!(metadata.genre.as_deref(), Some("Indie, Platformer"));
        assert!(metadata.plot.is_empty());
        assert!(metadata.total_seasons.is_none());
    }

    #[test]
    fn unreleased_game_has_no_year() {
        let game: RawgGame = serde_json::from_str(r#"{"rating": 0.0}"#).unwrap();

        let metadata = normalize(game);
        assert!(metadata.year.is_none());
        assert!(metadata.poster_url.is_none());
        assert!(metadata.genre.is_none());
    }
}
