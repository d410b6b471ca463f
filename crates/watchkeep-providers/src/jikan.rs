use crate::error::ProviderError;
use crate::traits::MetadataProvider;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;
use watchkeep_models::{Category, MediaMetadata};

// Jikan (MyAnimeList) API base URL - no API key required
const API_BASE: &str = "https://api.jikan.moe/v4";

#[derive(Debug, Deserialize)]
struct JikanSearchResponse {
    #[serde(default)]
    data: Vec<JikanAnime>,
}

#[derive(Debug, Deserialize)]
struct JikanAnime {
    images: Option<JikanImages>,
    aired: Option<JikanAired>,
    // MAL community score, 0-10
    score: Option<f64>,
    #[serde(default)]
    genres: Vec<JikanGenre>,
    synopsis: Option<String>,
}

#[derive(Debug, Deserialize)]
struct JikanImages {
    jpg: Option<JikanImageSet>,
}

#[derive(Debug, Deserialize)]
struct JikanImageSet {
    large_image_url: Option<String>,
}

// Air dates come pre-split under aired.prop.from; entries that never
// aired have the whole chain absent
#[derive(Debug, Deserialize)]
struct JikanAired {
    prop: Option<JikanAiredProp>,
}

#[derive(Debug, Deserialize)]
struct JikanAiredProp {
    from: Option<JikanAiredDate>,
}

#[derive(Debug, Deserialize)]
struct JikanAiredDate {
    year: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct JikanGenre {
    name: String,
}

/// Jikan anime search, single top result.
pub struct JikanProvider {
    client: Client,
}

impl JikanProvider {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

fn normalize(anime: JikanAnime) -> MediaMetadata {
    let genre = if anime.genres.is_empty() {
        None
    } else {
        Some(
            anime
                .genres
                .iter()
                .map(|g| g.name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        )
    };

    MediaMetadata {
        poster_url: anime
            .images
            .and_then(|images| images.jpg)
            .and_then(|jpg| jpg.large_image_url)
            .filter(|url| !url.is_empty() && url != "N/A"),
        year: anime
            .aired
            .and_then(|aired| aired.prop)
            .and_then(|prop| prop.from)
            .and_then(|from| from.year)
            .map(|year| year.to_string()),
        rating: anime.score,
        total_seasons: None,
        genre,
        actors: None,
        plot: anime.synopsis.unwrap_or_default(),
    }
}

#[async_trait]
impl MetadataProvider for JikanProvider {
    fn name(&self) -> &'static str {
        "jikan"
    }

    fn supports(&self, category: Category) -> bool {
        category == Category::Anime
    }

    async fn lookup(
        &self,
        title: &str,
        _category: Category,
    ) -> Result<Option<MediaMetadata>, ProviderError> {
        let url = format!(
            "{}/anime?q={}&limit=1",
            API_BASE,
            urlencoding::encode(title)
        );

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(ProviderError::Status {
                provider: "jikan",
                status: response.status(),
            });
        }
        let search: JikanSearchResponse = response.json().await?;

        match search.data.into_iter().next() {
            Some(anime) => Ok(Some(normalize(anime))),
            None => {
                debug!("jikan: no results for '{}'", title);
                Ok(None)
            }
        }
    }
}
