use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fixed classification of a watchlist entry. Every item belongs to
/// exactly one category at a time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    Movie,
    TvSeries,
    Anime,
    Game,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Movie,
        Category::TvSeries,
        Category::Anime,
        Category::Game,
    ];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Category::Movie => "Movie",
            Category::TvSeries => "TV Series",
            Category::Anime => "Anime",
            Category::Game => "Game",
        };
        write!(f, "{}", label)
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "movie" | "film" => Ok(Category::Movie),
            "tv" | "tv-series" | "series" | "show" => Ok(Category::TvSeries),
            "anime" => Ok(Category::Anime),
            "game" | "games" => Ok(Category::Game),
            _ => Err(format!(
                "Invalid category: {}. Use 'movie', 'tv', 'anime', or 'game'",
                s
            )),
        }
    }
}
