use crate::category::Category;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One watchlist entry. The enrichment fields are all optional and
/// default on deserialization, so records written by older builds (or
/// with failed lookups) still load.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WatchlistItem {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: Category,
    #[serde(default)]
    pub watched: bool,
    pub created_at: DateTime<Utc>,
    // Present iff watched is true
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub watched_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    // Provider-native scale: 0-10 for TMDb/OMDb/Jikan, 0-5 for RAWG
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_seasons: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actors: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_record_without_optional_fields() {
        // The shape an item had before enrichment fields existed
        let json = r#"{
            "id": "1745830000000",
            "title": "Inception",
            "category": "Movie",
            "created_at": "2026-04-28T10:00:00Z"
        }"#;

        let item: WatchlistItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.title, "Inception");
        assert_eq!(item.category, Category::Movie);
        assert!(!item.watched);
        assert!(item.description.is_empty());
        assert!(item.watched_at.is_none());
        assert!(item.poster_url.is_none());
        assert!(item.rating.is_none());
    }

    #[test]
    fn absent_fields_are_not_serialized() {
        let item = WatchlistItem {
            id: "abc".to_string(),
            title: "Chrono Trigger".to_string(),
            description: String::new(),
            category: Category::Game,
            watched: false,
            created_at: Utc::now(),
            watched_at: None,
            poster_url: None,
            year: None,
            rating: None,
            total_seasons: None,
            genre: None,
            actors: None,
        };

        let json = serde_json::to_string(&item).unwrap();
        assert!(!json.contains("watched_at"));
        assert!(!json.contains("poster_url"));
        assert!(!json.contains("total_seasons"));
    }

    #[test]
    fn category_labels_round_trip() {
        for category in Category::ALL {
            let json = serde_json::to_string(&category).unwrap();
            let back: Category = serde_json::from_str(&json).unwrap();
            assert_eq!(back, category);
        }
        assert_eq!(serde_json::to_string(&Category::TvSeries).unwrap(), "\"TvSeries\"");
    }

    #[test]
    fn category_parses_from_cli_spellings() {
        assert_eq!("movie".parse::<Category>().unwrap(), Category::Movie);
        assert_eq!("TV".parse::<Category>().unwrap(), Category::TvSeries);
        assert_eq!("series".parse::<Category>().unwrap(), Category::TvSeries);
        assert_eq!("anime".parse::<Category>().unwrap(), Category::Anime);
        assert_eq!("games".parse::<Category>().unwrap(), Category::Game);
        assert!("music".parse::<Category>().is_err());
    }
}
