use serde::{Deserialize, Serialize};

/// Normalized lookup result shared by every provider. Provider-specific
/// "not available" sentinels (OMDb's "N/A", empty date strings) are
/// mapped to `None` before this struct is built; `plot` is the one field
/// that degrades to an empty string instead.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MediaMetadata {
    pub poster_url: Option<String>,
    pub year: Option<String>,
    pub rating: Option<f64>,
    pub total_seasons: Option<u32>,
    pub genre: Option<String>,
    pub actors: Option<String>,
    pub plot: String,
}
