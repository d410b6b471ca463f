pub mod error;
pub mod jikan;
pub mod omdb;
pub mod rawg;
pub mod resolver;
pub mod tmdb;
pub mod traits;

pub use error::ProviderError;
pub use resolver::{create_lookup_client, MetadataResolver};
pub use traits::{MetadataLookup, MetadataProvider};
