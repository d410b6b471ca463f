use chrono::Utc;
use thiserror::Error;
use tracing::{debug, warn};
use uuid::Uuid;
use watchkeep_models::{Category, WatchlistItem};
use watchkeep_providers::MetadataLookup;

use crate::storage::WatchlistStorage;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("title must not be empty")]
    EmptyTitle,
}

/// The canonical watchlist: one authoritative ordered collection
/// (newest first) plus views derived from it on demand. Every mutation
/// updates memory first, then writes the whole collection back to
/// storage; `&mut self` keeps mutations serialized.
pub struct WatchlistStore {
    items: Vec<WatchlistItem>,
    storage: WatchlistStorage,
    lookup: Box<dyn MetadataLookup>,
}

impl WatchlistStore {
    pub fn new(storage: WatchlistStorage, lookup: Box<dyn MetadataLookup>) -> Self {
        Self {
            items: Vec::new(),
            storage,
            lookup,
        }
    }

    /// Populate in-memory state from storage. An absent or corrupt
    /// payload degrades to an empty list; this never fails the caller.
    pub fn load(&mut self) {
        self.items = self.storage.load();
    }

    /// Add a new item at the front of the collection and return its id.
    /// Enrichment is best-effort: a failed or empty lookup leaves the
    /// metadata fields absent and the add still goes through. The
    /// description falls back to the fetched plot when the user gave
    /// none.
    pub async fn add_item(
        &mut self,
        title: &str,
        description: &str,
        category: Category,
    ) -> Result<String, StoreError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(StoreError::EmptyTitle);
        }

        let id = Uuid::new_v4().to_string();
        let metadata = self
            .lookup
            .fetch_metadata(title, category)
            .await
            .unwrap_or_default();

        let description = if !description.trim().is_empty() {
            description.to_string()
        } else {
            metadata.plot
        };

        let item = WatchlistItem {
            id: id.clone(),
            title: title.to_string(),
            description,
            category,
            watched: false,
            created_at: Utc::now(),
            watched_at: None,
            poster_url: metadata.poster_url,
            year: metadata.year,
            rating: metadata.rating,
            total_seasons: metadata.total_seasons,
            genre: metadata.genre,
            actors: metadata.actors,
        };

        self.items.insert(0, item);
        self.persist();
        Ok(id)
    }

    /// Replace the item with a matching id, keeping its position in the
    /// collection. Returns the id when a replacement happened; an
    /// unknown id is a no-op reported at warn level, since it points at
    /// a stale view rather than user error.
    pub fn update_item(&mut self, item: WatchlistItem) -> Option<String> {
        match self.items.iter().position(|existing| existing.id == item.id) {
            Some(index) => {
                let id = item.id.clone();
                self.items[index] = item;
                self.persist();
                Some(id)
            }
            None => {
                warn!("update_item: no item with id {}", item.id);
                None
            }
        }
    }

    /// Remove the item with a matching id. Unknown ids are a no-op.
    pub fn remove_item(&mut self, id: &str) {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        if self.items.len() == before {
            debug!("remove_item: no item with id {}", id);
            return;
        }
        self.persist();
    }

    /// Flip the watched flag: `watched_at` is stamped on the way to
    /// watched and cleared on the way back. Unknown ids are a no-op.
    pub fn toggle_watched(&mut self, id: &str) {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.watched = !item.watched;
                item.watched_at = if item.watched { Some(Utc::now()) } else { None };
            }
            None => {
                warn!("toggle_watched: no item with id {}", id);
                return;
            }
        }
        self.persist();
    }

    /// Items matching the watched flag and, when given, the category.
    /// Collection order (newest first) is preserved.
    pub fn get_filtered(&self, watched: bool, category: Option<Category>) -> Vec<&WatchlistItem> {
        self.items
            .iter()
            .filter(|item| item.watched == watched)
            .filter(|item| category.map_or(true, |c| item.category == c))
            .collect()
    }

    pub fn items(&self) -> &[WatchlistItem] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&WatchlistItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    // Write-through policy: retry once, then keep the in-memory state
    // and let the next successful write reconcile. The user's action is
    // never rolled back over a failed write.
    fn persist(&self) {
        if let Err(e) = self.storage.save(&self.items) {
            warn!("Failed to persist watchlist: {}. Retrying once.", e);
            if let Err(e) = self.storage.save(&self.items) {
                warn!(
                    "Retry failed: {}. Keeping in-memory state; next write will reconcile.",
                    e
                );
            }
        }
    }
}
