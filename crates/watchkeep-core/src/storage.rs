use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::{debug, info, warn};
use watchkeep_models::WatchlistItem;

/// On-device persistence: the whole watchlist as one JSON array in one
/// file. The full list is the unit of durability; there is no
/// incremental format.
pub struct WatchlistStorage {
    path: PathBuf,
}

impl WatchlistStorage {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Read the persisted collection. A missing or unreadable file
    /// degrades to an empty list; a corrupt payload is backed up first
    /// so a later build can recover it.
    pub fn load(&self) -> Vec<WatchlistItem> {
        if !self.path.exists() {
            debug!("No watchlist file at {:?}, starting empty", self.path);
            return Vec::new();
        }

        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                warn!("Failed to read watchlist file {:?}: {}", self.path, e);
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<WatchlistItem>>(&content) {
            Ok(items) => {
                info!("Loaded {} watchlist item(s) from {:?}", items.len(), self.path);
                items
            }
            Err(e) => {
                warn!("Watchlist file {:?} is corrupt: {}", self.path, e);
                let backup_path = self.path.with_extension("json.bak");
                if let Err(backup_err) = std::fs::copy(&self.path, &backup_path) {
                    warn!("Failed to back up corrupt watchlist: {}", backup_err);
                } else {
                    warn!("Backed up corrupt watchlist to {:?}", backup_path);
                }
                Vec::new()
            }
        }
    }

    /// Write the whole collection. Writes go to a temp file first and
    /// are renamed into place, so no reader observes a partial list.
    pub fn save(&self, items: &[WatchlistItem]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create data directory {:?}", parent))?;
        }

        let json = serde_json::to_string_pretty(items).context("Failed to serialize watchlist")?;

        let temp_path = self.path.with_extension("json.tmp");
        std::fs::write(&temp_path, json)
            .with_context(|| format!("Failed to write watchlist file {:?}", temp_path))?;
        std::fs::rename(&temp_path, &self.path)
            .with_context(|| format!("Failed to replace watchlist file {:?}", self.path))?;

        debug!("Saved {} watchlist item(s) to {:?}", items.len(), self.path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use tempfile::TempDir;
    use watchkeep_models::Category;

    fn item(id: &str, title: &str) -> WatchlistItem {
        WatchlistItem {
            id: id.to_string(),
            title: title.to_string(),
            description: String::new(),
            category: Category::Movie,
            watched: false,
            created_at: Utc::now(),
            watched_at: None,
            poster_url: None,
            year: None,
            rating: None,
            total_seasons: None,
            genre: None,
            actors: None,
        }
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let storage = WatchlistStorage::new(dir.path().join("watchlist.json"));

        let items = vec![item("a", "Inception"), item("b", "Celeste")];
        storage.save(&items).unwrap();

        assert_eq!(storage.load(), items);
    }

    #[test]
    fn empty_collection_round_trips() {
        let dir = TempDir::new().unwrap();
        let storage = WatchlistStorage::new(dir.path().join("watchlist.json"));

        storage.save(&[]).unwrap();
        assert!(storage.load().is_empty());
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let storage = WatchlistStorage::new(dir.path().join("watchlist.json"));

        assert!(storage.load().is_empty());
    }

    #[test]
    fn corrupt_file_loads_empty_and_is_backed_up() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("watchlist.json");
        std::fs::write(&path, "{ not json").unwrap();

        let storage = WatchlistStorage::new(path.clone());
        assert!(storage.load().is_empty());
        assert!(path.with_extension("json.bak").exists());
    }

    #[test]
    fn save_creates_missing_data_directory() {
        let dir = TempDir::new().unwrap();
        let storage = WatchlistStorage::new(dir.path().join("data/watchlist.json"));

        storage.save(&[item("a", "Inception")]).unwrap();
        assert_eq!(storage.load().len(), 1);
    }
}
