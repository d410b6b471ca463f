pub mod add;
pub mod config;
pub mod edit;
pub mod list;
pub mod remove;
pub mod toggle;

use color_eyre::eyre::eyre;
use color_eyre::Result;
use tracing::debug;
use watchkeep_config::{Config, PathManager};
use watchkeep_core::{WatchlistStorage, WatchlistStore};
use watchkeep_providers::MetadataResolver;

/// Build the store the way every command needs it: paths, config,
/// resolver, storage, then load.
pub fn open_store() -> Result<WatchlistStore> {
    let paths = PathManager::default();
    paths
        .ensure_directories()
        .map_err(|e| eyre!("Failed to prepare data directories: {}", e))?;

    let config = Config::load(&paths.config_file()).map_err(|e| eyre!("{}", e))?;
    let resolver = MetadataResolver::from_config(&config);
    let storage = WatchlistStorage::new(paths.watchlist_file());

    let mut store = WatchlistStore::new(storage, Box::new(resolver));
    store.load();
    debug!("Opened watchlist with {} item(s)", store.len());
    Ok(store)
}

/// Resolve a possibly-shortened id against the collection. The store's
/// contract stays exact-id; prefixes are a CLI convenience.
pub fn resolve_id(store: &WatchlistStore, prefix: &str) -> Result<String> {
    let matches: Vec<&str> = store
        .items()
        .iter()
        .filter(|item| item.id.starts_with(prefix))
        .map(|item| item.id.as_str())
        .collect();

    match matches.as_slice() {
        [id] => Ok((*id).to_string()),
        [] => Err(eyre!("No item with id '{}'", prefix)),
        _ => Err(eyre!(
            "Id '{}' is ambiguous ({} matches); use more characters",
            prefix,
            matches.len()
        )),
    }
}

/// First id segment, enough to address an item from the shell
pub fn short_id(id: &str) -> &str {
    id.split('-').next().unwrap_or(id)
}
