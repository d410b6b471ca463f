pub mod storage;
pub mod store;

pub use storage::WatchlistStorage;
pub use store::{StoreError, WatchlistStore};
