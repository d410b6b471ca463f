use anyhow::Result;
use std::path::{Path, PathBuf};

/// Base path override from the environment, used by tests and containers
pub fn base_path_override() -> Option<PathBuf> {
    std::env::var("WATCHKEEP_BASE_PATH").ok().map(PathBuf::from)
}

pub struct PathManager {
    config_dir: PathBuf,
    data_dir: PathBuf,
    log_dir: PathBuf,
}

impl PathManager {
    pub fn new() -> Result<Self> {
        let base_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?
            .join("watchkeep");

        Ok(Self::from_base(base_dir))
    }

    pub fn from_base(base: PathBuf) -> Self {
        Self {
            config_dir: base.clone(),
            data_dir: base.join("data"),
            log_dir: base.join("logs"),
        }
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    pub fn watchlist_file(&self) -> PathBuf {
        self.data_dir.join("watchlist.json")
    }

    pub fn ensure_directories(&self) -> Result<()> {
        std::fs::create_dir_all(&self.config_dir)?;
        std::fs::create_dir_all(&self.data_dir)?;
        std::fs::create_dir_all(&self.log_dir)?;
        Ok(())
    }
}

impl Default for PathManager {
    fn default() -> Self {
        if let Some(base) = base_path_override() {
            return Self::from_base(base);
        }

        // Platform-specific paths (e.g., ~/.config/watchkeep on Linux),
        // falling back to a dotdir in the working directory
        Self::new().unwrap_or_else(|_| Self::from_base(PathBuf::from(".watchkeep")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_hang_off_base() {
        let paths = PathManager::from_base(PathBuf::from("/tmp/wk-test"));
        assert_eq!(paths.config_file(), PathBuf::from("/tmp/wk-test/config.toml"));
        assert_eq!(
            paths.watchlist_file(),
            PathBuf::from("/tmp/wk-test/data/watchlist.json")
        );
    }
}
