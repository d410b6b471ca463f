use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub providers: ProviderConfig,
    #[serde(default)]
    pub lookup: LookupConfig,
}

/// API keys for the metadata providers. Jikan needs no key, so anime
/// lookups work with an empty config. A provider whose key is unset is
/// skipped at lookup time.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// TMDb key (movies and TV, queried first)
    #[serde(default)]
    pub tmdb_api_key: String,

    /// OMDb key (movies and TV, fallback)
    #[serde(default)]
    pub omdb_api_key: String,

    /// RAWG key (games)
    #[serde(default)]
    pub rawg_api_key: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LookupConfig {
    /// Per-request timeout for provider calls, in seconds. A timed-out
    /// lookup is treated the same as "no result".
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    8
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Config {
    /// Load configuration from `path`. A missing file yields the
    /// defaults; a malformed file is an error the caller should surface.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {:?}", path))?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file {:?}", path))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load(&dir.path().join("config.toml")).unwrap();
        assert!(config.providers.tmdb_api_key.is_empty());
        assert_eq!(config.lookup.timeout_secs, 8);
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.providers.omdb_api_key = "abcd1234".to_string();
        config.lookup.timeout_secs = 5;
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded.providers.omdb_api_key, "abcd1234");
        assert!(loaded.providers.rawg_api_key.is_empty());
        assert_eq!(loaded.lookup.timeout_secs, 5);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[providers]\ntmdb_api_key = \"k\"\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.providers.tmdb_api_key, "k");
        assert_eq!(config.lookup.timeout_secs, 8);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "providers = not toml {").unwrap();

        assert!(Config::load(&path).is_err());
    }
}
