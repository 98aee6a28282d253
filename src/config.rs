use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{API_URL_ENV, DEFAULT_API_BASE_URL, DEFAULT_LOG_FILE, DEFAULT_STORE_NAME};

/// Process-wide settings, fixed once the client is constructed
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_base_url: String,
    pub store_name: String,
    pub log_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_base_url: String::from(DEFAULT_API_BASE_URL),
            store_name: String::from(DEFAULT_STORE_NAME),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

impl Config {
    /// `~/.storefront/config.yaml`
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".storefront")
            .join("config.yaml")
    }

    /// Defaults, then the config file, then the environment
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(&Self::default_path())?;
        config.apply_env(std::env::var(API_URL_ENV).ok());
        Ok(config)
    }

    /// Load from a YAML file; a missing file yields the defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        if content.trim().is_empty() {
            return Ok(Config::default());
        }
        let config = serde_yaml::from_str::<Config>(&content)
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok(config)
    }

    pub fn apply_env(&mut self, api_url: Option<String>) {
        if let Some(url) = api_url.filter(|u| !u.trim().is_empty()) {
            self.api_base_url = url;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("nope.yaml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_file_overrides_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "api_base_url: http://shop.internal:9000/api").unwrap();
        writeln!(file, "store_name: Corner Shop").unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.api_base_url, "http://shop.internal:9000/api");
        assert_eq!(config.store_name, "Corner Shop");
        assert_eq!(config.log_file, PathBuf::from(DEFAULT_LOG_FILE));
    }

    #[test]
    fn test_env_overrides_file() {
        let mut config = Config {
            api_base_url: "http://from-file/api".into(),
            ..Config::default()
        };
        config.apply_env(Some("http://from-env/api".into()));
        assert_eq!(config.api_base_url, "http://from-env/api");

        config.apply_env(Some("  ".into()));
        assert_eq!(config.api_base_url, "http://from-env/api");
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "api_base_url: [unclosed").unwrap();
        assert!(Config::load_from(file.path()).is_err());
    }
}
