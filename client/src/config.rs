//! Client configuration
//!
//! Loaded from TOML. The first match wins:
//!
//! 1. a path passed on the command line
//! 2. `farm-client.toml` in the working directory
//! 3. `<config dir>/farm-client/config.toml`
//!
//! With no file, built-in defaults are used and minting is disabled.
//! `FARM_API_URL` overrides `api_url`; an empty value disables minting.
//!
//! ```toml
//! api_url = "https://api.example.com"
//!
//! [farm]
//! farm_id = 1
//! sender = "0x..."
//! session_id = "..."
//! signature = "0x..."
//!
//! [inventory]
//! "Sunflower Seed" = 5
//! Axe = 1
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::game::{FarmIdentity, Inventory};

pub const API_URL_ENV: &str = "FARM_API_URL";
const LOCAL_CONFIG_FILE: &str = "farm-client.toml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the farm API. `None` disables minting.
    #[serde(default)]
    pub api_url: Option<String>,
    #[serde(default)]
    pub farm: FarmIdentity,
    /// Starting inventory for the local game state
    #[serde(default)]
    pub inventory: Inventory,
}

impl ClientConfig {
    /// Parse a config file at `path`
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Resolve and load the config, then apply environment overrides
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match explicit {
            Some(path) => {
                log::info!("Loading config from {:?}", path);
                Self::from_file(path)?
            }
            None => match default_paths().into_iter().find(|p| p.is_file()) {
                Some(path) => {
                    log::info!("Loading config from {:?}", path);
                    Self::from_file(&path)?
                }
                None => {
                    log::info!("No config file found, using defaults");
                    Self::default()
                }
            },
        };

        config.apply_env_override(std::env::var(API_URL_ENV).ok());
        Ok(config)
    }

    /// Apply the `FARM_API_URL` value, if any
    pub fn apply_env_override(&mut self, api_url: Option<String>) {
        if let Some(url) = api_url {
            self.api_url = Some(url);
        }
        if self.api_url.as_deref().map_or(false, |url| url.trim().is_empty()) {
            self.api_url = None;
        }
    }
}

fn default_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(LOCAL_CONFIG_FILE)];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("farm-client").join("config.toml"));
    }
    paths
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_full_config() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
api_url = "https://api.example.com"

[farm]
farm_id = 12
sender = "0xfarmer"
session_id = "abc"
signature = "0xsig"

[inventory]
"Sunflower Seed" = 5
Gnome = 1
"#
        )
        .unwrap();

        let config = ClientConfig::from_file(file.path()).unwrap();
        assert_eq!(config.api_url.as_deref(), Some("https://api.example.com"));
        assert_eq!(config.farm.farm_id, 12);
        assert_eq!(config.farm.sender, "0xfarmer");
        assert_eq!(config.inventory.count("Sunflower Seed"), 5);
        assert_eq!(config.inventory.count("Gnome"), 1);
    }

    #[test]
    fn test_missing_sections_default() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "").unwrap();

        let config = ClientConfig::from_file(file.path()).unwrap();
        assert_eq!(config, ClientConfig::default());
        assert!(config.api_url.is_none());
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "api_url = [").unwrap();

        assert!(matches!(
            ClientConfig::from_file(file.path()),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_explicit_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = ClientConfig::from_file(&dir.path().join("nope.toml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_env_override() {
        let mut config = ClientConfig::default();
        config.apply_env_override(Some("https://env.example.com".to_string()));
        assert_eq!(config.api_url.as_deref(), Some("https://env.example.com"));

        config.apply_env_override(None);
        assert_eq!(config.api_url.as_deref(), Some("https://env.example.com"));

        config.apply_env_override(Some(String::new()));
        assert!(config.api_url.is_none());
    }

    #[test]
    fn test_blank_api_url_in_file_disables_minting() {
        let mut config: ClientConfig = toml::from_str("api_url = \"  \"").unwrap();
        config.apply_env_override(None);
        assert!(config.api_url.is_none());
    }
}
