//! File-based configuration provider (YAML)
//!
//! Reads `~/.config/grist-mcp/config.yaml` (or an explicit path):
//!
//! ```yaml
//! api_key: "0123456789abcdef"
//! api_url: "https://grist.example.com/api"
//! log_level: debug
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::traits::{ConfigKey, ConfigProvider};
use crate::error::{GristError, GristResult};

/// Configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ConfigFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

impl ConfigFile {
    fn value(&self, key: ConfigKey) -> Option<&String> {
        match key {
            ConfigKey::ApiKey => self.api_key.as_ref(),
            ConfigKey::ApiUrl => self.api_url.as_ref(),
            ConfigKey::LogLevel => self.log_level.as_ref(),
        }
    }
}

/// YAML file configuration provider
///
/// The file is re-read on every lookup, so edits apply to the next tool call.
/// A missing file yields no values; a malformed file yields no values from
/// `get` and an error from `load`.
pub struct FileConfigProvider {
    path: PathBuf,
}

impl FileConfigProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// User-level config provider (~/.config/grist-mcp/config.yaml)
    pub fn user() -> Self {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")).join(".config"));
        Self::new(config_dir.join("grist-mcp").join("config.yaml"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load and parse the config file
    pub fn load(&self) -> GristResult<ConfigFile> {
        if !self.path.exists() {
            return Ok(ConfigFile::default());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| {
            GristError::configuration(format!("Failed to read {}: {}", self.path.display(), e))
        })?;

        if content.trim().is_empty() {
            return Ok(ConfigFile::default());
        }

        serde_yaml::from_str(&content).map_err(|e| {
            GristError::configuration(format!("Failed to parse {}: {}", self.path.display(), e))
        })
    }

    /// Write the config file, creating parent directories
    pub fn save(&self, config: &ConfigFile) -> GristResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| GristError::configuration(format!("Failed to create {}: {}", parent.display(), e)))?;
        }

        let content = serde_yaml::to_string(config)
            .map_err(|e| GristError::configuration(format!("Failed to serialize YAML: {}", e)))?;

        fs::write(&self.path, content)
            .map_err(|e| GristError::configuration(format!("Failed to write {}: {}", self.path.display(), e)))
    }
}

impl std::fmt::Debug for FileConfigProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileConfigProvider")
            .field("path", &self.path)
            .field("exists", &self.exists())
            .finish()
    }
}

impl ConfigProvider for FileConfigProvider {
    fn name(&self) -> &str {
        "file"
    }

    fn get(&self, key: ConfigKey) -> Option<String> {
        let config = self.load().ok()?;
        config
            .value(key)
            .filter(|value| !value.trim().is_empty())
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_has_no_values() {
        let dir = tempdir().unwrap();
        let provider = FileConfigProvider::new(dir.path().join("config.yaml"));

        assert!(!provider.exists());
        assert_eq!(provider.load().unwrap(), ConfigFile::default());
        assert_eq!(provider.get(ConfigKey::ApiKey), None);
    }

    #[test]
    fn test_read_yaml_values() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "api_key: secret-key-0001\napi_url: grist.example.com/api\n").unwrap();

        let provider = FileConfigProvider::new(&path);
        assert_eq!(provider.get(ConfigKey::ApiKey), Some("secret-key-0001".to_string()));
        assert_eq!(provider.get(ConfigKey::ApiUrl), Some("grist.example.com/api".to_string()));
        assert_eq!(provider.get(ConfigKey::LogLevel), None);
    }

    #[test]
    fn test_save_then_edit_is_seen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.yaml");
        let provider = FileConfigProvider::new(&path);

        provider
            .save(&ConfigFile {
                api_key: Some("first".to_string()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(provider.get(ConfigKey::ApiKey), Some("first".to_string()));

        fs::write(&path, "api_key: second\n").unwrap();
        assert_eq!(provider.get(ConfigKey::ApiKey), Some("second".to_string()));
    }

    #[test]
    fn test_malformed_yaml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "api_key: [unterminated\n").unwrap();

        let provider = FileConfigProvider::new(&path);
        assert!(matches!(provider.load(), Err(GristError::Configuration(_))));
        assert_eq!(provider.get(ConfigKey::ApiKey), None);
    }
}
