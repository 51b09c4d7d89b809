//! In-memory configuration provider

use std::collections::HashMap;

use parking_lot::RwLock;

use super::traits::{ConfigKey, ConfigProvider};

/// In-memory configuration provider for tests and embedding
///
/// Values can be changed at any time; the next tool call sees the new value.
///
/// # Example
///
/// ```
/// use grist_mcp_core::config::{ConfigKey, ConfigProvider, MemoryConfigProvider};
///
/// let config = MemoryConfigProvider::new()
///     .with(ConfigKey::ApiKey, "grist-key-123456")
///     .with(ConfigKey::ApiUrl, "http://localhost:8484/api");
/// assert!(config.has(ConfigKey::ApiKey));
/// ```
#[derive(Debug, Default)]
pub struct MemoryConfigProvider {
    values: RwLock<HashMap<ConfigKey, String>>,
}

impl MemoryConfigProvider {
    pub fn new() -> Self {
        Self {
            values: RwLock::new(HashMap::new()),
        }
    }

    /// Builder-style setter
    pub fn with(self, key: ConfigKey, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Set a value
    pub fn set(&self, key: ConfigKey, value: impl Into<String>) {
        self.values.write().insert(key, value.into());
    }

    /// Remove a value
    pub fn remove(&self, key: ConfigKey) {
        self.values.write().remove(&key);
    }

    /// Remove all values
    pub fn clear(&self) {
        self.values.write().clear();
    }
}

impl ConfigProvider for MemoryConfigProvider {
    fn name(&self) -> &str {
        "memory"
    }

    fn get(&self, key: ConfigKey) -> Option<String> {
        self.values
            .read()
            .get(&key)
            .filter(|value| !value.trim().is_empty())
            .cloned()
    }
}
