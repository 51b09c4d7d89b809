//! Configuration provider trait

use std::fmt;

/// Configuration values recognized by the Grist tools
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigKey {
    /// Bearer token for the Grist API (required)
    ApiKey,
    /// Base URL of the Grist API, e.g. `https://docs.getgrist.com/api`
    ApiUrl,
    /// Log verbosity for the server process
    LogLevel,
}

impl ConfigKey {
    /// All keys, in declaration order
    pub const ALL: [ConfigKey; 3] = [ConfigKey::ApiKey, ConfigKey::ApiUrl, ConfigKey::LogLevel];

    /// Field name used in YAML config files
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigKey::ApiKey => "api_key",
            ConfigKey::ApiUrl => "api_url",
            ConfigKey::LogLevel => "log_level",
        }
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Source of configuration values
///
/// Implementations:
/// - `EnvConfigProvider`: process environment (`GRIST_API_KEY`, ...)
/// - `FileConfigProvider`: YAML file (~/.config/grist-mcp/config.yaml)
/// - `MemoryConfigProvider`: in-memory for tests
/// - `ChainConfigProvider`: first provider with a value wins
///
/// Providers are queried on every tool call, so a changed value is picked up
/// by the next call.
pub trait ConfigProvider: Send + Sync {
    /// Human-readable name of this provider
    fn name(&self) -> &str;

    /// Look up a value. Empty values are reported as `None`.
    fn get(&self, key: ConfigKey) -> Option<String>;

    /// Check if a value is set
    fn has(&self, key: ConfigKey) -> bool {
        self.get(key).is_some()
    }
}
