//! Environment variable configuration provider

use std::collections::HashMap;
use std::env;

use once_cell::sync::Lazy;

use super::traits::{ConfigKey, ConfigProvider};

/// Environment variables consulted for each key, in priority order
static ENV_VAR_MAP: Lazy<HashMap<ConfigKey, Vec<&'static str>>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert(ConfigKey::ApiKey, vec!["GRIST_API_KEY"]);
    m.insert(ConfigKey::ApiUrl, vec!["GRIST_API_HOST", "GRIST_API_URL"]);
    m.insert(ConfigKey::LogLevel, vec!["GRIST_MCP_LOG_LEVEL", "LOG_LEVEL"]);
    m
});

/// Configuration provider that reads from environment variables
///
/// Read-only. Values from a `.env` file are visible here once the host
/// process has loaded it (the server does so with `dotenvy` at startup).
///
/// | Key | Variables |
/// |---|---|
/// | `ApiKey` | `GRIST_API_KEY` |
/// | `ApiUrl` | `GRIST_API_HOST`, `GRIST_API_URL` |
/// | `LogLevel` | `GRIST_MCP_LOG_LEVEL`, `LOG_LEVEL` |
#[derive(Debug, Default)]
pub struct EnvConfigProvider {
    _private: (),
}

impl EnvConfigProvider {
    pub fn new() -> Self {
        Self { _private: () }
    }

    /// Environment variable names for a key
    pub fn env_vars_for(key: ConfigKey) -> &'static [&'static str] {
        ENV_VAR_MAP.get(&key).map(|v| v.as_slice()).unwrap_or(&[])
    }
}

impl ConfigProvider for EnvConfigProvider {
    fn name(&self) -> &str {
        "env"
    }

    fn get(&self, key: ConfigKey) -> Option<String> {
        Self::env_vars_for(key)
            .iter()
            .filter_map(|var| env::var(var).ok())
            .find(|value| !value.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_provider_name() {
        assert_eq!(EnvConfigProvider::new().name(), "env");
    }

    #[test]
    fn test_env_vars_for_every_key() {
        for key in ConfigKey::ALL {
            assert!(!EnvConfigProvider::env_vars_for(key).is_empty());
        }
    }

    #[test]
    fn test_env_provider_fallback_and_empty() {
        // LOG_LEVEL is only consulted through the fallback name
        env::remove_var("GRIST_MCP_LOG_LEVEL");
        env::set_var("LOG_LEVEL", "debug");

        let provider = EnvConfigProvider::new();
        assert_eq!(provider.get(ConfigKey::LogLevel), Some("debug".to_string()));

        env::set_var("GRIST_MCP_LOG_LEVEL", "");
        assert_eq!(provider.get(ConfigKey::LogLevel), Some("debug".to_string()));

        env::set_var("GRIST_MCP_LOG_LEVEL", "error");
        assert_eq!(provider.get(ConfigKey::LogLevel), Some("error".to_string()));

        env::remove_var("GRIST_MCP_LOG_LEVEL");
        env::remove_var("LOG_LEVEL");
        assert!(!provider.has(ConfigKey::LogLevel));
    }
}
