//! Chained configuration provider with fallback behavior

use std::sync::Arc;

use super::traits::{ConfigKey, ConfigProvider};

/// A provider that tries several providers in order and returns the first value
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use grist_mcp_core::config::{
///     ChainConfigProvider, ConfigKey, ConfigProvider, EnvConfigProvider, MemoryConfigProvider,
/// };
///
/// let overrides: Arc<dyn ConfigProvider> =
///     Arc::new(MemoryConfigProvider::new().with(ConfigKey::ApiKey, "override-key"));
/// let env: Arc<dyn ConfigProvider> = Arc::new(EnvConfigProvider::new());
///
/// let chain = ChainConfigProvider::new(vec![overrides, env]);
/// assert_eq!(chain.get(ConfigKey::ApiKey).as_deref(), Some("override-key"));
/// ```
pub struct ChainConfigProvider {
    providers: Vec<Arc<dyn ConfigProvider>>,
}

impl ChainConfigProvider {
    pub fn new(providers: Vec<Arc<dyn ConfigProvider>>) -> Self {
        Self { providers }
    }

    /// Environment first, then the user config file
    pub fn standard() -> Self {
        Self::new(vec![
            Arc::new(super::EnvConfigProvider::new()),
            Arc::new(super::FileConfigProvider::user()),
        ])
    }

    pub fn providers(&self) -> &[Arc<dyn ConfigProvider>] {
        &self.providers
    }

    /// Find which provider supplies a key
    pub fn find_provider(&self, key: ConfigKey) -> Option<&Arc<dyn ConfigProvider>> {
        self.providers.iter().find(|p| p.has(key))
    }
}

impl ConfigProvider for ChainConfigProvider {
    fn name(&self) -> &str {
        "chain"
    }

    fn get(&self, key: ConfigKey) -> Option<String> {
        self.providers.iter().find_map(|p| p.get(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MemoryConfigProvider;

    #[test]
    fn test_first_value_wins() {
        let first: Arc<dyn ConfigProvider> =
            Arc::new(MemoryConfigProvider::new().with(ConfigKey::ApiUrl, "http://first/api"));
        let second: Arc<dyn ConfigProvider> = Arc::new(
            MemoryConfigProvider::new()
                .with(ConfigKey::ApiUrl, "http://second/api")
                .with(ConfigKey::ApiKey, "second-key"),
        );
        let chain = ChainConfigProvider::new(vec![first, second]);

        assert_eq!(chain.get(ConfigKey::ApiUrl), Some("http://first/api".to_string()));
        assert_eq!(chain.get(ConfigKey::ApiKey), Some("second-key".to_string()));
        assert_eq!(chain.get(ConfigKey::LogLevel), None);
    }

    #[test]
    fn test_find_provider() {
        let first: Arc<dyn ConfigProvider> = Arc::new(MemoryConfigProvider::new());
        let second: Arc<dyn ConfigProvider> =
            Arc::new(MemoryConfigProvider::new().with(ConfigKey::ApiKey, "k"));
        let chain = ChainConfigProvider::new(vec![first, second.clone()]);

        let found = chain.find_provider(ConfigKey::ApiKey).unwrap();
        assert!(Arc::ptr_eq(found, &second));
        assert!(chain.find_provider(ConfigKey::LogLevel).is_none());
    }

    #[test]
    fn test_empty_chain() {
        let chain = ChainConfigProvider::new(Vec::new());
        assert_eq!(chain.name(), "chain");
        assert!(!chain.has(ConfigKey::ApiKey));
    }
}
