//! Credential resolution

use std::fmt;

use super::traits::{ConfigKey, ConfigProvider};
use crate::error::{GristError, GristResult};

/// Public hosted Grist API
pub const DEFAULT_API_URL: &str = "https://docs.getgrist.com/api";

/// Bearer token and base URL for one tool call
///
/// `Debug` and `Display` only ever show the masked key.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    api_key: String,
    base_url: String,
}

impl Credential {
    /// Build a credential, normalizing the URL
    pub fn new(api_key: impl Into<String>, base_url: impl AsRef<str>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: normalize_base_url(base_url.as_ref()),
        }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Key safe for logs: first and last five characters
    pub fn masked_key(&self) -> String {
        mask_key(&self.api_key)
    }

    /// Value of the `Authorization` header
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.api_key)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("api_key", &self.masked_key())
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl fmt::Display for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (key {})", self.base_url, self.masked_key())
    }
}

/// Resolve a credential from a provider
///
/// Fails with `GristError::Configuration` when no API key is configured.
pub fn resolve_credential(provider: &dyn ConfigProvider) -> GristResult<Credential> {
    let api_key = provider
        .get(ConfigKey::ApiKey)
        .map(|key| key.trim().to_string())
        .filter(|key| !key.is_empty())
        .ok_or_else(|| {
            GristError::configuration(format!(
                "GRIST_API_KEY is not set (checked {} provider)",
                provider.name()
            ))
        })?;

    let base_url = provider
        .get(ConfigKey::ApiUrl)
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());

    Ok(Credential::new(api_key, base_url))
}

/// Prepend `https://` when no scheme is given and drop trailing slashes
pub fn normalize_base_url(url: &str) -> String {
    let url = url.trim();
    let with_scheme = if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("https://{}", url)
    };
    with_scheme.trim_end_matches('/').to_string()
}

/// Mask a key as `abcde...vwxyz`; short keys are hidden entirely
pub fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 10 {
        return "*****".to_string();
    }
    let head: String = chars[..5].iter().collect();
    let tail: String = chars[chars.len() - 5..].iter().collect();
    format!("{}...{}", head, tail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MemoryConfigProvider;

    #[test]
    fn test_missing_key_is_configuration_error() {
        let config = MemoryConfigProvider::new().with(ConfigKey::ApiUrl, "http://localhost/api");
        assert!(matches!(
            resolve_credential(&config),
            Err(GristError::Configuration(_))
        ));

        config.set(ConfigKey::ApiKey, "   ");
        assert!(matches!(
            resolve_credential(&config),
            Err(GristError::Configuration(_))
        ));
    }

    #[test]
    fn test_default_url() {
        let config = MemoryConfigProvider::new().with(ConfigKey::ApiKey, "key-1234567890");
        let credential = resolve_credential(&config).unwrap();
        assert_eq!(credential.base_url(), DEFAULT_API_URL);
        assert_eq!(credential.api_key(), "key-1234567890");
        assert_eq!(credential.bearer(), "Bearer key-1234567890");
    }

    #[test]
    fn test_scheme_is_prepended() {
        let config = MemoryConfigProvider::new()
            .with(ConfigKey::ApiKey, "key-1234567890")
            .with(ConfigKey::ApiUrl, "docs.example.com/api/");
        let credential = resolve_credential(&config).unwrap();
        assert_eq!(credential.base_url(), "https://docs.example.com/api");

        assert_eq!(normalize_base_url("http://localhost:8484/api"), "http://localhost:8484/api");
    }

    #[test]
    fn test_key_is_masked() {
        let credential = Credential::new("abcde0123456789vwxyz", "https://docs.getgrist.com/api");
        assert_eq!(credential.masked_key(), "abcde...vwxyz");

        let debug = format!("{:?}", credential);
        let display = credential.to_string();
        assert!(!debug.contains("0123456789"));
        assert!(!display.contains("0123456789"));
        assert!(display.contains("abcde...vwxyz"));

        assert_eq!(mask_key("short"), "*****");
    }

    #[test]
    fn test_resolved_per_call() {
        let config = MemoryConfigProvider::new().with(ConfigKey::ApiKey, "first-key-00000");
        assert_eq!(resolve_credential(&config).unwrap().api_key(), "first-key-00000");

        config.set(ConfigKey::ApiKey, "second-key-0000");
        assert_eq!(resolve_credential(&config).unwrap().api_key(), "second-key-0000");
    }
}
