//! Configuration providers and credential resolution
//!
//! - `ConfigProvider` trait with `EnvConfigProvider`, `FileConfigProvider`,
//!   `MemoryConfigProvider` and `ChainConfigProvider`
//! - `resolve_credential` turns provider values into a `Credential`

mod traits;
mod env;
mod memory;
mod file;
mod chain;
mod credential;

pub use traits::{ConfigKey, ConfigProvider};
pub use env::EnvConfigProvider;
pub use memory::MemoryConfigProvider;
pub use file::{ConfigFile, FileConfigProvider};
pub use chain::ChainConfigProvider;
pub use credential::{
    mask_key, normalize_base_url, resolve_credential, Credential, DEFAULT_API_URL,
};
