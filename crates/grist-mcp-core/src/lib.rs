//! Grist MCP Core
//!
//! Translates LLM tool calls into Grist REST API requests and reshapes the
//! responses into tool results. The crate is transport agnostic: the MCP
//! server binary (or any other host) only has to call `GristTools`.
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use grist_mcp_core::{ChainConfigProvider, GristTools, StderrLogger};
//!
//! let tools = GristTools::from_config(
//!     Arc::new(ChainConfigProvider::standard()),
//!     Arc::new(StderrLogger::new()),
//! )?;
//!
//! let tables = tools.list_tables("fTxSbuAoVqHMQa2bZPg5zF").await?;
//! let outcome = tools
//!     .execute_sql_query("fTxSbuAoVqHMQa2bZPg5zF", "SELECT * FROM People", None, None)
//!     .await?;
//! ```

pub mod error;
pub mod logging;
pub mod config;
pub mod types;
pub mod client;
pub mod tools;

pub use error::{GristError, GristResult};

pub use logging::{LogLevel, Logger, NoOpLogger, SharedLogger, StderrLogger};

pub use config::{
    resolve_credential, ChainConfigProvider, ConfigKey, ConfigProvider, Credential,
    EnvConfigProvider, FileConfigProvider, MemoryConfigProvider, DEFAULT_API_URL,
};

pub use types::{
    Column, DeleteOutcome, Document, Organization, QueryOutcome, Record, RecordInput, Table,
    Workspace,
};

pub use client::{GristClient, REQUEST_TIMEOUT};

pub use tools::{FilterQuery, GristTools, ResponseShape, DEFAULT_SQL_TIMEOUT_MS};
