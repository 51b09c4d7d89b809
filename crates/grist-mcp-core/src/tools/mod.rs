//! The Grist tool operations
//!
//! Each operation validates its arguments, issues exactly one Grist request
//! and reshapes the response:
//!
//! ```text
//! tool call ──► GristTools::<op> ──► GristClient::request ──► Grist REST API
//!                     ▲                                            │
//!                     └──────────── ResponseShape ◄─── JSON ◄──────┘
//! ```
//!
//! | Operation | Request |
//! |---|---|
//! | `list_organizations` | `GET /orgs` |
//! | `list_workspaces` | `GET /orgs/{org_id}/workspaces` |
//! | `list_documents` | `GET /workspaces/{workspace_id}` |
//! | `list_tables` | `GET /docs/{doc_id}/tables` |
//! | `list_columns` | `GET /docs/{doc_id}/tables/{table_id}/columns` |
//! | `list_records` | `GET /docs/{doc_id}/tables/{table_id}/records` |
//! | `add_records` | `POST /docs/{doc_id}/tables/{table_id}/records` |
//! | `update_records` | `PATCH /docs/{doc_id}/tables/{table_id}/records` |
//! | `delete_records` | `POST /docs/{doc_id}/tables/{table_id}/data/delete` |
//! | `filter_sql_query` | `GET /docs/{doc_id}/sql?q=...` |
//! | `execute_sql_query` | `POST /docs/{doc_id}/sql` |

mod read;
mod write;
mod query;
mod shape;

use std::sync::Arc;

use crate::client::GristClient;
use crate::config::ConfigProvider;
use crate::error::GristResult;
use crate::logging::SharedLogger;

pub use query::{prepare_select_query, FilterQuery, DEFAULT_SQL_TIMEOUT_MS};
pub use read::records_query;
pub use shape::ResponseShape;

/// Entry point for all tool operations
#[derive(Debug)]
pub struct GristTools {
    client: GristClient,
}

impl GristTools {
    pub fn new(client: GristClient) -> Self {
        Self { client }
    }

    /// Build tools from a config provider and logger
    pub fn from_config(config: Arc<dyn ConfigProvider>, logger: SharedLogger) -> GristResult<Self> {
        Ok(Self::new(GristClient::new(config, logger)?))
    }

    pub fn client(&self) -> &GristClient {
        &self.client
    }

    fn logger(&self) -> &SharedLogger {
        self.client.logger()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use httpmock::MockServer;

    use super::GristTools;
    use crate::config::{ConfigKey, MemoryConfigProvider};
    use crate::logging::NoOpLogger;

    pub const KEY: &str = "test-key-0123456789";

    pub fn tools_for(server: &MockServer) -> GristTools {
        let config = MemoryConfigProvider::new()
            .with(ConfigKey::ApiKey, KEY)
            .with(ConfigKey::ApiUrl, server.url("/api"));
        GristTools::from_config(Arc::new(config), Arc::new(NoOpLogger::new())).unwrap()
    }
}
