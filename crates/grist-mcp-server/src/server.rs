//! MCP server exposing `GristTools` over rmcp
//!
//! Each tool forwards to one `GristTools` operation and returns its result
//! as pretty-printed JSON text. Validation failures are reported as
//! `invalid_params`; everything else as `internal_error`.

use std::sync::Arc;

use grist_mcp_core::{log_debug, log_warn, FilterQuery, GristError, GristTools, SharedLogger};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler,
};
use serde::Serialize;

use crate::params::{
    DeleteRecordsParams, DocParams, ExecuteSqlQueryParams, FilterSqlQueryParams,
    ListDocumentsParams, ListRecordsParams, ListWorkspacesParams, TableParams, WriteRecordsParams,
};

const INSTRUCTIONS: &str = "Tools for browsing and editing Grist documents. \
Navigate organizations -> workspaces -> documents -> tables, then read, add, \
update or delete records. SQL tools accept read-only SELECT statements only.";

/// Map a core error onto an MCP error
pub fn to_mcp_error(error: GristError) -> McpError {
    if error.is_validation() {
        McpError::invalid_params(error.to_string(), None)
    } else {
        McpError::internal_error(error.to_string(), None)
    }
}

fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(e.to_string(), None))?;
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

#[derive(Clone)]
pub struct GristServer {
    tools: Arc<GristTools>,
    logger: SharedLogger,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl GristServer {
    pub fn new(tools: Arc<GristTools>, logger: SharedLogger) -> Self {
        Self {
            tools,
            logger,
            tool_router: Self::tool_router(),
        }
    }

    #[tool(description = "List all Grist organizations the API key can access")]
    async fn list_organizations(&self) -> Result<CallToolResult, McpError> {
        log_debug!(self.logger, "[GristServer] list_organizations");
        let orgs = self.tools.list_organizations().await.map_err(to_mcp_error)?;
        json_result(&orgs)
    }

    #[tool(description = "List workspaces in a Grist organization")]
    async fn list_workspaces(
        &self,
        Parameters(params): Parameters<ListWorkspacesParams>,
    ) -> Result<CallToolResult, McpError> {
        log_debug!(self.logger, "[GristServer] list_workspaces org={}", params.org_id);
        let workspaces = self
            .tools
            .list_workspaces(&params.org_id)
            .await
            .map_err(to_mcp_error)?;
        json_result(&workspaces)
    }

    #[tool(description = "List documents in a Grist workspace")]
    async fn list_documents(
        &self,
        Parameters(params): Parameters<ListDocumentsParams>,
    ) -> Result<CallToolResult, McpError> {
        log_debug!(self.logger, "[GristServer] list_documents workspace={}", params.workspace_id);
        let documents = self
            .tools
            .list_documents(params.workspace_id)
            .await
            .map_err(to_mcp_error)?;
        json_result(&documents)
    }

    #[tool(description = "List tables in a Grist document")]
    async fn list_tables(
        &self,
        Parameters(params): Parameters<DocParams>,
    ) -> Result<CallToolResult, McpError> {
        log_debug!(self.logger, "[GristServer] list_tables doc={}", params.doc_id);
        let tables = self.tools.list_tables(&params.doc_id).await.map_err(to_mcp_error)?;
        json_result(&tables)
    }

    #[tool(description = "List columns of a Grist table with their metadata")]
    async fn list_columns(
        &self,
        Parameters(params): Parameters<TableParams>,
    ) -> Result<CallToolResult, McpError> {
        log_debug!(self.logger, "[GristServer] list_columns {}/{}", params.doc_id, params.table_id);
        let columns = self
            .tools
            .list_columns(&params.doc_id, &params.table_id)
            .await
            .map_err(to_mcp_error)?;
        json_result(&columns)
    }

    #[tool(description = "List records of a Grist table, optionally sorted and limited")]
    async fn list_records(
        &self,
        Parameters(params): Parameters<ListRecordsParams>,
    ) -> Result<CallToolResult, McpError> {
        log_debug!(self.logger, "[GristServer] list_records {}/{}", params.doc_id, params.table_id);
        let records = self
            .tools
            .list_records(
                &params.doc_id,
                &params.table_id,
                params.sort.as_deref(),
                params.limit,
            )
            .await
            .map_err(to_mcp_error)?;
        json_result(&records)
    }

    #[tool(description = "Add records to a Grist table; returns the new record ids")]
    async fn add_grist_records(
        &self,
        Parameters(params): Parameters<WriteRecordsParams>,
    ) -> Result<CallToolResult, McpError> {
        log_debug!(self.logger, "[GristServer] add_grist_records {}/{}", params.doc_id, params.table_id);
        let ids = self
            .tools
            .add_records(&params.doc_id, &params.table_id, params.records)
            .await
            .map_err(to_mcp_error)?;
        json_result(&ids)
    }

    #[tool(description = "Update records in a Grist table; every record needs an integer 'id'")]
    async fn update_grist_records(
        &self,
        Parameters(params): Parameters<WriteRecordsParams>,
    ) -> Result<CallToolResult, McpError> {
        log_debug!(self.logger, "[GristServer] update_grist_records {}/{}", params.doc_id, params.table_id);
        let ids = self
            .tools
            .update_records(&params.doc_id, &params.table_id, params.records)
            .await
            .map_err(to_mcp_error)?;
        json_result(&ids)
    }

    #[tool(description = "Delete records from a Grist table by row id")]
    async fn delete_grist_records(
        &self,
        Parameters(params): Parameters<DeleteRecordsParams>,
    ) -> Result<CallToolResult, McpError> {
        log_debug!(self.logger, "[GristServer] delete_grist_records {}/{}", params.doc_id, params.table_id);
        let outcome = self
            .tools
            .delete_records(&params.doc_id, &params.table_id, params.record_ids)
            .await;
        json_result(&outcome)
    }

    #[tool(description = "Query a Grist table with column selection, equality filters, ordering and a limit. \
        Values are inserted into the SQL as-is; use execute_sql_query with parameters for untrusted input")]
    async fn filter_sql_query(
        &self,
        Parameters(params): Parameters<FilterSqlQueryParams>,
    ) -> Result<CallToolResult, McpError> {
        log_debug!(self.logger, "[GristServer] filter_sql_query {}/{}", params.doc_id, params.table_id);
        let filter = FilterQuery {
            table_id: params.table_id,
            columns: params.columns,
            where_conditions: params.where_conditions,
            order_by: params.order_by,
            limit: params.limit,
        };
        let outcome = self
            .tools
            .filter_sql_query(&params.doc_id, &filter)
            .await
            .map_err(to_mcp_error)?;
        json_result(&outcome)
    }

    #[tool(description = "Run a read-only SQL SELECT against a Grist document, with optional ? parameters")]
    async fn execute_sql_query(
        &self,
        Parameters(params): Parameters<ExecuteSqlQueryParams>,
    ) -> Result<CallToolResult, McpError> {
        log_debug!(self.logger, "[GristServer] execute_sql_query doc={}", params.doc_id);
        let outcome = self
            .tools
            .execute_sql_query(
                &params.doc_id,
                &params.sql_query,
                params.parameters,
                params.timeout_ms,
            )
            .await
            .map_err(to_mcp_error)?;
        if !outcome.is_success() {
            log_warn!(self.logger, "[GristServer] execute_sql_query rejected on {}", params.doc_id);
        }
        json_result(&outcome)
    }
}

#[tool_handler]
impl ServerHandler for GristServer {
    fn get_info(&self) -> ServerInfo {
        let mut info = ServerInfo {
            instructions: Some(INSTRUCTIONS.into()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        };
        info.server_info.name = "grist-mcp".into();
        info.server_info.version = env!("CARGO_PKG_VERSION").into();
        info
    }
}
