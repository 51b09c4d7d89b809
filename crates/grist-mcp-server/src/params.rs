//! Tool argument schemas

use std::fmt;

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Map, Value};

/// Organization id, or its domain (e.g. `"docs"`)
#[derive(Debug, Clone, PartialEq, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum OrgId {
    Id(i64),
    Domain(String),
}

impl fmt::Display for OrgId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrgId::Id(id) => write!(f, "{}", id),
            OrgId::Domain(domain) => f.write_str(domain),
        }
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ListWorkspacesParams {
    /// ID of the organization
    pub org_id: OrgId,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ListDocumentsParams {
    /// ID of the workspace
    pub workspace_id: i64,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct DocParams {
    /// ID of the document
    pub doc_id: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct TableParams {
    /// ID of the document
    pub doc_id: String,
    /// ID of the table
    pub table_id: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ListRecordsParams {
    /// ID of the document
    pub doc_id: String,
    /// ID of the table
    pub table_id: String,
    /// Columns to sort by, comma separated; prefix with `-` for descending
    #[serde(default)]
    pub sort: Option<String>,
    /// Maximum number of records to return
    #[serde(default)]
    pub limit: Option<i64>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct WriteRecordsParams {
    /// ID of the document
    pub doc_id: String,
    /// ID of the table
    pub table_id: String,
    /// Records as `{"Column": value}` or `{"fields": {...}}`; updates also need `"id"`
    pub records: Vec<Map<String, Value>>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct DeleteRecordsParams {
    /// ID of the document
    pub doc_id: String,
    /// ID of the table
    pub table_id: String,
    /// Integer row ids to delete
    pub record_ids: Vec<Value>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct FilterSqlQueryParams {
    /// ID of the document
    pub doc_id: String,
    /// Table to query
    pub table_id: String,
    /// Columns to select (all when omitted)
    #[serde(default)]
    pub columns: Option<Vec<String>>,
    /// Equality filters, e.g. `{"Status": "active", "Age": 30}`
    #[serde(default)]
    pub where_conditions: Option<Map<String, Value>>,
    /// ORDER BY clause, e.g. `"Age DESC"`
    #[serde(default)]
    pub order_by: Option<String>,
    /// Maximum number of rows
    #[serde(default)]
    pub limit: Option<i64>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ExecuteSqlQueryParams {
    /// ID of the document
    pub doc_id: String,
    /// A SELECT (or WITH ... SELECT) statement
    pub sql_query: String,
    /// Values for `?` placeholders
    #[serde(default)]
    pub parameters: Option<Vec<Value>>,
    /// Query timeout in milliseconds (default 1000)
    #[serde(default)]
    pub timeout_ms: Option<u64>,
}
