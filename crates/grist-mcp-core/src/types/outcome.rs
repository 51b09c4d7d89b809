//! Result shapes reported back to the calling model

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Result of `delete_grist_records`; failures are reported here, not raised
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteOutcome {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_ids: Option<Vec<i64>>,
}

impl DeleteOutcome {
    pub fn deleted(ids: Vec<i64>) -> Self {
        Self {
            success: true,
            message: format!("Successfully deleted {} records", ids.len()),
            deleted_ids: Some(ids),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            deleted_ids: None,
        }
    }
}

/// Rows returned by one of the SQL tools
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryRows {
    pub success: bool,
    /// Statement as sent to Grist
    pub query: String,
    pub record_count: usize,
    pub records: Vec<Map<String, Value>>,
}

/// A request refused before reaching Grist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rejection {
    pub success: bool,
    pub message: String,
}

/// Result of `filter_sql_query` / `execute_sql_query`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QueryOutcome {
    Rows(QueryRows),
    Rejected(Rejection),
}

impl QueryOutcome {
    pub fn rows(query: impl Into<String>, records: Vec<Map<String, Value>>) -> Self {
        QueryOutcome::Rows(QueryRows {
            success: true,
            query: query.into(),
            record_count: records.len(),
            records,
        })
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        QueryOutcome::Rejected(Rejection {
            success: false,
            message: message.into(),
        })
    }

    pub fn is_success(&self) -> bool {
        matches!(self, QueryOutcome::Rows(_))
    }
}
