//! SQL query operations

use serde_json::{json, Map, Value};

use super::shape::ResponseShape;
use super::GristTools;
use crate::error::GristResult;
use crate::types::QueryOutcome;
use crate::{log_info, log_warn};

/// Default Grist SQL timeout in milliseconds
pub const DEFAULT_SQL_TIMEOUT_MS: u64 = 1000;

const ONLY_SELECT: &str = "Only SELECT queries are allowed";

/// A `SELECT` over one table with equality filters
///
/// **Trusted input only.** Table, column and `ORDER BY` text and the filter
/// values are interpolated into the statement as-is; string values are
/// wrapped in single quotes but not escaped. Use `execute_sql_query` with
/// positional parameters for untrusted values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterQuery {
    pub table_id: String,
    /// Columns to select; `None` or empty selects `*`
    pub columns: Option<Vec<String>>,
    /// `column = value` conditions, joined with `AND` in insertion order
    pub where_conditions: Option<Map<String, Value>>,
    pub order_by: Option<String>,
    /// Appended only when positive
    pub limit: Option<i64>,
}

impl FilterQuery {
    pub fn new(table_id: impl Into<String>) -> Self {
        Self {
            table_id: table_id.into(),
            ..Default::default()
        }
    }

    pub fn with_columns(mut self, columns: Vec<String>) -> Self {
        self.columns = Some(columns);
        self
    }

    pub fn with_condition(mut self, column: impl Into<String>, value: Value) -> Self {
        self.where_conditions
            .get_or_insert_with(Map::new)
            .insert(column.into(), value);
        self
    }

    pub fn with_order_by(mut self, order_by: impl Into<String>) -> Self {
        self.order_by = Some(order_by.into());
        self
    }

    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Render the statement
    pub fn to_sql(&self) -> String {
        let columns = match &self.columns {
            Some(columns) if !columns.is_empty() => columns.join(", "),
            _ => "*".to_string(),
        };

        let mut sql = format!("SELECT {} FROM {}", columns, self.table_id);

        if let Some(conditions) = self.where_conditions.as_ref().filter(|c| !c.is_empty()) {
            let clauses: Vec<String> = conditions
                .iter()
                .map(|(column, value)| match value {
                    Value::String(text) => format!("{} = '{}'", column, text),
                    other => format!("{} = {}", column, other),
                })
                .collect();
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
        }

        if let Some(order_by) = self.order_by.as_deref().filter(|o| !o.trim().is_empty()) {
            sql.push_str(" ORDER BY ");
            sql.push_str(order_by);
        }

        if let Some(limit) = self.limit.filter(|l| *l > 0) {
            sql.push_str(&format!(" LIMIT {}", limit));
        }

        sql
    }
}

/// Trim a caller statement and allow only `SELECT` / `WITH`
///
/// Surrounding whitespace and one trailing `;` (with any space before it)
/// are removed. Returns `None`
/// for anything else.
pub fn prepare_select_query(sql: &str) -> Option<String> {
    let trimmed = sql.trim();
    let trimmed = trimmed.strip_suffix(';').unwrap_or(trimmed).trim_end();

    let lowered = trimmed.to_lowercase();
    if lowered.starts_with("select") || lowered.starts_with("with") {
        Some(trimmed.to_string())
    } else {
        None
    }
}

impl GristTools {
    /// Run a generated `SELECT` (see `FilterQuery` for the input contract)
    pub async fn filter_sql_query(&self, doc_id: &str, filter: &FilterQuery) -> GristResult<QueryOutcome> {
        let sql = filter.to_sql();

        let response = self
            .client
            .get(&format!("/docs/{}/sql", doc_id), &[("q", sql.clone())])
            .await?;

        let rows = ResponseShape::Field("records").fields(response);
        log_info!(self.logger(), "[GristTools] {} returned {} rows", sql, rows.len());
        Ok(QueryOutcome::rows(sql, rows))
    }

    /// Run a caller-supplied read-only statement
    ///
    /// Statements that do not start with `SELECT` or `WITH` are rejected in
    /// the outcome without contacting Grist.
    pub async fn execute_sql_query(
        &self,
        doc_id: &str,
        sql_query: &str,
        parameters: Option<Vec<Value>>,
        timeout_ms: Option<u64>,
    ) -> GristResult<QueryOutcome> {
        let Some(sql) = prepare_select_query(sql_query) else {
            log_warn!(self.logger(), "[GristTools] Rejected non-SELECT query on {}", doc_id);
            return Ok(QueryOutcome::rejected(ONLY_SELECT));
        };

        let body = json!({
            "sql": sql,
            "args": parameters.unwrap_or_default(),
            "timeout": timeout_ms.unwrap_or(DEFAULT_SQL_TIMEOUT_MS),
        });

        let response = self
            .client
            .post(&format!("/docs/{}/sql", doc_id), &body)
            .await?;

        let rows = ResponseShape::Field("records").fields(response);
        log_info!(self.logger(), "[GristTools] SQL query on {} returned {} rows", doc_id, rows.len());
        Ok(QueryOutcome::rows(sql, rows))
    }
}
