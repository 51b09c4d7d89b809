//! Write operations: add, update and delete records

use serde_json::{json, Map, Value};

use super::shape::ResponseShape;
use super::GristTools;
use crate::error::GristResult;
use crate::types::{normalize_new_records, normalize_record_updates, payload_ids, DeleteOutcome};
use crate::{log_error, log_info};

impl GristTools {
    /// Add records; returns the ids Grist assigned
    ///
    /// Records may be `{"fields": {...}}` or flat column mappings.
    pub async fn add_records(
        &self,
        doc_id: &str,
        table_id: &str,
        records: Vec<Map<String, Value>>,
    ) -> GristResult<Vec<i64>> {
        let records = normalize_new_records(records);
        let count = records.len();

        let response = self
            .client
            .post(
                &format!("/docs/{}/tables/{}/records", doc_id, table_id),
                &json!({ "records": records }),
            )
            .await?;

        let ids = ResponseShape::Field("records").ids(response);
        log_info!(
            self.logger(),
            "[GristTools] Added {} of {} records to {}/{}",
            ids.len(),
            count,
            doc_id,
            table_id
        );
        Ok(ids)
    }

    /// Update records; returns the ids of the updated rows
    ///
    /// Fails with a validation error before any request when a record has no `id`.
    /// Grist answers `null` here, so the ids normally come from the request payload.
    pub async fn update_records(
        &self,
        doc_id: &str,
        table_id: &str,
        records: Vec<Map<String, Value>>,
    ) -> GristResult<Vec<i64>> {
        let records = normalize_record_updates(records)?;

        let response = self
            .client
            .patch(
                &format!("/docs/{}/tables/{}/records", doc_id, table_id),
                &json!({ "records": records }),
            )
            .await?;

        let answered = matches!(response.get("records"), Some(Value::Array(_)));
        let ids = if answered {
            ResponseShape::Field("records").ids(response)
        } else {
            payload_ids(&records)
        };

        log_info!(
            self.logger(),
            "[GristTools] Updated {} records in {}/{}",
            ids.len(),
            doc_id,
            table_id
        );
        Ok(ids)
    }

    /// Delete records by row id
    ///
    /// Never fails: bad input and Grist errors are reported in the outcome so
    /// the caller can inspect them inline.
    pub async fn delete_records(
        &self,
        doc_id: &str,
        table_id: &str,
        record_ids: Vec<Value>,
    ) -> DeleteOutcome {
        if record_ids.is_empty() {
            return DeleteOutcome::failed("No record IDs provided");
        }

        let ids: Option<Vec<i64>> = record_ids.iter().map(Value::as_i64).collect();
        let Some(ids) = ids else {
            return DeleteOutcome::failed("All record IDs must be integers");
        };

        let result = self
            .client
            .post(
                &format!("/docs/{}/tables/{}/data/delete", doc_id, table_id),
                &json!(ids),
            )
            .await;

        match result {
            Ok(_) => {
                log_info!(
                    self.logger(),
                    "[GristTools] Deleted {} records from {}/{}",
                    ids.len(),
                    doc_id,
                    table_id
                );
                DeleteOutcome::deleted(ids)
            }
            Err(e) => {
                log_error!(
                    self.logger(),
                    "[GristTools] Failed to delete records from {}/{}: {}",
                    doc_id,
                    table_id,
                    e
                );
                DeleteOutcome::failed(format!("Error deleting records: {}", e))
            }
        }
    }
}
