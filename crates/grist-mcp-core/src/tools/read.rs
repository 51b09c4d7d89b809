//! Read operations: organizations, workspaces, documents, tables, columns, records

use std::fmt::Display;

use super::shape::ResponseShape;
use super::GristTools;
use crate::error::GristResult;
use crate::log_info;
use crate::types::{Column, Document, Organization, Record, Table, Workspace};

/// Query parameters for `list_records`
///
/// `sort` is forwarded when non-empty, `limit` only when positive.
pub fn records_query(sort: Option<&str>, limit: Option<i64>) -> Vec<(&'static str, String)> {
    let mut query = Vec::new();
    if let Some(sort) = sort.map(str::trim).filter(|s| !s.is_empty()) {
        query.push(("sort", sort.to_string()));
    }
    if let Some(limit) = limit.filter(|l| *l > 0) {
        query.push(("limit", limit.to_string()));
    }
    query
}

impl GristTools {
    /// Organizations the key has access to
    pub async fn list_organizations(&self) -> GristResult<Vec<Organization>> {
        let response = self.client.get("/orgs", &[]).await?;
        let orgs: Vec<Organization> = ResponseShape::Root.extract(response)?;
        log_info!(self.logger(), "[GristTools] Found {} organizations", orgs.len());
        Ok(orgs)
    }

    /// Workspaces of an organization; `org_id` may be a numeric id or a domain
    pub async fn list_workspaces(&self, org_id: impl Display) -> GristResult<Vec<Workspace>> {
        let response = self
            .client
            .get(&format!("/orgs/{}/workspaces", org_id), &[])
            .await?;
        let workspaces: Vec<Workspace> = ResponseShape::Root.extract(response)?;
        log_info!(
            self.logger(),
            "[GristTools] Found {} workspaces in organization {}",
            workspaces.len(),
            org_id
        );
        Ok(workspaces)
    }

    pub async fn list_documents(&self, workspace_id: i64) -> GristResult<Vec<Document>> {
        let response = self
            .client
            .get(&format!("/workspaces/{}", workspace_id), &[])
            .await?;
        let docs: Vec<Document> = ResponseShape::Field("docs").extract(response)?;
        log_info!(
            self.logger(),
            "[GristTools] Found {} documents in workspace {}",
            docs.len(),
            workspace_id
        );
        Ok(docs)
    }

    pub async fn list_tables(&self, doc_id: &str) -> GristResult<Vec<Table>> {
        let response = self
            .client
            .get(&format!("/docs/{}/tables", doc_id), &[])
            .await?;
        let tables: Vec<Table> = ResponseShape::Field("tables").extract(response)?;
        log_info!(self.logger(), "[GristTools] Found {} tables in {}", tables.len(), doc_id);
        Ok(tables)
    }

    pub async fn list_columns(&self, doc_id: &str, table_id: &str) -> GristResult<Vec<Column>> {
        let response = self
            .client
            .get(&format!("/docs/{}/tables/{}/columns", doc_id, table_id), &[])
            .await?;
        let columns: Vec<Column> = ResponseShape::Field("columns").extract(response)?;
        log_info!(
            self.logger(),
            "[GristTools] Found {} columns in {}/{}",
            columns.len(),
            doc_id,
            table_id
        );
        Ok(columns)
    }

    /// Records of a table, optionally sorted (`"-Age,Name"`) and limited
    pub async fn list_records(
        &self,
        doc_id: &str,
        table_id: &str,
        sort: Option<&str>,
        limit: Option<i64>,
    ) -> GristResult<Vec<Record>> {
        let query = records_query(sort, limit);
        let response = self
            .client
            .get(&format!("/docs/{}/tables/{}/records", doc_id, table_id), &query)
            .await?;
        let records: Vec<Record> = ResponseShape::Field("records").extract(response)?;
        log_info!(
            self.logger(),
            "[GristTools] Found {} records in {}/{}",
            records.len(),
            doc_id,
            table_id
        );
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GristError;
    use crate::tools::test_support::tools_for;
    use httpmock::prelude::*;
    use serde_json::json;

    #[test]
    fn test_records_query() {
        assert!(records_query(None, None).is_empty());
        assert_eq!(
            records_query(Some("-Age"), Some(5)),
            vec![("sort", "-Age".to_string()), ("limit", "5".to_string())]
        );
        assert!(records_query(None, Some(0)).is_empty());
        assert!(records_query(None, Some(-1)).is_empty());
        assert!(records_query(Some("  "), None).is_empty());
    }

    #[tokio::test]
    async fn test_list_organizations() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/orgs");
                then.status(200).json_body(json!([
                    {"id": 1, "name": "Personal", "domain": null},
                    {"id": 2, "name": "Acme", "domain": "acme", "access": "owners"}
                ]));
            })
            .await;

        let orgs = tools_for(&server).list_organizations().await.unwrap();
        assert_eq!(orgs.len(), 2);
        assert_eq!(orgs[1].name, "Acme");
        assert_eq!(orgs[1].domain.as_deref(), Some("acme"));
        assert_eq!(orgs[0].domain, None);
    }

    #[tokio::test]
    async fn test_list_workspaces_and_documents() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/orgs/2/workspaces");
                then.status(200)
                    .json_body(json!([{"id": 10, "name": "Home", "docs": []}]));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/workspaces/10");
                then.status(200).json_body(json!({
                    "id": 10,
                    "name": "Home",
                    "docs": [{"id": "fTxSbuAoVqHMQa2bZPg5zF", "name": "Inventory", "isPinned": false}]
                }));
            })
            .await;

        let tools = tools_for(&server);
        let workspaces = tools.list_workspaces(2).await.unwrap();
        assert_eq!(workspaces[0].id, 10);

        let docs = tools.list_documents(10).await.unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].id, "fTxSbuAoVqHMQa2bZPg5zF");
        assert_eq!(docs[0].name, "Inventory");
    }

    #[tokio::test]
    async fn test_list_tables_and_columns() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/docs/doc1/tables");
                then.status(200).json_body(json!({
                    "tables": [{"id": "People", "fields": {"tableRef": 1}}, {"id": "Orders"}]
                }));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/docs/doc1/tables/People/columns");
                then.status(200).json_body(json!({
                    "columns": [{"id": "Name", "fields": {"label": "Name", "type": "Text"}}]
                }));
            })
            .await;

        let tools = tools_for(&server);
        let tables = tools.list_tables("doc1").await.unwrap();
        assert_eq!(
            tables.iter().map(|t| t.id.as_str()).collect::<Vec<_>>(),
            vec!["People", "Orders"]
        );

        let columns = tools.list_columns("doc1", "People").await.unwrap();
        assert_eq!(columns[0].id, "Name");
        assert_eq!(columns[0].fields["type"], json!("Text"));
    }

    #[tokio::test]
    async fn test_list_records_forwards_sort_and_limit() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/docs/doc1/tables/People/records")
                    .query_param("sort", "-Age")
                    .query_param("limit", "2");
                then.status(200).json_body(json!({
                    "records": [
                        {"id": 4, "fields": {"Name": "Ada", "Age": 36}},
                        {"id": 9, "fields": {"Name": "Alan", "Age": 41}}
                    ]
                }));
            })
            .await;

        let records = tools_for(&server)
            .list_records("doc1", "People", Some("-Age"), Some(2))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(records.iter().map(|r| r.id).collect::<Vec<_>>(), vec![4, 9]);
        assert_eq!(records[0].fields["Name"], json!("Ada"));
    }

    #[tokio::test]
    async fn test_unexpected_container_is_empty() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/orgs");
                then.status(200).json_body(json!({"orgs": []}));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/docs/doc1/tables");
                then.status(200).json_body(json!([{"id": "People"}]));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/docs/doc1/tables/People/records");
                then.status(200).body("null");
            })
            .await;

        let tools = tools_for(&server);
        assert!(tools.list_organizations().await.unwrap().is_empty());
        assert!(tools.list_tables("doc1").await.unwrap().is_empty());
        assert!(tools
            .list_records("doc1", "People", None, None)
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_unexpected_container_is_empty_for_navigation() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/orgs/2/workspaces");
                then.status(200).json_body(json!({"workspaces": [{"id": 10}]}));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/workspaces/10");
                then.status(200).json_body(json!({"id": 10, "name": "Home", "docs": null}));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/docs/doc1/tables/People/columns");
                then.status(200).json_body(json!({"cols": []}));
            })
            .await;

        let tools = tools_for(&server);
        assert!(tools.list_workspaces(2).await.unwrap().is_empty());
        assert!(tools.list_documents(10).await.unwrap().is_empty());
        assert!(tools.list_columns("doc1", "People").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_read_errors_propagate() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/docs/missing/tables");
                then.status(404).json_body(json!({"error": "document not found"}));
            })
            .await;

        let err = tools_for(&server).list_tables("missing").await.unwrap_err();
        assert_eq!(err.status(), Some(404));
        assert!(matches!(err, GristError::Api { .. }));
    }
}
