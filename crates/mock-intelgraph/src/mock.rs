//! In-memory IntelGraph with canned replies.

use std::collections::HashMap;
use std::sync::Mutex;

use intelgraph_client::{
    async_trait, DocumentKind, IntelGraphApi, IntelGraphError, QueryField, SearchResponse,
};
use serde_json::{json, Value};

/// A request observed by the mock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockCall {
    Search {
        kind: DocumentKind,
        field: QueryField,
        value: String,
    },
    Asset {
        path: String,
    },
}

#[derive(Debug, Clone)]
enum Reply<T> {
    Ok(T),
    Status(u16),
}

impl<T: Clone> Reply<T> {
    fn to_result(&self) -> Result<T, IntelGraphError> {
        match self {
            Reply::Ok(v) => Ok(v.clone()),
            Reply::Status(status) => Err(IntelGraphError::Status {
                status: *status,
                body: String::new(),
            }),
        }
    }
}

type SearchKey = (DocumentKind, QueryField, String);

/// An IntelGraph that answers from memory.
///
/// Unknown searches answer with zero results; unknown assets answer 404.
#[derive(Debug, Default)]
pub struct MockIntelGraph {
    searches: HashMap<SearchKey, Reply<SearchResponse>>,
    assets: HashMap<String, Reply<Vec<u8>>>,
    calls: Mutex<Vec<MockCall>>,
}

impl MockIntelGraph {
    /// Create a mock with no canned data.
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer a search with the given results.
    pub fn with_results(
        mut self,
        kind: DocumentKind,
        field: QueryField,
        value: impl Into<String>,
        results: Vec<Value>,
    ) -> Self {
        self.searches.insert(
            (kind, field, value.into()),
            Reply::Ok(SearchResponse::from_results(results)),
        );
        self
    }

    /// Answer a search with a raw response body.
    pub fn with_response(
        mut self,
        kind: DocumentKind,
        field: QueryField,
        value: impl Into<String>,
        response: SearchResponse,
    ) -> Self {
        self.searches
            .insert((kind, field, value.into()), Reply::Ok(response));
        self
    }

    /// Answer a search with a non-success status.
    pub fn with_search_status(
        mut self,
        kind: DocumentKind,
        field: QueryField,
        value: impl Into<String>,
        status: u16,
    ) -> Self {
        self.searches
            .insert((kind, field, value.into()), Reply::Status(status));
        self
    }

    /// Register a fundamental found by its `key` field.
    pub fn with_fundamental(self, record: Value) -> Self {
        let key = record["key"].as_str().unwrap_or_default().to_string();
        self.with_results(DocumentKind::Fundamental, QueryField::Key, key, vec![record])
    }

    /// Register an intelligence alert found by UUID.
    pub fn with_alert(self, uuid: impl Into<String>, title: impl Into<String>) -> Self {
        let uuid = uuid.into();
        let alert = json!({
            "uuid": uuid,
            "type": "intelligence_alert",
            "title": title.into(),
        });
        self.with_results(DocumentKind::Document, QueryField::Uuid, uuid, vec![alert])
    }

    /// Serve an asset's bytes.
    pub fn with_asset(mut self, path: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        self.assets.insert(path.into(), Reply::Ok(bytes.into()));
        self
    }

    /// Answer an asset request with a non-success status.
    pub fn with_asset_status(mut self, path: impl Into<String>, status: u16) -> Self {
        self.assets.insert(path.into(), Reply::Status(status));
        self
    }

    /// All requests seen so far, in order.
    pub fn calls(&self) -> Vec<MockCall> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    /// Number of search requests seen.
    pub fn search_count(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, MockCall::Search { .. }))
            .count()
    }

    /// Number of asset requests seen.
    pub fn asset_count(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, MockCall::Asset { .. }))
            .count()
    }

    fn record(&self, call: MockCall) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
    }
}

#[async_trait]
impl IntelGraphApi for MockIntelGraph {
    async fn search(
        &self,
        kind: DocumentKind,
        field: QueryField,
        value: &str,
    ) -> Result<SearchResponse, IntelGraphError> {
        self.record(MockCall::Search {
            kind,
            field,
            value: value.to_string(),
        });

        match self.searches.get(&(kind, field, value.to_string())) {
            Some(reply) => reply.to_result(),
            None => Ok(SearchResponse::default()),
        }
    }

    async fn fetch_asset(&self, path: &str) -> Result<Vec<u8>, IntelGraphError> {
        self.record(MockCall::Asset {
            path: path.to_string(),
        });

        match self.assets.get(path) {
            Some(reply) => reply.to_result(),
            None => Reply::Status(404).to_result(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unknown_search_is_empty() {
        let api = MockIntelGraph::new();
        let resp = api
            .search(DocumentKind::Fundamental, QueryField::Key, "nothing")
            .await
            .unwrap();

        assert!(resp.is_empty());
        assert_eq!(api.search_count(), 1);
    }

    #[tokio::test]
    async fn test_fundamental_lookup_by_key() {
        let api = MockIntelGraph::new().with_fundamental(json!({"key": "a.example", "severity": 2}));
        let resp = api
            .search(DocumentKind::Fundamental, QueryField::Key, "a.example")
            .await
            .unwrap();

        assert_eq!(resp.total_size, 1);
        assert_eq!(resp.results[0]["severity"], 2);
    }

    #[tokio::test]
    async fn test_search_status_error() {
        let api = MockIntelGraph::new().with_search_status(
            DocumentKind::Document,
            QueryField::Uuid,
            "u",
            500,
        );
        let err = api
            .search(DocumentKind::Document, QueryField::Uuid, "u")
            .await
            .unwrap_err();

        assert!(matches!(err, IntelGraphError::Status { status: 500, .. }));
    }

    #[tokio::test]
    async fn test_assets_and_call_log() {
        let api = MockIntelGraph::new()
            .with_asset("/rest/a.png", vec![1, 2, 3])
            .with_asset_status("/rest/b.png", 500);

        assert_eq!(api.fetch_asset("/rest/a.png").await.unwrap(), vec![1, 2, 3]);
        assert!(api.fetch_asset("/rest/b.png").await.is_err());
        assert!(matches!(
            api.fetch_asset("/rest/c.png").await,
            Err(IntelGraphError::Status { status: 404, .. })
        ));

        assert_eq!(api.asset_count(), 3);
        assert_eq!(
            api.calls()[0],
            MockCall::Asset {
                path: "/rest/a.png".to_string()
            }
        );
    }
}
