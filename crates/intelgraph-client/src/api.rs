//! The fetch capability consumed by renderers.

use async_trait::async_trait;

use crate::error::IntelGraphError;
use crate::types::{DocumentKind, QueryField, SearchResponse};

/// Read access to IntelGraph.
///
/// Implementations can range from the HTTP client to in-memory mocks.
/// This trait is object-safe and can be used with `&dyn IntelGraphApi`.
#[async_trait]
pub trait IntelGraphApi: Send + Sync {
    /// Search `kind` for records whose `field` equals `value`.
    ///
    /// Non-success statuses are errors; an empty match set is not.
    async fn search(
        &self,
        kind: DocumentKind,
        field: QueryField,
        value: &str,
    ) -> Result<SearchResponse, IntelGraphError>;

    /// Fetch the raw bytes of a server-relative asset such as `/rest/files/a.png`.
    async fn fetch_asset(&self, path: &str) -> Result<Vec<u8>, IntelGraphError>;
}
