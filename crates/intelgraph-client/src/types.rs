//! Request and response types for the IntelGraph REST API.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Which collection a search runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    /// Indicator records (domains, hashes, ...).
    Fundamental,
    /// Narrative documents: intelligence alerts and reports.
    Document,
}

impl DocumentKind {
    /// Endpoint path relative to the API base URL.
    pub fn endpoint(&self) -> &'static str {
        match self {
            Self::Fundamental => "fundamental/v0",
            Self::Document => "document/v0",
        }
    }
}

/// Field a search matches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryField {
    Key,
    Uuid,
}

impl QueryField {
    /// Query parameter name.
    pub fn param(&self) -> &'static str {
        match self {
            Self::Key => "key.values",
            Self::Uuid => "uuid.values",
        }
    }
}

/// Body of a search response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Number of matches reported by the server.
    pub total_size: u64,
    /// Matched records. Absent when `total_size` is zero.
    #[serde(default)]
    pub results: Vec<Value>,
}

impl SearchResponse {
    /// Build a response holding exactly the given results.
    pub fn from_results(results: Vec<Value>) -> Self {
        Self {
            total_size: results.len() as u64,
            results,
        }
    }

    /// True when the server reported no matches.
    pub fn is_empty(&self) -> bool {
        self.total_size == 0
    }
}
