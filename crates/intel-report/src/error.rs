//! Error types for report generation.

use intelgraph_client::IntelGraphError;
use thiserror::Error;

/// Errors that abort a report run.
///
/// Recoverable conditions (missing alerts, failed asset downloads, identifiers
/// with no match) are logged and never surface here.
#[derive(Debug, Error)]
pub enum ReportError {
    /// A required lookup failed.
    #[error(transparent)]
    Api(#[from] IntelGraphError),

    /// A single-identifier lookup matched more than one record.
    #[error("Lookup for '{identifier}' returned {count} results, expected at most one")]
    AmbiguousResult { identifier: String, count: u64 },

    /// A record lacks a field needed to render it.
    #[error("Record is missing required field '{field}'")]
    MissingField { field: String },

    /// A record does not have the expected shape.
    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    /// The API response contradicts itself.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ReportError {
    pub(crate) fn missing(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }
}
