//! Fetching a batch of records by identifier.

use intelgraph_client::{DocumentKind, IntelGraphApi, QueryField};
use tracing::{info, warn};

use crate::error::ReportError;
use crate::record::Record;

/// What to search and which field the identifiers match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lookup {
    pub kind: DocumentKind,
    pub field: QueryField,
}

impl Lookup {
    pub fn new(kind: DocumentKind, field: QueryField) -> Self {
        Self { kind, field }
    }

    /// Fundamentals by indicator key.
    pub fn fundamental_by_key() -> Self {
        Self::new(DocumentKind::Fundamental, QueryField::Key)
    }

    /// Records of `kind` by UUID.
    pub fn by_uuid(kind: DocumentKind) -> Self {
        Self::new(kind, QueryField::Uuid)
    }
}

/// Fetch one record per identifier, in order.
///
/// Identifiers without a match are logged and skipped. More than one match
/// for an identifier, or any failed request, aborts the whole batch.
pub async fn fetch_all(
    api: &dyn IntelGraphApi,
    identifiers: &[String],
    lookup: Lookup,
) -> Result<Vec<Record>, ReportError> {
    let mut records = Vec::with_capacity(identifiers.len());

    for identifier in identifiers {
        let resp = api.search(lookup.kind, lookup.field, identifier).await?;

        match resp.total_size {
            0 => warn!("No results found for {}", identifier),
            1 => {
                let value = resp.results.into_iter().next().ok_or_else(|| {
                    ReportError::MalformedResponse(format!(
                        "'{}' reported one match but returned none",
                        identifier
                    ))
                })?;
                records.push(Record::from_value(value)?);
            }
            count => {
                return Err(ReportError::AmbiguousResult {
                    identifier: identifier.clone(),
                    count,
                })
            }
        }
    }

    info!(
        "Fetched {} of {} requested records",
        records.len(),
        identifiers.len()
    );
    Ok(records)
}

/// Identifiers from newline-delimited text. Blank lines are ignored.
pub fn parse_identifiers(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
