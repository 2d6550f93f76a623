//! Resolution of intelligence alert links to their titles.

use intelgraph_client::{DocumentKind, IntelGraphApi, QueryField};
use tracing::{debug, warn};

use crate::error::ReportError;
use crate::record::display_value;

/// Title used when a linked alert no longer exists or is not visible.
pub const MISSING_ALERT_TITLE: &str = "Missing Intelligence Alert";

/// Look up an intelligence alert by UUID and return its title.
///
/// Zero matches yield [`MISSING_ALERT_TITLE`]. Failed requests and
/// ambiguous matches abort the run.
pub async fn resolve_alert_title(
    api: &dyn IntelGraphApi,
    uuid: &str,
) -> Result<String, ReportError> {
    let resp = api
        .search(DocumentKind::Document, QueryField::Uuid, uuid)
        .await?;

    match resp.total_size {
        0 => {
            warn!("Intelligence alert {} not found", uuid);
            Ok(MISSING_ALERT_TITLE.to_string())
        }
        1 => {
            let alert = resp.results.first().ok_or_else(|| {
                ReportError::MalformedResponse(format!(
                    "alert {} reported one match but returned none",
                    uuid
                ))
            })?;
            let title = alert
                .get("title")
                .map(display_value)
                .ok_or_else(|| ReportError::missing("title"))?;
            debug!("Resolved alert {} to '{}'", uuid, title);
            Ok(title)
        }
        count => Err(ReportError::AmbiguousResult {
            identifier: uuid.to_string(),
            count,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use intelgraph_client::{IntelGraphError, SearchResponse};
    use mock_intelgraph::{MockCall, MockIntelGraph};
    use serde_json::json;

    #[tokio::test]
    async fn test_single_match_returns_title() {
        let api = MockIntelGraph::new().with_alert("abc-123", "Ransomware Campaign Update");

        let title = resolve_alert_title(&api, "abc-123").await.unwrap();

        assert_eq!(title, "Ransomware Campaign Update");
        assert_eq!(
            api.calls(),
            vec![MockCall::Search {
                kind: DocumentKind::Document,
                field: QueryField::Uuid,
                value: "abc-123".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn test_zero_matches_returns_placeholder() {
        let api = MockIntelGraph::new();

        let title = resolve_alert_title(&api, "abc-123").await.unwrap();

        assert_eq!(title, "Missing Intelligence Alert");
    }

    #[tokio::test]
    async fn test_status_failure_aborts() {
        let api = MockIntelGraph::new().with_search_status(
            DocumentKind::Document,
            QueryField::Uuid,
            "abc-123",
            502,
        );

        let err = resolve_alert_title(&api, "abc-123").await.unwrap_err();

        assert!(matches!(
            err,
            ReportError::Api(IntelGraphError::Status { status: 502, .. })
        ));
    }

    #[tokio::test]
    async fn test_ambiguous_match_aborts() {
        let api = MockIntelGraph::new().with_results(
            DocumentKind::Document,
            QueryField::Uuid,
            "dup",
            vec![json!({"title": "a"}), json!({"title": "b"})],
        );

        let err = resolve_alert_title(&api, "dup").await.unwrap_err();

        assert!(matches!(err, ReportError::AmbiguousResult { count: 2, .. }));
    }

    #[tokio::test]
    async fn test_untitled_alert_is_missing_field() {
        let api = MockIntelGraph::new().with_results(
            DocumentKind::Document,
            QueryField::Uuid,
            "u",
            vec![json!({"uuid": "u"})],
        );

        let err = resolve_alert_title(&api, "u").await.unwrap_err();

        assert!(matches!(err, ReportError::MissingField { field } if field == "title"));
    }

    #[tokio::test]
    async fn test_count_without_results_is_malformed() {
        let api = MockIntelGraph::new().with_response(
            DocumentKind::Document,
            QueryField::Uuid,
            "u",
            SearchResponse {
                total_size: 1,
                results: vec![],
            },
        );

        let err = resolve_alert_title(&api, "u").await.unwrap_err();

        assert!(matches!(err, ReportError::MalformedResponse(_)));
    }
}
