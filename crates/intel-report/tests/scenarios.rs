//! End-to-end report generation against an in-memory IntelGraph.

use intel_report::{
    fetch_all, render_document, Lookup, OutputFormat, RecordRenderer, ReportError,
    RECORD_DELIMITER,
};
use intelgraph_client::{DocumentKind, QueryField};
use mock_intelgraph::{MockCall, MockIntelGraph};
use serde_json::json;

const VIEWER: &str = "https://intelgraph.idefense.com/#/node/intelligence_alert/view/";

fn ids(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn graph() -> MockIntelGraph {
    MockIntelGraph::new()
        .with_fundamental(json!({
            "key": "evil.example.com",
            "created_on": "2020-01-01",
            "last_modified": "2020-02-01",
            "severity": 7
        }))
        .with_fundamental(json!({
            "key": "203.0.113.7",
            "created_on": "2020-03-01",
            "last_modified": "2020-03-02",
            "threat_types": ["Cyber Crime"],
            "last_seen_as": ["MALWARE_C2"],
            "links": [
                {"type": "intelligence_alert", "uuid": "abc-123", "key": "x", "relationship": "y"},
                {"type": "intelligence_alert", "uuid": "def-456", "key": "x", "relationship": "y"},
                {"type": "domain", "key": "evil.example.com", "relationship": "resolves"}
            ]
        }))
        .with_alert("def-456", "Botnet Infrastructure Update")
}

#[tokio::test]
async fn test_markdown_batch() {
    let api = graph();
    let records = fetch_all(
        &api,
        &ids(&["evil.example.com", "unknown.example", "203.0.113.7"]),
        Lookup::fundamental_by_key(),
    )
    .await
    .unwrap();
    assert_eq!(records.len(), 2);

    let renderer = RecordRenderer::new(&api, VIEWER);
    let md = render_document(&renderer, &records, OutputFormat::Markdown)
        .await
        .unwrap();

    let lines: Vec<&str> = md.lines().collect();
    for expected in [
        "# evil.example.com",
        "- Created on: 2020-01-01",
        "- Modified on: 2020-02-01",
        "- Severity: 7",
        "# 203.0.113.7",
        "- Threat Types:",
        "    - Cyber Crime",
        "- Last seen as:",
        "    - MALWARE_C2",
        "- Intelligence Alert: [Missing Intelligence Alert](https://intelgraph.idefense.com/#/node/intelligence_alert/view/abc-123)",
        "- Intelligence Alert: [Botnet Infrastructure Update](https://intelgraph.idefense.com/#/node/intelligence_alert/view/def-456)",
        "- evil.example.com (domain): resolves",
    ] {
        assert!(lines.contains(&expected), "missing line '{}' in:\n{}", expected, md);
    }

    let first_section = md.split(RECORD_DELIMITER).next().unwrap();
    assert!(!first_section.contains("Threat Types"));
    assert!(!first_section.contains("Relationships"));
    assert_eq!(md.matches(RECORD_DELIMITER).count(), 2);

    // Three fundamentals, then one lookup per alert link, in order.
    let alert_lookups: Vec<String> = api
        .calls()
        .into_iter()
        .filter_map(|call| match call {
            MockCall::Search {
                kind: DocumentKind::Document,
                value,
                ..
            } => Some(value),
            _ => None,
        })
        .collect();
    assert_eq!(alert_lookups, vec!["abc-123", "def-456"]);
    assert_eq!(api.search_count(), 5);
}

#[tokio::test]
async fn test_html_batch() {
    let api = graph();
    let records = fetch_all(&api, &ids(&["evil.example.com"]), Lookup::fundamental_by_key())
        .await
        .unwrap();

    let renderer = RecordRenderer::new(&api, VIEWER);
    let html = render_document(&renderer, &records, OutputFormat::Html)
        .await
        .unwrap();

    assert!(html.starts_with("<h1>evil.example.com</h1>"));
    assert!(html.contains("<li>Severity: 7</li>"));
    assert_eq!(html.matches("<hr />").count(), 1);
}

#[tokio::test]
async fn test_json_batch_passthrough() {
    let api = graph();
    let records = fetch_all(
        &api,
        &ids(&["203.0.113.7", "evil.example.com"]),
        Lookup::fundamental_by_key(),
    )
    .await
    .unwrap();

    let renderer = RecordRenderer::new(&api, VIEWER);
    let out = render_document(&renderer, &records, OutputFormat::Json)
        .await
        .unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(parsed[0]["key"], "203.0.113.7");
    assert_eq!(parsed[1]["severity"], 7);
    // Only the two fundamentals were looked up; links were not resolved.
    assert_eq!(api.search_count(), 2);
}

#[tokio::test]
async fn test_ambiguous_identifier_aborts_batch() {
    let api = graph().with_results(
        DocumentKind::Fundamental,
        QueryField::Key,
        "shared.example",
        vec![json!({"key": "shared.example"}), json!({"key": "shared.example"})],
    );

    let result = fetch_all(
        &api,
        &ids(&["evil.example.com", "shared.example"]),
        Lookup::fundamental_by_key(),
    )
    .await;

    assert!(matches!(result, Err(ReportError::AmbiguousResult { .. })));
}
