//! Markdown rendering of a single record.

use intelgraph_client::IntelGraphApi;
use serde_json::Value;

use crate::error::ReportError;
use crate::inline::inline_assets;
use crate::record::{display_value, Record, Reference};
use crate::resolver::resolve_alert_title;

/// Separator written after every record.
pub const RECORD_DELIMITER: &str = "\n---\n\n";

/// Renders records, resolving alert links and inlining assets through `api`.
pub struct RecordRenderer<'a> {
    api: &'a dyn IntelGraphApi,
    viewer_url: String,
}

impl<'a> RecordRenderer<'a> {
    /// Create a renderer. Alert links point at `viewer_url` followed by the alert UUID.
    pub fn new(api: &'a dyn IntelGraphApi, viewer_url: impl Into<String>) -> Self {
        Self {
            api,
            viewer_url: viewer_url.into(),
        }
    }

    /// Render one record as a Markdown section ending in [`RECORD_DELIMITER`].
    ///
    /// Sections always appear in the same order: heading, abstract,
    /// properties, relationships, analysis, mitigation.
    pub async fn render_record(&self, record: &Record) -> Result<String, ReportError> {
        let mut md = String::new();

        md.push_str(&format!("# {}\n\n", record.heading()?));

        if let Some(text) = record.text("abstract") {
            md.push_str(&format!("## Abstract\n\n{}\n\n", text));
        }

        md.push_str(&render_properties(record)?);

        let links = record.links()?;
        if !links.is_empty() {
            md.push_str("\n## Relationships\n");
            for link in &links {
                md.push_str(&self.render_link(link).await?);
            }
        }

        if let Some(text) = record.text("analysis") {
            let text = inline_assets(self.api, &text).await;
            md.push_str(&format!("\n## Analysis\n\n{}\n", text));
        }

        if let Some(text) = record.text("mitigation") {
            md.push_str(&format!("\n## Mitigation\n\n{}\n", text));
        }

        md.push_str(RECORD_DELIMITER);
        Ok(md)
    }

    async fn render_link(&self, link: &Reference) -> Result<String, ReportError> {
        if link.is_intelligence_alert() {
            let uuid = link
                .uuid
                .as_deref()
                .filter(|u| !u.is_empty())
                .ok_or_else(|| ReportError::missing("links.uuid"))?;
            let title = resolve_alert_title(self.api, uuid).await?;
            Ok(format!(
                "- Intelligence Alert: [{}]({}{})\n",
                title, self.viewer_url, uuid
            ))
        } else {
            Ok(format!(
                "- {} ({}): {}\n",
                link.key.as_deref().unwrap_or_default(),
                link.kind,
                link.relationship.as_deref().unwrap_or_default()
            ))
        }
    }
}

fn render_properties(record: &Record) -> Result<String, ReportError> {
    let mut md = String::from("## Properties\n");

    md.push_str(&format!("- Created on: {}\n", record.required_text("created_on")?));
    md.push_str(&format!(
        "- Modified on: {}\n",
        record.required_text("last_modified")?
    ));

    if let Some(severity) = record.get("severity") {
        md.push_str(&format!("- Severity: {}\n", severity_text(severity)));
    }
    if let Some(items) = record.list("threat_types") {
        md.push_str("- Threat Types:\n");
        push_sub_list(&mut md, &items);
    }
    if let Some(items) = record.list("last_seen_as") {
        md.push_str("- Last seen as:\n");
        push_sub_list(&mut md, &items);
    }
    if let Some(comment) = record.text("meta_data") {
        md.push_str(&format!("- Comment: {}\n", comment));
    }

    Ok(md)
}

/// Severity is an integer score; `7.0` prints as `7`. Non-numbers print as-is.
fn severity_text(value: &Value) -> String {
    value
        .as_i64()
        .or_else(|| value.as_f64().map(|f| f.trunc() as i64))
        .map(|n| n.to_string())
        .unwrap_or_else(|| display_value(value))
}

fn push_sub_list(md: &mut String, items: &[String]) {
    for item in items {
        md.push_str(&format!("    - {}\n", item));
    }
}
