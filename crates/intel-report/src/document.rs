//! Assembly of rendered records into one output document.

use pulldown_cmark::{html, Parser};

use crate::error::ReportError;
use crate::record::Record;
use crate::render::RecordRenderer;

/// Output document format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// The raw records as a pretty-printed JSON array.
    #[default]
    Json,
    Markdown,
    Html,
}

/// Render `records` in input order as a single document.
///
/// JSON skips rendering and makes no follow-up requests.
pub async fn render_document(
    renderer: &RecordRenderer<'_>,
    records: &[Record],
    format: OutputFormat,
) -> Result<String, ReportError> {
    match format {
        OutputFormat::Json => records_to_json(records),
        OutputFormat::Markdown => render_markdown(renderer, records).await,
        OutputFormat::Html => Ok(markdown_to_html(&render_markdown(renderer, records).await?)),
    }
}

/// Concatenated Markdown sections, one per record.
pub async fn render_markdown(
    renderer: &RecordRenderer<'_>,
    records: &[Record],
) -> Result<String, ReportError> {
    let mut md = String::new();
    for record in records {
        md.push_str(&renderer.render_record(record).await?);
    }
    Ok(md)
}

/// CommonMark to HTML, no extensions.
pub fn markdown_to_html(markdown: &str) -> String {
    let parser = Parser::new(markdown);
    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

/// Records as a JSON array with sorted keys and two-space indentation.
pub fn records_to_json(records: &[Record]) -> Result<String, ReportError> {
    Ok(serde_json::to_string_pretty(records)?)
}
