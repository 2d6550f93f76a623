//! Report rendering for IntelGraph records.
//!
//! Turns fundamentals and documents fetched from IntelGraph into readable
//! documents:
//!
//! - Alert links are resolved to alert titles with follow-up lookups
//! - Server-hosted images in analysis text are embedded as `data:` URIs
//! - Records are rendered as Markdown sections and joined into one document,
//!   optionally converted to HTML, or passed through as JSON
//!
//! # Example
//!
//! ```no_run
//! use intel_report::{fetch_all, render_document, Lookup, OutputFormat, RecordRenderer};
//! use intelgraph_client::{IntelGraphClient, IntelGraphConfig};
//!
//! # async fn example() -> Result<(), intel_report::ReportError> {
//! let config = IntelGraphConfig::from_env()?;
//! let viewer_url = config.viewer_url.clone();
//! let client = IntelGraphClient::new(config)?;
//!
//! let ids = vec!["evil.example.com".to_string()];
//! let records = fetch_all(&client, &ids, Lookup::fundamental_by_key()).await?;
//!
//! let renderer = RecordRenderer::new(&client, viewer_url);
//! let doc = render_document(&renderer, &records, OutputFormat::Markdown).await?;
//! println!("{}", doc);
//! # Ok(())
//! # }
//! ```

pub mod batch;
pub mod document;
pub mod error;
pub mod inline;
pub mod record;
pub mod render;
pub mod resolver;

pub use batch::{fetch_all, parse_identifiers, Lookup};
pub use document::{markdown_to_html, records_to_json, render_document, OutputFormat};
pub use error::ReportError;
pub use inline::{find_assets, inline_assets, rewrite_assets, AssetRef};
pub use record::{Record, Reference, INTELLIGENCE_ALERT};
pub use render::{RecordRenderer, RECORD_DELIMITER};
pub use resolver::{resolve_alert_title, MISSING_ALERT_TITLE};
