//! Mock IntelGraph implementations for testing.
//!
//! This crate provides `MockIntelGraph`, an in-memory implementation of the
//! `IntelGraphApi` trait with canned search results, canned assets, injectable
//! failures and a call log.
//!
//! For real requests, use `IntelGraphClient` from the `intelgraph-client` crate.
//!
//! # Example
//!
//! ```rust
//! use mock_intelgraph::{IntelGraphApi, MockIntelGraph};
//! use intelgraph_client::{DocumentKind, QueryField};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), intelgraph_client::IntelGraphError> {
//!     let api = MockIntelGraph::new().with_alert("abc-123", "Campaign X");
//!
//!     let resp = api.search(DocumentKind::Document, QueryField::Uuid, "abc-123").await?;
//!     assert_eq!(resp.results[0]["title"], "Campaign X");
//!     Ok(())
//! }
//! ```

mod mock;

pub use intelgraph_client::{async_trait, IntelGraphApi, IntelGraphError};
pub use mock::{MockCall, MockIntelGraph};
