//! iDefense IntelGraph client library.
//!
//! This crate provides a Rust client for the IntelGraph REST API. It supports:
//!
//! - Searching fundamentals and documents by key or UUID
//! - Downloading server-relative assets (images embedded in documents)
//!
//! # Example
//!
//! ```no_run
//! use intelgraph_client::{DocumentKind, IntelGraphApi, IntelGraphClient, IntelGraphConfig, QueryField};
//!
//! # async fn example() -> Result<(), intelgraph_client::IntelGraphError> {
//! let config = IntelGraphConfig::from_env()?;
//! let client = IntelGraphClient::new(config)?;
//!
//! let resp = client
//!     .search(DocumentKind::Fundamental, QueryField::Key, "evil.example.com")
//!     .await?;
//! println!("{} matches", resp.total_size);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod types;

pub use api::IntelGraphApi;
pub use async_trait::async_trait;
pub use client::IntelGraphClient;
pub use config::{IntelGraphConfig, IntelGraphConfigBuilder, DEFAULT_API_URL, DEFAULT_VIEWER_URL};
pub use error::IntelGraphError;
pub use types::{DocumentKind, QueryField, SearchResponse};

/// Crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
