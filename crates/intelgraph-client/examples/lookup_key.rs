//! Look up a single fundamental and print the raw response.
//!
//! Run with: cargo run --example lookup_key -- <key>
//!
//! Requires IDEF_TOKEN (a `.env` file is honoured).
//!
//! Examples:
//!   cargo run --example lookup_key -- evil.example.com
//!   IDEF_API_URL=http://localhost:8080/rest/ cargo run --example lookup_key -- 203.0.113.7

use intelgraph_client::{DocumentKind, IntelGraphApi, IntelGraphClient, IntelGraphConfig, QueryField};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let key = env::args()
        .nth(1)
        .ok_or("usage: lookup_key <key>")?;

    let config = IntelGraphConfig::from_env()?;
    println!("Querying {}...", config.api_url);
    let client = IntelGraphClient::new(config)?;

    let resp = client
        .search(DocumentKind::Fundamental, QueryField::Key, &key)
        .await?;
    println!("Matches: {}", resp.total_size);

    for result in &resp.results {
        println!("{}", serde_json::to_string_pretty(result)?);
    }

    Ok(())
}
