//! ig-query: look up IntelGraph records and print them as JSON, Markdown or HTML.

mod cli;

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use intel_report::{fetch_all, parse_identifiers, render_document, RecordRenderer, ReportError};
use intelgraph_client::{IntelGraphClient, IntelGraphConfig, IntelGraphError};
use thiserror::Error;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, InputArgs};

#[derive(Debug, Error)]
enum CliError {
    #[error("Please specify a key or file")]
    NoInput,

    #[error("Could not read {}: {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Api(#[from] IntelGraphError),

    #[error(transparent)]
    Report(#[from] ReportError),
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.input().debug);

    match run(&cli).await {
        Ok(document) => {
            println!("{}", document);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr; stdout carries only the document.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: &Cli) -> Result<String, CliError> {
    let config = IntelGraphConfig::from_env()?;
    let identifiers = read_identifiers(cli.input())?;
    let lookup = cli.lookup();
    debug!(
        "Querying {} identifier(s) via {}",
        identifiers.len(),
        lookup.kind.endpoint()
    );

    let viewer_url = config.viewer_url.clone();
    let client = IntelGraphClient::new(config)?;

    let records = fetch_all(&client, &identifiers, lookup).await?;
    let renderer = RecordRenderer::new(&client, viewer_url);
    let document = render_document(&renderer, &records, cli.input().format.into()).await?;

    Ok(document)
}

fn read_identifiers(input: &InputArgs) -> Result<Vec<String>, CliError> {
    let mut identifiers = Vec::new();

    if let Some(identifier) = input.identifier.as_deref().map(str::trim) {
        if !identifier.is_empty() {
            identifiers.push(identifier.to_string());
        }
    }

    if let Some(path) = &input.file {
        let text = fs::read_to_string(path).map_err(|source| CliError::ReadFile {
            path: path.clone(),
            source,
        })?;
        identifiers.extend(parse_identifiers(&text));
    }

    if identifiers.is_empty() {
        return Err(CliError::NoInput);
    }
    Ok(identifiers)
}
