//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use intel_report::{Lookup, OutputFormat};
use intelgraph_client::DocumentKind;

#[derive(Debug, Parser)]
#[command(name = "ig-query")]
#[command(about = "Query iDefense IntelGraph for information on keys or UUIDs")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Look up fundamentals by indicator key
    Key(InputArgs),

    /// Look up reports or fundamentals by UUID
    Uuid {
        #[command(flatten)]
        input: InputArgs,

        /// Kind of record the UUIDs refer to
        #[arg(long = "type", value_enum, default_value_t = RecordType::Report)]
        record_type: RecordType,
    },
}

#[derive(Debug, Args)]
pub struct InputArgs {
    /// A single key or UUID
    pub identifier: Option<String>,

    /// File with one key or UUID per line
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = FormatArg::Json)]
    pub format: FormatArg,

    /// Print additional debug output
    #[arg(long)]
    pub debug: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Json,
    Markdown,
    Html,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Markdown => OutputFormat::Markdown,
            FormatArg::Html => OutputFormat::Html,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RecordType {
    Report,
    Fundamental,
}

impl Cli {
    pub fn input(&self) -> &InputArgs {
        match &self.command {
            Command::Key(input) => input,
            Command::Uuid { input, .. } => input,
        }
    }

    pub fn lookup(&self) -> Lookup {
        match &self.command {
            Command::Key(_) => Lookup::fundamental_by_key(),
            Command::Uuid { record_type, .. } => Lookup::by_uuid(match record_type {
                RecordType::Report => DocumentKind::Document,
                RecordType::Fundamental => DocumentKind::Fundamental,
            }),
        }
    }
}
