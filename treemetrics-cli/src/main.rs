//! treemetrics CLI - static complexity metrics from ESTree syntax trees.
//!
//! Reads ESTree JSON documents (the serialized output of esprima-class
//! parsers) and prints per-file and per-function complexity metrics.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use treemetrics::metrics::analyze_path;
use treemetrics::report;

/// Static complexity metrics from ESTree syntax trees.
#[derive(Parser)]
#[command(
    name = "treemetrics",
    version,
    about = "Static complexity metrics from ESTree syntax trees",
    long_about = r#"
Static complexity metrics from ESTree syntax trees.

Examples:
    treemetrics ast/main.json           # One document, text report
    treemetrics ast/ --format json      # Every document under ast/, JSON
    treemetrics ast/ --format json --compact

Input is the JSON an ESTree-compatible parser emits, e.g.:
    esprima-parse --loc main.js > ast/main.json
"#
)]
struct Cli {
    /// ESTree JSON document, or a directory of documents
    path: PathBuf,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Output minified JSON (default: pretty-printed)
    #[arg(long)]
    compact: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let project = analyze_path(&cli.path)?;

    match cli.format {
        OutputFormat::Text => print!("{}", report::render_project_text(&project)),
        OutputFormat::Json => {
            let rendered = if cli.compact {
                serde_json::to_string(&project)?
            } else {
                serde_json::to_string_pretty(&project)?
            };
            println!("{rendered}");
        }
    }

    Ok(())
}
