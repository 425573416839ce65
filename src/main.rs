use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Analyze a HAR capture for PII exposure",
    arg_required_else_help = true
)]
struct Cli {
    /// Path to the HAR file
    har_file: PathBuf,

    /// Include looser "possible PII" patterns (GUIDs) in the analysis
    #[arg(long)]
    include_possible_pii: bool,

    /// Custom field to search for, as name:regex (repeatable)
    #[arg(long = "custom-field", value_name = "NAME:REGEX")]
    custom_fields: Vec<String>,

    /// Optional YAML scan config file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Emit findings as JSON instead of a table
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    harscan::cli::scan::run(
        &cli.har_file,
        cli.config.as_deref(),
        cli.include_possible_pii,
        &cli.custom_fields,
        cli.json,
    )?;
    Ok(())
}
