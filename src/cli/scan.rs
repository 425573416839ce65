use std::path::Path;

use crate::config::ScanConfig;
use crate::error::Result;
use crate::har::Har;
use crate::patterns::build_effective_patterns;
use crate::report;
use crate::scan::scan_entries;

/// Scan a HAR file and print the findings.
pub fn run(
    har_file: &Path,
    config_path: Option<&Path>,
    include_possible_pii: bool,
    custom_fields: &[String],
    json: bool,
) -> Result<()> {
    let config = match config_path {
        Some(path) => ScanConfig::load_from(path)?,
        None => ScanConfig::default(),
    }
    .merge_cli(include_possible_pii, custom_fields);

    let (patterns, pattern_diagnostics) =
        build_effective_patterns(config.include_possible_pii, &config.custom_fields);
    for diagnostic in &pattern_diagnostics {
        tracing::warn!("{diagnostic}");
    }
    tracing::debug!("effective pattern set has {} categories", patterns.len());

    let har = Har::load(har_file)?;
    let outcome = scan_entries(&har.log.entries, &patterns, config.context_window);
    for diagnostic in &outcome.diagnostics {
        tracing::warn!("{diagnostic}");
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if json {
        report::print_json(&mut out, &outcome.records)?;
    } else {
        report::print_findings(&mut out, &outcome.records)?;
    }

    let warnings = pattern_diagnostics.len() + outcome.diagnostics.len();
    eprintln!(
        "harscan: scanned {} entries -- {} finding(s), {} warning(s).",
        outcome.entries_scanned,
        outcome.records.len(),
        warnings
    );
    if let Some(start) = outcome.capture_start {
        eprintln!("harscan: capture started {}", start.to_rfc3339());
    }

    Ok(())
}
