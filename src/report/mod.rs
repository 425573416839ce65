use std::io::Write;

use crate::error::Result;
use crate::scan::MatchRecord;

const HEADERS: [&str; 6] = [
    "Entry",
    "Location",
    "Line Number",
    "Context",
    "PII Type",
    "Match",
];

/// Print the findings table, or the no-findings message when the scan came
/// back empty.
pub fn print_findings<W: Write>(out: &mut W, records: &[MatchRecord]) -> Result<()> {
    if records.is_empty() {
        writeln!(out, "No PII found in the HAR file.")?;
        return Ok(());
    }

    let rows: Vec<[String; 6]> = records.iter().map(row).collect();

    let mut widths: [usize; 6] = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    writeln!(out, "PII Findings:")?;
    write_row(out, &HEADERS.map(String::from), &widths)?;
    for row in &rows {
        write_row(out, row, &widths)?;
    }
    Ok(())
}

/// Print the findings as a JSON array.
pub fn print_json<W: Write>(out: &mut W, records: &[MatchRecord]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, records)?;
    writeln!(out)?;
    Ok(())
}

fn row(record: &MatchRecord) -> [String; 6] {
    [
        record.entry.to_string(),
        record.location.to_string(),
        record.line_number.to_string(),
        record.context.clone(),
        record.pii_type.clone(),
        record.matched.clone(),
    ]
}

fn write_row<W: Write>(out: &mut W, cells: &[String; 6], widths: &[usize; 6]) -> Result<()> {
    let mut line = String::new();
    for (cell, width) in cells.iter().zip(widths.iter()) {
        line.push_str(cell);
        let pad = width.saturating_sub(cell.chars().count());
        line.extend(std::iter::repeat(' ').take(pad + 2));
    }
    writeln!(out, "{}", line.trim_end())?;
    Ok(())
}
