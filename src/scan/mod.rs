pub mod context;
pub mod matcher;

use base64::{engine::general_purpose::STANDARD as BASE64_STANDARD, Engine};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::ScanDiagnostic;
use crate::har::{self, Entry, Header, Response};
use crate::patterns::PatternSet;

use matcher::find_matches;

/// The four text surfaces analyzed per entry, in analysis order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Surface {
    #[serde(rename = "URL")]
    Url,
    #[serde(rename = "Request Headers")]
    RequestHeaders,
    #[serde(rename = "Request Body")]
    RequestBody,
    #[serde(rename = "Response Body")]
    ResponseBody,
}

impl std::fmt::Display for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Surface::Url => write!(f, "URL"),
            Surface::RequestHeaders => write!(f, "Request Headers"),
            Surface::RequestBody => write!(f, "Request Body"),
            Surface::ResponseBody => write!(f, "Response Body"),
        }
    }
}

/// One reported occurrence of a pattern match. The unit of output.
#[derive(Debug, Clone, Serialize)]
pub struct MatchRecord {
    pub entry: usize,
    pub location: Surface,
    pub line_number: usize,
    pub context: String,
    pub pii_type: String,
    pub matched: String,
}

/// Everything one scan produced: findings in deterministic order plus the
/// soft diagnostics collected along the way.
#[derive(Debug)]
pub struct ScanOutcome {
    pub records: Vec<MatchRecord>,
    pub diagnostics: Vec<ScanDiagnostic>,
    pub entries_scanned: usize,
    pub capture_start: Option<DateTime<Utc>>,
}

/// Scan every entry of a HAR log with the effective pattern set.
///
/// Entries are numbered from 1 by position. Each raw entry is decoded
/// individually; a malformed entry is skipped with a diagnostic while its
/// siblings are still analyzed. Results preserve entry order, then surface
/// order, then match order.
pub fn scan_entries(
    raw_entries: &[serde_json::Value],
    patterns: &PatternSet,
    window: usize,
) -> ScanOutcome {
    let mut records = Vec::new();
    let mut diagnostics = Vec::new();
    let mut capture_start = None;

    for (pos, raw) in raw_entries.iter().enumerate() {
        let index = pos + 1;
        match har::decode_entry(index, raw) {
            Ok(entry) => {
                if capture_start.is_none() {
                    capture_start = entry.started_date_time;
                }
                records.extend(analyze_entry(index, &entry, patterns, window, &mut diagnostics));
            }
            Err(diagnostic) => diagnostics.push(diagnostic),
        }
    }

    ScanOutcome {
        records,
        diagnostics,
        entries_scanned: raw_entries.len(),
        capture_start,
    }
}

/// Analyze one entry: derive its four text surfaces, run the line matcher
/// over each, and tag every match with the entry index and surface.
pub fn analyze_entry(
    index: usize,
    entry: &Entry,
    patterns: &PatternSet,
    window: usize,
    diagnostics: &mut Vec<ScanDiagnostic>,
) -> Vec<MatchRecord> {
    let url = percent_decode(&entry.request.url);
    let request_headers = headers_text(&entry.request.headers);
    let request_body = entry
        .request
        .post_data
        .as_ref()
        .and_then(|p| p.text.clone())
        .unwrap_or_default();
    let response_body = response_body_text(index, &entry.response, diagnostics);

    let surfaces = [
        (Surface::Url, url),
        (Surface::RequestHeaders, request_headers),
        (Surface::RequestBody, request_body),
        (Surface::ResponseBody, response_body),
    ];

    let mut records = Vec::new();
    for (surface, text) in surfaces {
        for m in find_matches(&text, patterns, window) {
            records.push(MatchRecord {
                entry: index,
                location: surface,
                line_number: m.line_number,
                context: m.context,
                pii_type: m.pii_type,
                matched: m.matched,
            });
        }
    }
    records
}

/// Join headers as `name: value` lines, one per header, in capture order.
fn headers_text(headers: &[Header]) -> String {
    headers
        .iter()
        .map(|h| format!("{}: {}", h.name, h.value))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Response body text, base64-decoded when the content declares it.
/// A decode failure empties the surface and records a diagnostic; the other
/// surfaces of the entry are unaffected.
fn response_body_text(
    index: usize,
    response: &Response,
    diagnostics: &mut Vec<ScanDiagnostic>,
) -> String {
    let Some(content) = &response.content else {
        return String::new();
    };
    let text = content.text.clone().unwrap_or_default();

    if content.encoding.as_deref() == Some("base64") {
        match BASE64_STANDARD.decode(text.trim().as_bytes()) {
            Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            Err(e) => {
                diagnostics.push(ScanDiagnostic::ResponseDecode {
                    entry: index,
                    reason: e.to_string(),
                });
                String::new()
            }
        }
    } else {
        text
    }
}

/// Decode `%XX` byte sequences, then interpret the result as UTF-8,
/// replacing invalid sequences. Malformed escapes pass through verbatim.
pub fn percent_decode(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            if let (Some(hi), Some(lo)) = (hex_val(bytes[i + 1]), hex_val(bytes[i + 2])) {
                out.push(hi << 4 | lo);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }

    String::from_utf8_lossy(&out).into_owned()
}

fn hex_val(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
