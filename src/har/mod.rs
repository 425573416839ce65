use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::{HarScanError, Result, ScanDiagnostic};

/// Top-level HAR document.
#[derive(Debug, Clone, Deserialize)]
pub struct Har {
    pub log: HarLog,
}

/// The `log` container. Entries stay raw JSON here so one malformed entry
/// cannot fail the whole file; each is decoded individually at scan time.
#[derive(Debug, Clone, Deserialize)]
pub struct HarLog {
    #[serde(default)]
    pub entries: Vec<serde_json::Value>,
}

/// One captured request/response pair.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    #[serde(default)]
    pub started_date_time: Option<DateTime<Utc>>,
    pub request: Request,
    pub response: Response,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    pub url: String,
    #[serde(default)]
    pub method: String,
    #[serde(default)]
    pub headers: Vec<Header>,
    #[serde(default)]
    pub post_data: Option<PostData>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Response {
    #[serde(default)]
    pub headers: Vec<Header>,
    #[serde(default)]
    pub content: Option<Content>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Header {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub value: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostData {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub encoding: Option<String>,
}

impl Har {
    /// Read and parse a HAR file. Unreadable or structurally invalid input
    /// is fatal; nothing has been scanned at this point.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        serde_json::from_str(&contents).map_err(|e| HarScanError::HarParse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }
}

/// Decode one raw entry into the typed model. A failure here is a
/// per-entry diagnostic, not a scan abort.
pub fn decode_entry(
    index: usize,
    raw: &serde_json::Value,
) -> std::result::Result<Entry, ScanDiagnostic> {
    serde_json::from_value(raw.clone()).map_err(|e| ScanDiagnostic::MalformedEntry {
        entry: index,
        reason: e.to_string(),
    })
}
