use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum HarScanError {
    #[error("failed to parse HAR file {path}: {reason}")]
    HarParse { path: PathBuf, reason: String },

    #[error("config parse error in {path}: {reason}")]
    ConfigParse { path: PathBuf, reason: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, HarScanError>;

/// A recoverable per-item problem found during a scan.
///
/// Diagnostics never abort the scan: the offending entry, pattern, or
/// surface is skipped and the rest of the input is still processed. They
/// are collected into a side list and reported after the findings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScanDiagnostic {
    #[error("invalid custom field format: {spec} (expected name:regex)")]
    MalformedCustomField { spec: String },

    #[error("invalid custom pattern for field '{name}': {reason}")]
    InvalidCustomPattern { name: String, reason: String },

    #[error("error decoding response content in entry {entry}: {reason}")]
    ResponseDecode { entry: usize, reason: String },

    #[error("skipping malformed entry {entry}: {reason}")]
    MalformedEntry { entry: usize, reason: String },
}
