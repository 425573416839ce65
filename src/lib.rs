//! harscan: scan HAR captures for leaked personally-identifiable information.
//!
//! The core is a pure transform from parsed HAR entries to match records:
//! an effective pattern set (built-in PII categories, opt-in possible-PII
//! categories, caller-supplied custom patterns) is applied line by line to
//! the four text surfaces of every entry (URL, request headers, request
//! body, response body). Everything around it -- file ingest, config,
//! table/JSON reporting, the CLI -- is orchestration.

pub mod cli;
pub mod config;
pub mod error;
pub mod har;
pub mod patterns;
pub mod report;
pub mod scan;
