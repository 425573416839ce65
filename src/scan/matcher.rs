use crate::patterns::PatternSet;

use super::context::extract_context;

/// One pattern hit on one line, before it is tagged with the entry index
/// and surface it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineMatch {
    pub pii_type: String,
    pub matched: String,
    pub line_number: usize,
    pub context: String,
}

/// Apply every pattern in the set to every line of `text`.
///
/// Lines are numbered from 1. Within a pattern, matches follow the usual
/// leftmost non-overlapping semantics; across patterns, overlapping matches
/// are all kept -- there is no deduplication.
pub fn find_matches(text: &str, patterns: &PatternSet, window: usize) -> Vec<LineMatch> {
    let mut matches = Vec::new();

    for (line_idx, line) in text.lines().enumerate() {
        for (pii_type, regex) in patterns.iter() {
            for m in regex.find_iter(line) {
                matches.push(LineMatch {
                    pii_type: pii_type.to_string(),
                    matched: m.as_str().to_string(),
                    line_number: line_idx + 1,
                    context: extract_context(line, m.start(), m.end(), window),
                });
            }
        }
    }

    matches
}
