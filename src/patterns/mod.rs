use regex::Regex;

use crate::error::ScanDiagnostic;

/// Mandatory PII categories, always part of the effective set.
pub fn pii_patterns() -> Vec<(&'static str, &'static str)> {
    vec![
        (
            "Email Address",
            r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b",
        ),
        (
            "Phone Number",
            r"\b(?:\+?1[-.\s]?|0)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}\b",
        ),
        // 13-16 digits, at most one space/dash between digits. Bounded on
        // purpose: an unbounded repetition here is a performance hazard on
        // long digit runs.
        ("Credit Card Number", r"\b\d(?:[ -]?\d){12,15}\b"),
        ("Social Security Number", r"\b\d{3}-\d{2}-\d{4}\b"),
        ("IP Address", r"\b\d{1,3}(?:\.\d{1,3}){3}\b"),
        ("Date of Birth", r"\b\d{2}[/-]\d{2}[/-]\d{4}\b"),
    ]
}

/// Looser shapes that are only possibly PII. Opt-in.
pub fn possible_pii_patterns() -> Vec<(&'static str, &'static str)> {
    vec![(
        "GUID",
        r"\b[a-fA-F0-9]{8}\b(?:-[a-fA-F0-9]{4}){3}-[a-fA-F0-9]{12}\b",
    )]
}

/// The effective pattern set for one scan: an insertion-ordered mapping of
/// category name to compiled regex. Re-inserting an existing name replaces
/// the regex but keeps the original position, so output ordering is stable
/// when a later tier overrides an earlier one.
pub struct PatternSet {
    entries: Vec<(String, Regex)>,
}

impl PatternSet {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Insert or override a category. Last writer wins.
    pub fn insert(&mut self, name: impl Into<String>, regex: Regex) {
        let name = name.into();
        if let Some(slot) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = regex;
        } else {
            self.entries.push((name, regex));
        }
    }

    pub fn get(&self, name: &str) -> Option<&Regex> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, re)| re)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Regex)> {
        self.entries.iter().map(|(n, re)| (n.as_str(), re))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for PatternSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Split a `name:regex` custom field spec on the first colon.
/// The regex part may itself contain colons.
pub fn split_custom_field(spec: &str) -> Option<(&str, &str)> {
    spec.split_once(':')
}

/// Build the effective pattern set for one scan.
///
/// Merge order is mandatory -> possible -> custom; duplicate names resolve
/// to the last writer. A custom entry that is malformed or fails to compile
/// is skipped with a diagnostic; it never aborts the build.
pub fn build_effective_patterns(
    include_possible: bool,
    custom_fields: &[String],
) -> (PatternSet, Vec<ScanDiagnostic>) {
    let mut set = PatternSet::new();
    let mut diagnostics = Vec::new();

    for (name, pattern) in pii_patterns() {
        let re = Regex::new(pattern).expect("built-in PII patterns should compile");
        set.insert(name, re);
    }

    if include_possible {
        for (name, pattern) in possible_pii_patterns() {
            let re = Regex::new(pattern).expect("built-in possible-PII patterns should compile");
            set.insert(name, re);
        }
    }

    for spec in custom_fields {
        let Some((name, pattern)) = split_custom_field(spec) else {
            diagnostics.push(ScanDiagnostic::MalformedCustomField { spec: spec.clone() });
            continue;
        };
        match Regex::new(pattern) {
            Ok(re) => set.insert(name, re),
            Err(e) => diagnostics.push(ScanDiagnostic::InvalidCustomPattern {
                name: name.to_string(),
                reason: e.to_string(),
            }),
        }
    }

    (set, diagnostics)
}
