use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{HarScanError, Result};
use crate::scan::context::DEFAULT_WINDOW;

/// Scan configuration, loadable from a YAML file and overlaid by CLI flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Include the looser "possible PII" categories.
    #[serde(default)]
    pub include_possible_pii: bool,

    /// Extra patterns as `name:regex` specs.
    #[serde(default)]
    pub custom_fields: Vec<String>,

    /// Context window width around each match. Default: 30.
    #[serde(default = "default_context_window")]
    pub context_window: usize,
}

fn default_context_window() -> usize {
    DEFAULT_WINDOW
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            include_possible_pii: false,
            custom_fields: Vec::new(),
            context_window: DEFAULT_WINDOW,
        }
    }
}

impl ScanConfig {
    /// Load config from a YAML file. Returns default if the file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)?;
        serde_yaml::from_str(&contents).map_err(|e| HarScanError::ConfigParse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Fold CLI flags over the file config. The boolean ORs; CLI custom
    /// fields append after the file's, so a CLI entry wins name collisions.
    pub fn merge_cli(mut self, include_possible_pii: bool, custom_fields: &[String]) -> Self {
        self.include_possible_pii |= include_possible_pii;
        self.custom_fields.extend(custom_fields.iter().cloned());
        self
    }
}
