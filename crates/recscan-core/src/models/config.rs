//! Configuration structures for the receipt pipeline.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{RecscanError, Result};

/// Main configuration for recscan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecscanConfig {
    /// Limits applied to OCR text before structuring.
    pub input: InputConfig,

    /// Output rendering options.
    pub output: OutputConfig,
}

/// Limits applied to OCR text at the boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Maximum input size in bytes (0 = unlimited).
    pub max_bytes: usize,

    /// Maximum number of lines (0 = unlimited).
    pub max_lines: usize,

    /// Refuse empty or whitespace-only text instead of structuring it.
    pub reject_empty: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            max_bytes: 1024 * 1024,
            max_lines: 10_000,
            reject_empty: true,
        }
    }
}

/// Output rendering options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Pretty-print JSON output.
    pub pretty_json: bool,

    /// Print extraction warnings to stderr.
    pub include_warnings: bool,
}

impl RecscanConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| RecscanError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
