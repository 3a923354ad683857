//! Configuration structures for the extraction pipeline.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::order::PackageType;
use crate::error::{FrexError, Result};

/// Main configuration for the frex pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FrexConfig {
    /// Document-to-lines configuration.
    pub pdf: PdfConfig,

    /// Order extraction configuration.
    pub extraction: ExtractionConfig,
}

/// Document-to-lines configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    /// Strip leading and trailing whitespace from every line.
    pub trim_lines: bool,

    /// Drop lines that are empty after trimming. Off by default: some
    /// labels are followed by a blank formatting line that value offsets
    /// count on.
    pub skip_blank_lines: bool,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            trim_lines: true,
            skip_blank_lines: false,
        }
    }
}

/// Order extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Currency reported alongside the freight price.
    pub freight_currency: String,

    /// Extra unit labels mapped to package types, layered over the built-in table.
    pub package_types: BTreeMap<String, PackageType>,

    /// Display strings keyed by `package_type.<ENUM>`.
    pub translations: BTreeMap<String, String>,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            freight_currency: "EUR".to_string(),
            package_types: BTreeMap::new(),
            translations: BTreeMap::new(),
        }
    }
}

impl FrexConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| FrexError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<()> {
        let content =
            serde_json::to_string_pretty(self).map_err(|e| FrexError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
