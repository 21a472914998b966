//! Configuration structures for the extraction pipeline.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{HelioError, Result};

/// Main configuration for the helio pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HelioConfig {
    /// PDF processing configuration.
    pub pdf: PdfConfig,

    /// Field extraction configuration.
    pub extraction: ExtractionConfig,

    /// Output configuration.
    pub output: OutputConfig,
}

/// PDF processing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    /// Separator inserted between page texts.
    pub page_separator: String,

    /// Try to open encrypted PDFs with an empty user password.
    pub try_empty_password: bool,

    /// Below this many characters of text the PDF is reported as probably scanned.
    pub min_text_length: usize,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            page_separator: "\n".to_string(),
            try_empty_password: true,
            min_text_length: 50,
        }
    }
}

/// Field extraction configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Names of rules to skip (see `report::rules::RULE_NAMES`).
    pub disabled_rules: Vec<String>,
}

/// Output configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Pretty-print JSON output.
    pub pretty_json: bool,
}

impl HelioConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| HelioError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content =
            serde_json::to_string_pretty(self).map_err(|e| HelioError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = HelioConfig::default();
        assert_eq!(config.pdf.page_separator, "\n");
        assert!(config.pdf.try_empty_password);
        assert!(config.extraction.disabled_rules.is_empty());
        assert!(!config.output.pretty_json);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: HelioConfig =
            serde_json::from_str(r#"{"extraction": {"disabled_rules": ["losses"]}}"#).unwrap();
        assert_eq!(config.extraction.disabled_rules, vec!["losses".to_string()]);
        assert_eq!(config.pdf.min_text_length, 50);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = HelioConfig::default();
        config.output.pretty_json = true;
        config.save(&path).unwrap();

        let loaded = HelioConfig::from_file(&path).unwrap();
        assert!(loaded.output.pretty_json);
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{not json").unwrap();

        assert!(matches!(HelioConfig::from_file(&path), Err(HelioError::Config(_))));
        assert!(matches!(
            HelioConfig::from_file(&dir.path().join("missing.json")),
            Err(HelioError::Io(_))
        ));
    }
}
