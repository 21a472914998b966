//! Subcommands and the helpers they share.

pub mod batch;
pub mod config;
pub mod output;
pub mod process;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use helio_core::models::config::HelioConfig;
use helio_core::pdf::{PdfExtractor, PdfProcessor};

/// Input kinds the CLI accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// A PDF report, flattened before extraction.
    Pdf,
    /// Text already flattened from a report.
    Text,
}

impl InputKind {
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match extension.as_str() {
            "pdf" => Some(InputKind::Pdf),
            "txt" => Some(InputKind::Text),
            _ => None,
        }
    }
}

/// Default location of the configuration file.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("helio")
        .join("config.json")
}

/// Load the configuration named on the command line, else the default file
/// when it exists, else built-in defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<HelioConfig> {
    if let Some(path) = config_path {
        return Ok(HelioConfig::from_file(Path::new(path))?);
    }

    let default_path = default_config_path();
    if default_path.exists() {
        debug!("Using config file {}", default_path.display());
        Ok(HelioConfig::from_file(&default_path)?)
    } else {
        Ok(HelioConfig::default())
    }
}

/// Read the flattened text of a report file.
pub fn read_report_text(path: &Path, config: &HelioConfig) -> anyhow::Result<String> {
    let kind = InputKind::from_path(path).ok_or_else(|| {
        anyhow::anyhow!("Unsupported file format: {}", path.display())
    })?;

    match kind {
        InputKind::Pdf => {
            let data = fs::read(path)?;
            let mut extractor = PdfExtractor::from_config(&config.pdf);
            extractor.load(&data)?;
            debug!("PDF has {} pages", extractor.page_count());

            let text = extractor.extract_text()?;
            if text.trim().len() < config.pdf.min_text_length {
                warn!(
                    "{} yielded only {} characters of text; it may be a scanned PDF",
                    path.display(),
                    text.trim().len()
                );
            }
            Ok(text)
        }
        InputKind::Text => {
            info!("Reading flattened text from {}", path.display());
            Ok(fs::read_to_string(path)?)
        }
    }
}
