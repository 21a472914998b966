//! Core library for HelioScope summary report extraction.
//!
//! This crate provides:
//! - PDF text flattening (every page, in order)
//! - Rule-based field extraction over the flattened text
//! - Report data models and a presentation view for UIs

pub mod error;
pub mod models;
pub mod pdf;
pub mod report;

pub use error::{HelioError, PdfError, Result};
pub use models::config::HelioConfig;
pub use models::report::{
    ComponentRecord, ExtractionResult, LossRecord, MonthRecord, ProjectInfo, SegmentRecord,
};
pub use pdf::{PdfContent, PdfExtractor, PdfProcessor};
pub use report::view::{ReportView, Section, SectionBody, TableKind};
pub use report::{HelioscopeParser, ReportParser};

/// Extract a report from already flattened text.
///
/// Never fails: fields the text does not contain are simply absent.
pub fn extract_report_from_text(text: &str) -> ExtractionResult {
    HelioscopeParser::new().parse(text)
}

/// Extract a report from raw PDF bytes.
///
/// The PDF is flattened to text first; if the bytes are not a readable PDF the
/// error is returned and no field extraction takes place.
pub fn extract_report(data: &[u8]) -> Result<ExtractionResult> {
    extract_report_with_config(data, &HelioConfig::default())
}

/// Extract a report from raw PDF bytes using the given configuration.
pub fn extract_report_with_config(data: &[u8], config: &HelioConfig) -> Result<ExtractionResult> {
    let mut extractor = PdfExtractor::from_config(&config.pdf);
    extractor.load(data)?;
    let text = extractor.extract_text()?;
    Ok(HelioscopeParser::from_config(&config.extraction).parse(&text))
}
