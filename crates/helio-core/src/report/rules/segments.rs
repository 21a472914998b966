//! Field segment layout rule.

use tracing::debug;

use super::FieldExtractor;
use super::patterns::FIELD_SEGMENT;
use crate::models::report::SegmentRecord;

/// Extractor for field segment layouts.
pub struct FieldSegmentExtractor;

impl FieldSegmentExtractor {
    pub const NAME: &'static str = "field_segments";

    pub fn new() -> Self {
        Self
    }
}

impl Default for FieldSegmentExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for FieldSegmentExtractor {
    type Output = SegmentRecord;

    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let segments: Vec<SegmentRecord> = FIELD_SEGMENT
            .captures_iter(text)
            .map(|caps| SegmentRecord {
                module_tilt_deg: caps[1].to_string(),
                module_azimuth_deg: caps[2].to_string(),
                spacing_ft: caps[3].to_string(),
                frame_size: caps[4].to_string(),
                frame_count: caps[5].to_string(),
                module_count: caps[6].to_string(),
                power_kw: caps[7].to_string(),
            })
            .collect();

        debug!("Matched {} field segments", segments.len());
        segments
    }
}

/// Extract field segment layouts in text order.
pub fn extract_field_segments(text: &str) -> Vec<SegmentRecord> {
    FieldSegmentExtractor::new().extract_all(text)
}
