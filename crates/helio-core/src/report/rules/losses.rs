//! System loss rule.
//!
//! Scans the whole report for `Label: NN%` entries. The scan is not anchored
//! to the loss section, so any such text elsewhere in the report is reported
//! as a loss too.

use tracing::debug;

use super::FieldExtractor;
use super::patterns::LOSS_ENTRY;
use crate::models::report::LossRecord;

/// Extractor for system loss entries.
pub struct LossExtractor;

impl LossExtractor {
    pub const NAME: &'static str = "losses";

    pub fn new() -> Self {
        Self
    }
}

impl Default for LossExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for LossExtractor {
    type Output = LossRecord;

    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let losses: Vec<LossRecord> = LOSS_ENTRY
            .captures_iter(text)
            .map(|caps| LossRecord {
                loss_type: caps[1].to_string(),
                loss_percent: caps[2].to_string(),
            })
            .collect();

        debug!("Matched {} loss entries", losses.len());
        losses
    }
}

/// Extract all loss entries from report text.
pub fn extract_losses(text: &str) -> Vec<LossRecord> {
    LossExtractor::new().extract_all(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(losses: &[LossRecord]) -> Vec<(&str, &str)> {
        losses
            .iter()
            .map(|l| (l.loss_type.as_str(), l.loss_percent.as_str()))
            .collect()
    }

    #[test]
    fn test_extract_losses() {
        let text = "Sources of System Loss\nShading: 3.4%\nSoiling : 2.0%\nTemperature:4.7%\n";
        let losses = extract_losses(text);
        assert_eq!(
            pairs(&losses),
            vec![("Shading", "3.4"), ("Soiling", "2.0"), ("Temperature", "4.7")]
        );
    }

    #[test]
    fn test_multi_word_label_keeps_last_word() {
        let losses = extract_losses("AC System: 0.6%");
        assert_eq!(pairs(&losses), vec![("System", "0.6")]);
    }

    #[test]
    fn test_duplicates_kept() {
        let losses = extract_losses("Wiring: 1.1%\nWiring: 1.1%");
        assert_eq!(losses.len(), 2);
    }

    #[test]
    fn test_no_losses() {
        let losses = extract_losses("Load Ratio: 1.16\nModule: 20°");
        assert!(losses.is_empty());
    }
}
