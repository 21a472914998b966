//! Rule-based field extractors for HelioScope summary reports.
//!
//! Each rule is a named, independent scan over the flattened report text.
//! A rule that finds nothing yields `None` or an empty list, never an error.

pub mod components;
pub mod losses;
pub mod monthly;
pub mod numbers;
pub mod patterns;
pub mod project;
pub mod segments;

pub use components::{ClassifiedComponents, ComponentExtractor, ComponentKind, classify_components};
pub use losses::{LossExtractor, extract_losses};
pub use monthly::{Month, MonthlyProductionExtractor, extract_monthly_production};
pub use numbers::{parse_count, parse_frame_size, parse_number};
pub use project::{ProjectField, ProjectFieldExtractor, extract_project_info};
pub use segments::{FieldSegmentExtractor, extract_field_segments};

/// Rule names in the order the parser runs them.
pub const RULE_NAMES: [&str; 9] = [
    ProjectField::Name.rule_name(),
    ProjectField::Address.rule_name(),
    ProjectField::AnnualProduction.rule_name(),
    ProjectField::PerformanceRatio.rule_name(),
    ProjectField::WeatherDataset.rule_name(),
    ComponentExtractor::NAME,
    LossExtractor::NAME,
    MonthlyProductionExtractor::NAME,
    FieldSegmentExtractor::NAME,
];

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Rule name, as used in configuration.
    fn name(&self) -> &'static str;

    /// Extract the first occurrence of the field.
    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    /// Extract all occurrences of the field, in text order.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}

/// True if `name` is a known rule.
pub fn is_rule_name(name: &str) -> bool {
    RULE_NAMES.contains(&name)
}
