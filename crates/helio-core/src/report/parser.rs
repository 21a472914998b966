//! Report parser running the rule battery over flattened text.

use std::collections::HashSet;

use tracing::{debug, info, warn};

use crate::models::config::ExtractionConfig;
use crate::models::report::ExtractionResult;

use super::rules::{
    ComponentExtractor, FieldExtractor, FieldSegmentExtractor, LossExtractor,
    MonthlyProductionExtractor, classify_components, is_rule_name,
    project::collect_project_info,
};

/// Trait for report parsing.
pub trait ReportParser {
    /// Parse a report from flattened text.
    ///
    /// Parsing never fails; fields missing from the text are left empty.
    fn parse(&self, text: &str) -> ExtractionResult;
}

/// Parser for HelioScope summary reports.
#[derive(Debug, Clone, Default)]
pub struct HelioscopeParser {
    /// Rules to skip.
    disabled_rules: HashSet<String>,
}

impl HelioscopeParser {
    /// Create a parser with every rule enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser from extraction configuration.
    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self::new().with_disabled_rules(config.disabled_rules.iter().cloned())
    }

    /// Skip the named rules. Unknown names are ignored with a warning.
    pub fn with_disabled_rules<I, S>(mut self, rules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for rule in rules {
            let rule = rule.into();
            if !is_rule_name(&rule) {
                warn!("Ignoring unknown rule name: {}", rule);
                continue;
            }
            self.disabled_rules.insert(rule);
        }
        self
    }

    /// Whether the named rule runs.
    pub fn is_enabled(&self, rule: &str) -> bool {
        !self.disabled_rules.contains(rule)
    }

    fn run<E: FieldExtractor>(&self, extractor: E, text: &str) -> Vec<E::Output> {
        if self.is_enabled(extractor.name()) {
            extractor.extract_all(text)
        } else {
            debug!("Rule {} disabled", extractor.name());
            Vec::new()
        }
    }
}

impl ReportParser for HelioscopeParser {
    fn parse(&self, text: &str) -> ExtractionResult {
        info!("Parsing report from {} characters of text", text.len());

        let project_info = collect_project_info(text, |field| self.is_enabled(field.rule_name()));

        // The components table is the only source for inverters, strings and modules
        let components = self.run(ComponentExtractor::new(), text);
        let classified = classify_components(&components);

        let losses = self.run(LossExtractor::new(), text);
        let monthly_production = self.run(MonthlyProductionExtractor::new(), text);
        let field_segments = self.run(FieldSegmentExtractor::new(), text);

        debug!(
            "Extracted {} project fields, {} components ({} inverters, {} strings, {} modules), {} losses, {} months, {} segments",
            project_info.entries().len(),
            components.len(),
            classified.inverters.len(),
            classified.strings.len(),
            classified.modules.len(),
            losses.len(),
            monthly_production.len(),
            field_segments.len()
        );

        ExtractionResult {
            project_info,
            components,
            inverters: classified.inverters,
            strings: classified.strings,
            modules: classified.modules,
            losses,
            monthly_production,
            field_segments,
        }
    }
}
