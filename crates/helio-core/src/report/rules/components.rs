//! Components table rule: inverters, strings, and modules.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::FieldExtractor;
use super::patterns::COMPONENT_ROW;
use crate::models::report::ComponentRecord;

/// Equipment category of a component row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentKind {
    Inverter,
    String,
    Module,
}

impl ComponentKind {
    /// Classify a raw component label.
    ///
    /// Case-insensitive substring match. A label matching several categories
    /// is assigned to exactly one, checked in the order module, string,
    /// inverter.
    pub fn classify(label: &str) -> Option<ComponentKind> {
        let label = label.to_lowercase();
        if label.contains("module") {
            Some(ComponentKind::Module)
        } else if label.contains("string") {
            Some(ComponentKind::String)
        } else if label.contains("inverter") {
            Some(ComponentKind::Inverter)
        } else {
            None
        }
    }
}

/// Extractor for rows of the components table.
pub struct ComponentExtractor;

impl ComponentExtractor {
    pub const NAME: &'static str = "components";

    pub fn new() -> Self {
        Self
    }
}

impl Default for ComponentExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for ComponentExtractor {
    type Output = ComponentRecord;

    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let rows: Vec<ComponentRecord> = COMPONENT_ROW
            .captures_iter(text)
            .map(|caps| ComponentRecord {
                kind: caps[1].trim().to_string(),
                description: caps[2].trim().to_string(),
                count: caps[3].trim().to_string(),
                value: caps[4].trim().to_string(),
                unit: caps[5].trim().to_string(),
            })
            .collect();

        debug!("Matched {} component rows", rows.len());
        rows
    }
}

/// Component rows split by category, each in original relative order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifiedComponents {
    pub inverters: Vec<ComponentRecord>,
    pub strings: Vec<ComponentRecord>,
    pub modules: Vec<ComponentRecord>,
}

/// Split component rows into inverters, strings, and modules.
pub fn classify_components(components: &[ComponentRecord]) -> ClassifiedComponents {
    let mut classified = ClassifiedComponents::default();

    for component in components {
        match ComponentKind::classify(&component.kind) {
            Some(ComponentKind::Inverter) => classified.inverters.push(component.clone()),
            Some(ComponentKind::String) => classified.strings.push(component.clone()),
            Some(ComponentKind::Module) => classified.modules.push(component.clone()),
            None => {}
        }
    }

    classified
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &str = "Components\n\
        Component  Name  Count\n\
        Inverters  SMA Sunny Tripower CORE1 33-US (SMA)  20 (660.0 kW)\n\
        Strings  10 AWG (Copper)  160 (18,235.7 ft)\n\
        Module  Canadian Solar, CS3W-400P (400W)  1920 (768.0 kW)\n";

    #[test]
    fn test_extract_table_rows() {
        let rows = ComponentExtractor::new().extract_all(TABLE);
        assert_eq!(rows.len(), 3);

        assert_eq!(rows[0].kind, "Inverters");
        assert_eq!(rows[0].description, "SMA Sunny Tripower CORE1 33-US (SMA)");
        assert_eq!(rows[0].count, "20");
        assert_eq!(rows[0].value, "660.0");
        assert_eq!(rows[0].unit, "kW");

        assert_eq!(rows[1].kind, "Strings");
        assert_eq!(rows[1].description, "10 AWG (Copper)");
        assert_eq!(rows[1].count, "160");
        assert_eq!(rows[1].value, "18,235.7");
        assert_eq!(rows[1].unit, "ft");

        assert_eq!(rows[2].kind, "Module");
        assert_eq!(rows[2].description, "Canadian Solar, CS3W-400P (400W)");
        assert_eq!(rows[2].count, "1920");
    }

    #[test]
    fn test_counts_and_units() {
        for row in ComponentExtractor::new().extract_all(TABLE) {
            assert!(row.count.parse::<u64>().is_ok());
            assert!(row.unit == "kW" || row.unit == "ft");
        }
    }

    #[test]
    fn test_strings_label_keeps_qualifier() {
        let rows = ComponentExtractor::new().extract_all("Strings:Module Harness  Copper  12 (400.0 ft)");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].kind, "Strings:Module");
        assert_eq!(rows[0].description, "Harness  Copper");
    }

    #[test]
    fn test_no_match() {
        assert!(ComponentExtractor::new().extract_all("Module: 20°").is_empty());
        assert!(ComponentExtractor::new().extract("").is_none());
    }

    #[test]
    fn test_classify() {
        assert_eq!(ComponentKind::classify("Inverters"), Some(ComponentKind::Inverter));
        assert_eq!(ComponentKind::classify("Strings 10 AWG"), Some(ComponentKind::String));
        assert_eq!(ComponentKind::classify("MODULE"), Some(ComponentKind::Module));
        assert_eq!(ComponentKind::classify("Combiner"), None);
    }

    #[test]
    fn test_module_takes_precedence() {
        assert_eq!(ComponentKind::classify("Module String Mount"), Some(ComponentKind::Module));
        assert_eq!(ComponentKind::classify("Strings:Module"), Some(ComponentKind::Module));
        assert_eq!(ComponentKind::classify("Strings to Inverter"), Some(ComponentKind::String));
    }

    #[test]
    fn test_classify_components_preserves_order() {
        let text = "Module  Panel A  10 (4.0 kW)\n\
            Inverters  Inv A  1 (3.0 kW)\n\
            Module  Panel B  5 (2.0 kW)\n\
            Strings:Module Harness  Copper  12 (400.0 ft)\n";
        let rows = ComponentExtractor::new().extract_all(text);
        let classified = classify_components(&rows);

        let module_descriptions: Vec<&str> = classified
            .modules
            .iter()
            .map(|c| c.description.as_str())
            .collect();
        assert_eq!(module_descriptions, vec!["Panel A", "Panel B", "Harness  Copper"]);
        assert_eq!(classified.inverters.len(), 1);
        assert!(classified.strings.is_empty());
    }
}
