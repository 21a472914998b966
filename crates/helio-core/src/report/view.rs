//! Presentation view of an extraction result.
//!
//! Turns an [`ExtractionResult`] into ordered, titled sections that a front
//! end can render directly. Sections with no data are left out.

use serde::Serialize;

use crate::models::report::{ComponentRecord, ExtractionResult};

/// Ordered sections ready for display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReportView {
    pub sections: Vec<Section>,
}

/// One titled block of the view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub title: String,
    pub body: SectionBody,
}

/// Content of a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SectionBody {
    /// Key/value listing.
    KeyValues { entries: Vec<(String, String)> },
    /// Equipment listing; `value_label` names the value ("Capacity", "Length").
    Listing {
        value_label: String,
        items: Vec<ListingItem>,
    },
    /// Column table.
    Table(Table),
}

/// One equipment entry of a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingItem {
    pub description: String,
    pub count: String,
    pub value: String,
    pub unit: String,
}

/// Tables a report can contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TableKind {
    Losses,
    MonthlyProduction,
    FieldSegments,
    Components,
}

impl TableKind {
    pub const ALL: [TableKind; 4] = [
        TableKind::Losses,
        TableKind::MonthlyProduction,
        TableKind::FieldSegments,
        TableKind::Components,
    ];

    pub fn title(self) -> &'static str {
        match self {
            TableKind::Losses => "System Losses",
            TableKind::MonthlyProduction => "Monthly Energy Production",
            TableKind::FieldSegments => "Field Segment Layouts",
            TableKind::Components => "Components Table (Full Descriptions)",
        }
    }

    pub fn columns(self) -> &'static [&'static str] {
        match self {
            TableKind::Losses => &["Loss Type", "Loss (%)"],
            TableKind::MonthlyProduction => &[
                "Month",
                "GHI",
                "POA",
                "Shaded",
                "Nameplate (kWh)",
                "Grid (kWh)",
            ],
            TableKind::FieldSegments => &[
                "Module Tilt (°)",
                "Module Azimuth (°)",
                "Spacing (ft)",
                "Frame Size",
                "Frames",
                "Modules",
                "Power (kW)",
            ],
            TableKind::Components => &["Component", "Description", "Count", "Value", "Unit"],
        }
    }

    /// Rows of this table for a result, in result order.
    pub fn rows(self, result: &ExtractionResult) -> Vec<Vec<String>> {
        match self {
            TableKind::Losses => result
                .losses
                .iter()
                .map(|l| vec![l.loss_type.clone(), l.loss_percent.clone()])
                .collect(),
            TableKind::MonthlyProduction => result
                .monthly_production
                .iter()
                .map(|m| {
                    vec![
                        m.month.clone(),
                        m.ghi.clone(),
                        m.poa.clone(),
                        m.shaded.clone(),
                        m.nameplate_kwh.clone(),
                        m.grid_kwh.clone(),
                    ]
                })
                .collect(),
            TableKind::FieldSegments => result
                .field_segments
                .iter()
                .map(|s| {
                    vec![
                        s.module_tilt_deg.clone(),
                        s.module_azimuth_deg.clone(),
                        s.spacing_ft.clone(),
                        s.frame_size.clone(),
                        s.frame_count.clone(),
                        s.module_count.clone(),
                        s.power_kw.clone(),
                    ]
                })
                .collect(),
            TableKind::Components => result
                .components
                .iter()
                .map(|c| {
                    vec![
                        c.kind.clone(),
                        c.description.clone(),
                        c.count.clone(),
                        c.value.clone(),
                        c.unit.clone(),
                    ]
                })
                .collect(),
        }
    }
}

/// A column table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    pub kind: TableKind,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Build a table for `kind`, or `None` when it would have no rows.
    pub fn build(kind: TableKind, result: &ExtractionResult) -> Option<Table> {
        let rows = kind.rows(result);
        if rows.is_empty() {
            return None;
        }

        Some(Table {
            kind,
            columns: kind.columns().iter().map(|c| c.to_string()).collect(),
            rows,
        })
    }
}

impl ReportView {
    /// Build the view for a result.
    pub fn from_result(result: &ExtractionResult) -> Self {
        let mut sections = Vec::new();

        let entries: Vec<(String, String)> = result
            .project_info
            .entries()
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        if !entries.is_empty() {
            sections.push(Section {
                title: "Project Information".to_string(),
                body: SectionBody::KeyValues { entries },
            });
        }

        for (title, value_label, components) in [
            ("Inverter Information", "Capacity", &result.inverters),
            ("Strings Information", "Length", &result.strings),
            ("Module Information", "Capacity", &result.modules),
        ] {
            if let Some(section) = listing(title, value_label, components) {
                sections.push(section);
            }
        }

        for kind in TableKind::ALL {
            if let Some(table) = Table::build(kind, result) {
                sections.push(Section {
                    title: kind.title().to_string(),
                    body: SectionBody::Table(table),
                });
            }
        }

        Self { sections }
    }

    /// Look up one table section.
    pub fn table(&self, kind: TableKind) -> Option<&Table> {
        self.sections.iter().find_map(|s| match &s.body {
            SectionBody::Table(table) if table.kind == kind => Some(table),
            _ => None,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

fn listing(title: &str, value_label: &str, components: &[ComponentRecord]) -> Option<Section> {
    if components.is_empty() {
        return None;
    }

    let items = components
        .iter()
        .map(|c| ListingItem {
            description: c.description.clone(),
            count: c.count.clone(),
            value: c.value.clone(),
            unit: c.unit.clone(),
        })
        .collect();

    Some(Section {
        title: title.to_string(),
        body: SectionBody::Listing {
            value_label: value_label.to_string(),
            items,
        },
    })
}
