//! Report data models for HelioScope summary extraction.
//!
//! Every value is kept exactly as it appears in the report text. Parsed
//! numbers are available through accessor methods and never replace the
//! original strings.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::report::rules::numbers::{parse_count, parse_frame_size, parse_number};
use crate::report::rules::monthly::Month;

/// Everything extracted from a single report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    /// Project metadata.
    pub project_info: ProjectInfo,

    /// Components table rows, in text order.
    pub components: Vec<ComponentRecord>,

    /// Components classified as inverters.
    pub inverters: Vec<ComponentRecord>,

    /// Components classified as strings.
    pub strings: Vec<ComponentRecord>,

    /// Components classified as modules.
    pub modules: Vec<ComponentRecord>,

    /// Sources of system loss, in text order.
    pub losses: Vec<LossRecord>,

    /// Monthly production rows, one per match.
    pub monthly_production: Vec<MonthRecord>,

    /// Field segment layouts.
    pub field_segments: Vec<SegmentRecord>,
}

impl ExtractionResult {
    /// True when no rule matched anything.
    pub fn is_empty(&self) -> bool {
        self.project_info.is_empty()
            && self.components.is_empty()
            && self.losses.is_empty()
            && self.monthly_production.is_empty()
            && self.field_segments.is_empty()
    }

    /// Sum of monthly grid production in kWh.
    ///
    /// Rows whose grid value does not parse are skipped.
    pub fn total_grid_kwh(&self) -> Decimal {
        self.monthly_production
            .iter()
            .filter_map(MonthRecord::grid_kwh)
            .sum()
    }
}

/// Project metadata keyed by the labels shown to users.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectInfo {
    #[serde(rename = "Project Name", default, skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,

    #[serde(rename = "Project Address", default, skip_serializing_if = "Option::is_none")]
    pub project_address: Option<String>,

    #[serde(
        rename = "Annual Production (MWh)",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub annual_production: Option<String>,

    #[serde(
        rename = "Performance Ratio (%)",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub performance_ratio: Option<String>,

    #[serde(rename = "Weather Dataset", default, skip_serializing_if = "Option::is_none")]
    pub weather_dataset: Option<String>,
}

impl ProjectInfo {
    pub const PROJECT_NAME: &'static str = "Project Name";
    pub const PROJECT_ADDRESS: &'static str = "Project Address";
    pub const ANNUAL_PRODUCTION: &'static str = "Annual Production (MWh)";
    pub const PERFORMANCE_RATIO: &'static str = "Performance Ratio (%)";
    pub const WEATHER_DATASET: &'static str = "Weather Dataset";

    /// Present fields as `(key, value)` pairs in display order.
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        [
            (Self::PROJECT_NAME, &self.project_name),
            (Self::PROJECT_ADDRESS, &self.project_address),
            (Self::ANNUAL_PRODUCTION, &self.annual_production),
            (Self::PERFORMANCE_RATIO, &self.performance_ratio),
            (Self::WEATHER_DATASET, &self.weather_dataset),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.as_deref().map(|v| (key, v)))
        .collect()
    }

    /// Look up a field by its display key.
    pub fn get(&self, key: &str) -> Option<&str> {
        match key {
            Self::PROJECT_NAME => self.project_name.as_deref(),
            Self::PROJECT_ADDRESS => self.project_address.as_deref(),
            Self::ANNUAL_PRODUCTION => self.annual_production.as_deref(),
            Self::PERFORMANCE_RATIO => self.performance_ratio.as_deref(),
            Self::WEATHER_DATASET => self.weather_dataset.as_deref(),
            _ => None,
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    pub fn annual_production_mwh(&self) -> Option<Decimal> {
        self.annual_production.as_deref().and_then(parse_number)
    }

    pub fn performance_ratio_pct(&self) -> Option<Decimal> {
        self.performance_ratio.as_deref().and_then(parse_number)
    }
}

/// One row of the components table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentRecord {
    /// Raw label as matched, e.g. "Inverters", "Strings", "Module".
    pub kind: String,
    pub description: String,
    pub count: String,
    pub value: String,
    /// "kW" or "ft".
    pub unit: String,
}

impl ComponentRecord {
    pub fn count_value(&self) -> Option<u32> {
        parse_count(&self.count)
    }

    pub fn value_number(&self) -> Option<Decimal> {
        parse_number(&self.value)
    }
}

/// One entry of the system loss breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LossRecord {
    pub loss_type: String,
    pub loss_percent: String,
}

impl LossRecord {
    pub fn percent(&self) -> Option<Decimal> {
        parse_number(&self.loss_percent)
    }
}

/// One row of the monthly production table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthRecord {
    pub month: String,
    /// Global horizontal irradiance.
    pub ghi: String,
    /// Plane-of-array irradiance.
    pub poa: String,
    pub shaded: String,
    #[serde(rename = "nameplateKWh")]
    pub nameplate_kwh: String,
    #[serde(rename = "gridKWh")]
    pub grid_kwh: String,
}

impl MonthRecord {
    /// Calendar month number (1-12).
    pub fn month_number(&self) -> Option<u32> {
        self.month.parse::<Month>().ok().map(Month::number)
    }

    pub fn ghi(&self) -> Option<Decimal> {
        parse_number(&self.ghi)
    }

    pub fn poa(&self) -> Option<Decimal> {
        parse_number(&self.poa)
    }

    pub fn shaded(&self) -> Option<Decimal> {
        parse_number(&self.shaded)
    }

    pub fn nameplate_kwh(&self) -> Option<Decimal> {
        parse_number(&self.nameplate_kwh)
    }

    pub fn grid_kwh(&self) -> Option<Decimal> {
        parse_number(&self.grid_kwh)
    }
}

/// One field segment layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentRecord {
    pub module_tilt_deg: String,
    pub module_azimuth_deg: String,
    pub spacing_ft: String,
    /// Frame grid as "RxC".
    pub frame_size: String,
    pub frame_count: String,
    pub module_count: String,
    #[serde(rename = "powerKW")]
    pub power_kw: String,
}

impl SegmentRecord {
    pub fn tilt(&self) -> Option<u32> {
        parse_count(&self.module_tilt_deg)
    }

    pub fn azimuth(&self) -> Option<u32> {
        parse_count(&self.module_azimuth_deg)
    }

    pub fn spacing(&self) -> Option<Decimal> {
        parse_number(&self.spacing_ft)
    }

    /// Frame grid as `(rows, columns)`.
    pub fn frame_grid(&self) -> Option<(u32, u32)> {
        parse_frame_size(&self.frame_size)
    }

    pub fn frames(&self) -> Option<u32> {
        parse_count(&self.frame_count)
    }

    pub fn modules(&self) -> Option<u32> {
        parse_count(&self.module_count)
    }

    pub fn power_kw(&self) -> Option<Decimal> {
        parse_number(&self.power_kw)
    }
}
