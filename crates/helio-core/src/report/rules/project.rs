//! Project metadata rules: name, address, production, ratio, weather.

use regex::Regex;
use tracing::trace;

use super::FieldExtractor;
use super::patterns::{
    ANNUAL_PRODUCTION, PERFORMANCE_RATIO, PROJECT_ADDRESS, PROJECT_NAME, WEATHER_DATASET,
};
use crate::models::report::ProjectInfo;

/// A scalar project field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectField {
    Name,
    Address,
    AnnualProduction,
    PerformanceRatio,
    WeatherDataset,
}

impl ProjectField {
    pub const ALL: [ProjectField; 5] = [
        ProjectField::Name,
        ProjectField::Address,
        ProjectField::AnnualProduction,
        ProjectField::PerformanceRatio,
        ProjectField::WeatherDataset,
    ];

    /// Key under which the value is shown.
    pub const fn key(self) -> &'static str {
        match self {
            ProjectField::Name => ProjectInfo::PROJECT_NAME,
            ProjectField::Address => ProjectInfo::PROJECT_ADDRESS,
            ProjectField::AnnualProduction => ProjectInfo::ANNUAL_PRODUCTION,
            ProjectField::PerformanceRatio => ProjectInfo::PERFORMANCE_RATIO,
            ProjectField::WeatherDataset => ProjectInfo::WEATHER_DATASET,
        }
    }

    pub const fn rule_name(self) -> &'static str {
        match self {
            ProjectField::Name => "project_name",
            ProjectField::Address => "project_address",
            ProjectField::AnnualProduction => "annual_production",
            ProjectField::PerformanceRatio => "performance_ratio",
            ProjectField::WeatherDataset => "weather_dataset",
        }
    }

    fn pattern(self) -> &'static Regex {
        match self {
            ProjectField::Name => &*PROJECT_NAME,
            ProjectField::Address => &*PROJECT_ADDRESS,
            ProjectField::AnnualProduction => &*ANNUAL_PRODUCTION,
            ProjectField::PerformanceRatio => &*PERFORMANCE_RATIO,
            ProjectField::WeatherDataset => &*WEATHER_DATASET,
        }
    }

    fn normalize(self, raw: &str) -> String {
        match self {
            // Multi-line addresses become one comma-separated line
            ProjectField::Address => raw.replace('\n', ", ").trim().to_string(),
            ProjectField::WeatherDataset => raw.replace('\n', " ").trim().to_string(),
            ProjectField::Name => raw.trim().to_string(),
            ProjectField::AnnualProduction | ProjectField::PerformanceRatio => raw.to_string(),
        }
    }

    fn assign(self, info: &mut ProjectInfo, value: String) {
        let slot = match self {
            ProjectField::Name => &mut info.project_name,
            ProjectField::Address => &mut info.project_address,
            ProjectField::AnnualProduction => &mut info.annual_production,
            ProjectField::PerformanceRatio => &mut info.performance_ratio,
            ProjectField::WeatherDataset => &mut info.weather_dataset,
        };
        *slot = Some(value);
    }
}

/// Extractor for one scalar project field.
pub struct ProjectFieldExtractor {
    field: ProjectField,
}

impl ProjectFieldExtractor {
    pub fn new(field: ProjectField) -> Self {
        Self { field }
    }

    pub fn field(&self) -> ProjectField {
        self.field
    }
}

impl FieldExtractor for ProjectFieldExtractor {
    type Output = String;

    fn name(&self) -> &'static str {
        self.field.rule_name()
    }

    fn extract(&self, text: &str) -> Option<Self::Output> {
        let caps = self.field.pattern().captures(text)?;
        let value = self.field.normalize(&caps[1]);
        trace!("{} -> {:?}", self.name(), value);
        Some(value)
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        self.field
            .pattern()
            .captures_iter(text)
            .map(|caps| self.field.normalize(&caps[1]))
            .collect()
    }
}

/// Extract every project field from report text.
pub fn extract_project_info(text: &str) -> ProjectInfo {
    collect_project_info(text, |_| true)
}

/// Extract the project fields accepted by `enabled`.
pub(crate) fn collect_project_info(
    text: &str,
    enabled: impl Fn(ProjectField) -> bool,
) -> ProjectInfo {
    let mut info = ProjectInfo::default();

    for field in ProjectField::ALL.into_iter().filter(|f| enabled(*f)) {
        if let Some(value) = ProjectFieldExtractor::new(field).extract(text) {
            field.assign(&mut info, value);
        }
    }

    info
}
