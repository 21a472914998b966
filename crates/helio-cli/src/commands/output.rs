//! Rendering an extraction result as JSON, CSV, or plain text.

use helio_core::models::report::{ExtractionResult, ProjectInfo};
use helio_core::report::view::{ReportView, SectionBody, TableKind};

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Text => "txt",
        }
    }
}

/// Table selectable for CSV output.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum TableArg {
    Components,
    Losses,
    Monthly,
    Segments,
}

impl From<TableArg> for TableKind {
    fn from(arg: TableArg) -> Self {
        match arg {
            TableArg::Components => TableKind::Components,
            TableArg::Losses => TableKind::Losses,
            TableArg::Monthly => TableKind::MonthlyProduction,
            TableArg::Segments => TableKind::FieldSegments,
        }
    }
}

pub fn format_result(
    result: &ExtractionResult,
    format: OutputFormat,
    table: Option<TableArg>,
    pretty_json: bool,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json if pretty_json => Ok(serde_json::to_string_pretty(result)?),
        OutputFormat::Json => Ok(serde_json::to_string(result)?),
        OutputFormat::Csv => match table {
            Some(table) => format_table_csv(result, table.into()),
            None => format_project_csv(result),
        },
        OutputFormat::Text => Ok(format_text(result)),
    }
}

/// One header row and one data row of project information.
fn format_project_csv(result: &ExtractionResult) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    let info = &result.project_info;

    wtr.write_record([
        ProjectInfo::PROJECT_NAME,
        ProjectInfo::PROJECT_ADDRESS,
        ProjectInfo::ANNUAL_PRODUCTION,
        ProjectInfo::PERFORMANCE_RATIO,
        ProjectInfo::WEATHER_DATASET,
    ])?;
    wtr.write_record([
        info.project_name.as_deref().unwrap_or_default(),
        info.project_address.as_deref().unwrap_or_default(),
        info.annual_production.as_deref().unwrap_or_default(),
        info.performance_ratio.as_deref().unwrap_or_default(),
        info.weather_dataset.as_deref().unwrap_or_default(),
    ])?;

    Ok(String::from_utf8(wtr.into_inner()?)?)
}

/// The selected table; only the header row when the table is empty.
fn format_table_csv(result: &ExtractionResult, kind: TableKind) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(kind.columns())?;
    for row in kind.rows(result) {
        wtr.write_record(&row)?;
    }

    Ok(String::from_utf8(wtr.into_inner()?)?)
}

fn format_text(result: &ExtractionResult) -> String {
    let view = ReportView::from_result(result);
    let mut output = String::new();

    for section in &view.sections {
        output.push_str(&format!("{}:\n", section.title));
        match &section.body {
            SectionBody::KeyValues { entries } => {
                for (key, value) in entries {
                    output.push_str(&format!("  {}: {}\n", key, value));
                }
            }
            SectionBody::Listing { value_label, items } => {
                for item in items {
                    output.push_str(&format!(
                        "  {} (count {}, {}: {} {})\n",
                        item.description, item.count, value_label, item.value, item.unit
                    ));
                }
            }
            SectionBody::Table(table) => {
                output.push_str(&format!("  {}\n", table.columns.join(" | ")));
                for row in &table.rows {
                    output.push_str(&format!("  {}\n", row.join(" | ")));
                }
            }
        }
        output.push('\n');
    }

    output
}
