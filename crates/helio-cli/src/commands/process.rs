//! Process command - extract data from a single report.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use helio_core::report::{HelioscopeParser, ReportParser};

use super::output::{OutputFormat, TableArg, format_result};
use super::{load_config, read_report_text};

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input file (PDF report or flattened .txt)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Table to write when the format is CSV (default: project information)
    #[arg(short, long, value_enum)]
    table: Option<TableArg>,

    /// Print the flattened text instead of extracted fields
    #[arg(long)]
    raw_text: bool,
}

pub async fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Processing file: {}", args.input.display());

    let pb = ProgressBar::new(100);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {msg}")?
            .progress_chars("##-"),
    );

    pb.set_message("Reading text...");
    pb.set_position(10);
    let text = match read_report_text(&args.input, &config) {
        Ok(text) => text,
        Err(e) => {
            pb.abandon_with_message("Failed");
            return Err(e);
        }
    };

    let output = if args.raw_text {
        text
    } else {
        pb.set_message("Extracting report fields...");
        pb.set_position(60);

        let result = HelioscopeParser::from_config(&config.extraction).parse(&text);
        if result.is_empty() {
            info!("No report fields found in {}", args.input.display());
        }

        format_result(&result, args.format, args.table, config.output.pretty_json)?
    };

    pb.set_position(100);
    pb.finish_with_message("Done");

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}
