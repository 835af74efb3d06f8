//! Process command - extract figures from a single statement file.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use stmtx_core::models::config::StmtxConfig;
use stmtx_core::{DocumentKind, ExtractionStatus, Platform, StatementExtractor, StatementReport};

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input statement (PDF, XLSX or XLS)
    #[arg(required = true)]
    input: PathBuf,

    /// Marketplace platform code (uk, de, es, fr, nl, it, usa, ebay, etsy, bandq)
    #[arg(short, long)]
    platform: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,
}

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
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Text => "txt",
        }
    }
}

pub async fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = super::config::load(config_path)?;
    let extractor = StatementExtractor::from_config(&config.extraction)?;
    let platform = resolve_platform(args.platform.as_deref(), &config);

    // Check input file exists
    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let kind = DocumentKind::from_path(&args.input).ok_or_else(|| {
        anyhow::anyhow!(
            "Unsupported file format: {} (expected .pdf, .xlsx or .xls)",
            args.input.display()
        )
    })?;

    info!("Processing file: {}", args.input.display());

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")?,
    );
    pb.set_message(format!("Extracting {} statement...", kind.name()));

    let extraction = extractor.extract_file(&args.input, kind, &platform)?;
    pb.finish_and_clear();

    if let ExtractionStatus::NotImplemented { rows } = extraction.status {
        eprintln!(
            "{} Spreadsheet figures are not mapped yet; {} rows read, reporting zeros.",
            style("ℹ").blue(),
            rows
        );
    }

    let report = extractor.assemble(&platform, extraction);
    let output = format_report(&report, args.format)?;

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

/// Platform from the command line, or the configured default.
pub fn resolve_platform(arg: Option<&str>, config: &StmtxConfig) -> Platform {
    Platform::new(arg.unwrap_or(&config.extraction.default_platform))
}

pub fn format_report(report: &StatementReport, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Csv => format_csv(report),
        OutputFormat::Text => Ok(format_text(report)),
    }
}

fn format_csv(report: &StatementReport) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(["platform", "currency", "income", "expenses", "tax"])?;
    wtr.write_record([
        report.platform.as_str(),
        &report.currency,
        &report.financial_data.income.to_string(),
        &report.financial_data.expenses.to_string(),
        &report.tax_data.amount().to_string(),
    ])?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(report: &StatementReport) -> String {
    let mut output = String::new();

    output.push_str(&format!("Platform: {}\n", report.platform));
    output.push_str(&format!("Currency: {}\n", report.currency));
    output.push('\n');
    output.push_str(&format!(
        "  Income:   {} {}\n",
        report.financial_data.income, report.currency
    ));
    output.push_str(&format!(
        "  Expenses: {} {}\n",
        report.financial_data.expenses, report.currency
    ));
    output.push_str(&format!(
        "  Tax:      {} {}\n",
        report.tax_data.amount(),
        report.currency
    ));

    output
}
