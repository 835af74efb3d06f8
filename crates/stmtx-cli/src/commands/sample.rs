//! Sample command - print canned figures for a platform.

use clap::Args;

use stmtx_core::statement::sample_report;
use stmtx_core::StatementExtractor;

use super::process::{format_report, resolve_platform, OutputFormat};

/// Arguments for the sample command.
#[derive(Args)]
pub struct SampleArgs {
    /// Marketplace platform code
    #[arg(short, long)]
    platform: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,
}

pub async fn run(args: SampleArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = super::config::load(config_path)?;
    let extractor = StatementExtractor::from_config(&config.extraction)?;
    let platform = resolve_platform(args.platform.as_deref(), &config);

    let report = sample_report(extractor.terms(), &platform);
    println!("{}", format_report(&report, args.format)?);

    Ok(())
}
