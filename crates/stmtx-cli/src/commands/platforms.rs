//! Platforms command - list known platform codes.

use console::style;

use stmtx_core::StatementExtractor;

pub async fn run(config_path: Option<&str>) -> anyhow::Result<()> {
    let config = super::config::load(config_path)?;
    let extractor = StatementExtractor::from_config(&config.extraction)?;
    let table = extractor.terms();

    println!("{}", style("Known platforms:").bold());
    println!();

    for platform in table.platforms() {
        let terms = if table.has_locale(platform) {
            style("own terms".to_string()).green()
        } else {
            style(format!("{} terms", table.fallback_locale())).dim()
        };

        println!(
            "  {:<8} {:<5} {}",
            platform,
            table.currency_of(platform),
            terms
        );
    }

    Ok(())
}
