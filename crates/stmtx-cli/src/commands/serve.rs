//! Serve command - run the HTTP API.

use std::path::PathBuf;

use clap::Args;
use console::style;

/// Arguments for the serve command.
#[derive(Args)]
pub struct ServeArgs {
    /// Address to bind (overrides config)
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (overrides config)
    #[arg(long)]
    port: Option<u16>,

    /// Directory for temporary uploads (default: system temp dir)
    #[arg(long)]
    upload_dir: Option<PathBuf>,
}

pub async fn run(args: ServeArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let mut config = super::config::load(config_path)?;

    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if args.upload_dir.is_some() {
        config.server.upload_dir = args.upload_dir;
    }

    println!(
        "{} Listening on http://{}:{}",
        style("▶").green(),
        config.server.host,
        config.server.port
    );

    crate::server::serve(config).await
}
