use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

mod css;
mod host;

/// Expands a declarative gradient theme into CSS utility classes.
#[derive(Parser, Debug)]
#[command(name = "gradweave", version)]
struct Cli {
    /// JSON config with optional `theme` and `variants` objects.
    config: PathBuf,

    /// Write the stylesheet here instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Indented output, one declaration per line.
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let raw = std::fs::read_to_string(&cli.config)
        .with_context(|| format!("reading config {}", cli.config.display()))?;
    let config: serde_json::Value = serde_json::from_str(&raw)
        .with_context(|| format!("parsing config {}", cli.config.display()))?;

    let mut host = host::JsonHost::from_config(&config)?;
    gradweave_core::add_gradient_utilities(&mut host);

    let screens = host.screens();
    let stylesheet = css::render(&host.families, &screens, cli.pretty);
    log::debug!("rendered {} bytes of css", stylesheet.len());

    match &cli.output {
        Some(path) => std::fs::write(path, &stylesheet)
            .with_context(|| format!("writing {}", path.display()))?,
        None => print!("{stylesheet}"),
    }
    Ok(())
}

/// `RUST_LOG`-compatible logger setup; defaults to warnings so the
/// stylesheet on stdout stays clean.
fn init_logging() {
    let mut builder = env_logger::Builder::new();
    if let Ok(filter) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filter);
    } else {
        builder.filter_level(log::LevelFilter::Warn);
    }
    builder.init();
}
