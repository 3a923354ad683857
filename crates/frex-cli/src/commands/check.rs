//! Check command - test whether a document matches the order template.

use std::path::PathBuf;

use clap::Args;
use console::style;

use frex_core::order::{AccessLogisticParser, OrderExtractor};

use super::process::{load_config, read_lines};

/// Arguments for the check command.
#[derive(Args)]
pub struct CheckArgs {
    /// Input file (PDF or flattened text)
    #[arg(required = true)]
    input: PathBuf,
}

pub async fn run(args: CheckArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let lines = read_lines(&args.input, &config).await?;
    let parser = AccessLogisticParser::from_config(&config.extraction);

    if !parser.is_format(&lines) {
        anyhow::bail!(
            "{} is not an {} transport order",
            args.input.display(),
            parser.name()
        );
    }

    println!(
        "{} {} is an {} transport order",
        style("✓").green(),
        args.input.display(),
        parser.name()
    );

    Ok(())
}
