//! Batch processing command for multiple order documents.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, error, warn};

use frex_core::models::config::FrexConfig;
use frex_core::order::{AccessLogisticParser, ExtractionResult, OrderExtractor};

use super::process::{OutputFormat, file_name, format_order, load_config, read_lines};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern
    #[arg(required = true)]
    input: String,

    /// Output directory
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format for each file
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Also generate a summary CSV
    #[arg(long)]
    summary: bool,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,
}

/// Result of processing a single file.
struct ProcessResult {
    path: PathBuf,
    extraction: Option<ExtractionResult>,
    error: Option<String>,
    processing_time_ms: u64,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| {
            let ext = p.extension().and_then(|e| e.to_str()).unwrap_or("");
            matches!(ext.to_lowercase().as_str(), "pdf" | "txt" | "text")
        })
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    let progress = ProgressBar::new(files.len() as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")?
            .progress_chars("=>-"),
    );

    let parser = AccessLogisticParser::from_config(&config.extraction);
    let mut results = Vec::with_capacity(files.len());

    for path in files {
        let file_start = Instant::now();
        let result = process_single_file(&path, &parser, &config).await;
        let processing_time_ms = file_start.elapsed().as_millis() as u64;

        match result {
            Ok(extraction) => results.push(ProcessResult {
                path,
                extraction: Some(extraction),
                error: None,
                processing_time_ms,
            }),
            Err(e) => {
                let error_msg = e.to_string();
                if !args.continue_on_error {
                    error!("Failed to process {}: {}", path.display(), error_msg);
                    progress.abandon();
                    anyhow::bail!("Processing failed: {}", error_msg);
                }
                warn!("Failed to process {}: {}", path.display(), error_msg);
                results.push(ProcessResult {
                    path,
                    extraction: None,
                    error: Some(error_msg),
                    processing_time_ms,
                });
            }
        }

        progress.inc(1);
    }

    progress.finish_with_message("Complete");

    if let Some(output_dir) = &args.output_dir {
        for result in &results {
            let Some(extraction) = &result.extraction else {
                continue;
            };
            let stem = result
                .path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("order");
            let output_path = output_dir.join(format!("{}.{}", stem, args.format.extension()));
            fs::write(&output_path, format_order(&extraction.order, args.format)?)?;
            debug!("Wrote {}", output_path.display());
        }
    } else {
        for result in results.iter().filter_map(|r| r.extraction.as_ref()) {
            println!("{}", format_order(&result.order, args.format)?);
        }
    }

    if args.summary {
        let summary_path = args
            .output_dir
            .as_ref()
            .map(|d| d.join("summary.csv"))
            .unwrap_or_else(|| PathBuf::from("summary.csv"));

        write_summary(&summary_path, &results)?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    let failed = results.iter().filter(|r| r.error.is_some()).count();

    println!();
    println!(
        "{} Processed {} files in {:.2}s",
        style("✓").green(),
        results.len(),
        start.elapsed().as_secs_f64()
    );
    println!("  Successful: {}", style(results.len() - failed).green());
    if failed > 0 {
        println!("  Failed: {}", style(failed).red());
        for result in results.iter().filter(|r| r.error.is_some()) {
            println!(
                "    - {}: {}",
                result.path.display(),
                result.error.as_deref().unwrap_or("")
            );
        }
    }

    Ok(())
}

async fn process_single_file(
    path: &Path,
    parser: &AccessLogisticParser,
    config: &FrexConfig,
) -> anyhow::Result<ExtractionResult> {
    let lines = read_lines(path, config).await?;
    parser.ensure_format(&lines)?;

    let attachment = file_name(path);
    let result = parser.extract(&lines, attachment.as_deref());
    for warning in &result.warnings {
        warn!("{}: {}", path.display(), warning);
    }

    Ok(result)
}

fn write_summary(path: &Path, results: &[ProcessResult]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "filename",
        "status",
        "order_reference",
        "transport_numbers",
        "loading_count",
        "unloading_count",
        "freight_price",
        "currency",
        "warnings",
        "processing_time_ms",
        "error",
    ])?;

    for result in results {
        let filename = result
            .path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("");

        if let Some(extraction) = &result.extraction {
            let order = &extraction.order;
            wtr.write_record([
                filename,
                "success",
                order.order_reference.as_deref().unwrap_or(""),
                &order.transport_numbers,
                &order.loading_locations.len().to_string(),
                &order.destination_locations.len().to_string(),
                &order.freight_price.map(|p| p.to_string()).unwrap_or_default(),
                &order.freight_currency,
                &extraction.warnings.len().to_string(),
                &result.processing_time_ms.to_string(),
                "",
            ])?;
        } else {
            wtr.write_record([
                filename,
                "error",
                "",
                "",
                "",
                "",
                "",
                "",
                "",
                &result.processing_time_ms.to_string(),
                result.error.as_deref().unwrap_or(""),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}
