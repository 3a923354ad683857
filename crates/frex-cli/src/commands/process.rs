//! Process command - extract an order from a single document.

use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{debug, info, warn};

use frex_core::models::config::FrexConfig;
use frex_core::models::order::OrderRecord;
use frex_core::order::{AccessLogisticParser, JsonOrderSink, OrderExtractor, OrderSink};
use frex_core::pdf::{LineSource, PdfLineSource, TextLineSource};

use super::config::default_config_path;

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input file (PDF or flattened text)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Attachment name recorded on the order (default: input file name)
    #[arg(short, long)]
    name: Option<String>,

    /// Extract even if the document does not match the template
    #[arg(long)]
    force: bool,
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
    let config = load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Processing file: {}", args.input.display());

    let lines = read_lines(&args.input, &config).await?;
    let parser = AccessLogisticParser::from_config(&config.extraction);

    if !args.force {
        parser.ensure_format(&lines)?;
    }

    let attachment = args.name.clone().or_else(|| file_name(&args.input));
    let result = parser.extract(&lines, attachment.as_deref());

    for warning in &result.warnings {
        warn!("{}", warning);
    }

    let output = format_order(&result.order, args.format)?;

    if let Some(output_path) = &args.output {
        tokio::fs::write(output_path, &output).await?;
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

/// Load the config from an explicit path, the default location, or defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<FrexConfig> {
    if let Some(path) = config_path {
        return Ok(FrexConfig::from_file(Path::new(path))?);
    }

    let default_path = default_config_path();
    if default_path.exists() {
        debug!("Using config from {}", default_path.display());
        return Ok(FrexConfig::from_file(&default_path)?);
    }

    Ok(FrexConfig::default())
}

/// Turn a PDF or text dump into document lines.
pub async fn read_lines(path: &Path, config: &FrexConfig) -> anyhow::Result<Vec<String>> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    let data = tokio::fs::read(path).await?;

    let lines = match extension.as_str() {
        "pdf" => PdfLineSource::new(config.pdf.clone()).lines(&data)?,
        "txt" | "text" => TextLineSource::new(config.pdf.clone()).lines(&data)?,
        _ => anyhow::bail!("Unsupported file format: {}", extension),
    };

    debug!("Read {} lines from {}", lines.len(), path.display());
    Ok(lines)
}

pub fn file_name(path: &Path) -> Option<String> {
    path.file_name().and_then(|s| s.to_str()).map(str::to_string)
}

pub fn format_order(order: &OrderRecord, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => {
            let value = JsonOrderSink.create_order(order.clone())?;
            Ok(serde_json::to_string_pretty(&value)?)
        }
        OutputFormat::Csv => format_csv(order),
        OutputFormat::Text => Ok(format_text(order)),
    }
}

fn format_csv(order: &OrderRecord) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record([
        "order_reference",
        "transport_numbers",
        "loading",
        "unloading",
        "first_pickup",
        "cargo",
        "package_count",
        "weight",
        "freight_price",
        "currency",
    ])?;

    let cargo = order.cargos.first();
    wtr.write_record([
        order.order_reference.clone().unwrap_or_default(),
        order.transport_numbers.clone(),
        join_locations(&order.loading_locations),
        join_locations(&order.destination_locations),
        order
            .loading_locations
            .first()
            .and_then(|l| l.time)
            .map(|t| t.datetime_from.to_rfc3339())
            .unwrap_or_default(),
        cargo.and_then(|c| c.title.clone()).unwrap_or_default(),
        cargo.map(|c| c.package_count.to_string()).unwrap_or_default(),
        cargo
            .and_then(|c| c.weight)
            .map(|w| w.to_string())
            .unwrap_or_default(),
        order.freight_price.map(|p| p.to_string()).unwrap_or_default(),
        order.freight_currency.clone(),
    ])?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn join_locations(locations: &[frex_core::Location]) -> String {
    locations
        .iter()
        .map(|l| l.company_address.format())
        .collect::<Vec<_>>()
        .join(" | ")
}

pub fn format_text(order: &OrderRecord) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Order: {}\n",
        order.order_reference.as_deref().unwrap_or("-")
    ));
    output.push_str(&format!("Customer: {}\n", order.customer.details.company));
    if let Some(contact) = &order.customer.details.contact_person {
        output.push_str(&format!("  Contact: {}\n", contact));
    }
    if !order.transport_numbers.is_empty() {
        output.push_str(&format!("Vehicle: {}\n", order.transport_numbers));
    }
    output.push('\n');

    output.push_str("Loading:\n");
    for location in &order.loading_locations {
        push_location(&mut output, location);
    }
    output.push('\n');

    output.push_str("Unloading:\n");
    for location in &order.destination_locations {
        push_location(&mut output, location);
    }
    output.push('\n');

    output.push_str("Cargo:\n");
    for cargo in &order.cargos {
        output.push_str(&format!(
            "  {} x {} {}\n",
            cargo.package_count,
            cargo.package_type.as_deref().unwrap_or("-"),
            cargo.title.as_deref().unwrap_or("")
        ));
        if let Some(weight) = cargo.weight {
            output.push_str(&format!("    Weight: {} kg\n", weight));
        }
        if let Some(ldm) = cargo.ldm {
            output.push_str(&format!("    LDM: {}\n", ldm));
        }
        if !cargo.number.is_empty() {
            output.push_str(&format!("    Ref: {}\n", cargo.number));
        }
    }

    if let Some(price) = order.freight_price {
        output.push_str(&format!("\nFreight: {} {}\n", price, order.freight_currency));
    }

    output
}

fn push_location(output: &mut String, location: &frex_core::Location) {
    output.push_str(&format!("  {}\n", location.company_address.format()));
    if let Some(time) = location.time {
        match time.datetime_to {
            Some(to) => output.push_str(&format!("    {} - {}\n", time.datetime_from, to)),
            None => output.push_str(&format!("    {}\n", time.datetime_from)),
        }
    }
}
