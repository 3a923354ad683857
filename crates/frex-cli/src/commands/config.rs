//! Config command - manage configuration.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};
use console::style;
use serde_json::Value;

use frex_core::models::config::FrexConfig;
use frex_core::models::order::PackageType;

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Initialize a new configuration file
    Init {
        /// Overwrite existing file
        #[arg(long)]
        force: bool,
    },

    /// Get a specific configuration value
    Get {
        /// Configuration key (e.g., "extraction.freight_currency")
        key: String,
    },

    /// Set a configuration value
    Set {
        /// Configuration key
        key: String,
        /// New value (JSON, or a bare string)
        value: String,
    },

    /// Map a document unit label to a package type
    MapUnit {
        /// Unit label as printed in the document (e.g., "Kisten")
        label: String,
        /// Package type
        #[arg(value_enum)]
        package_type: UnitKind,
    },

    /// Show configuration file path
    Path,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum UnitKind {
    PalletOther,
    Carton,
    Other,
}

impl From<UnitKind> for PackageType {
    fn from(kind: UnitKind) -> Self {
        match kind {
            UnitKind::PalletOther => PackageType::PalletOther,
            UnitKind::Carton => PackageType::Carton,
            UnitKind::Other => PackageType::Other,
        }
    }
}

pub async fn run(args: ConfigArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let path = config_path
        .map(PathBuf::from)
        .unwrap_or_else(default_config_path);

    match args.command {
        ConfigCommand::Show => show_config(&path),
        ConfigCommand::Init { force } => init_config(&path, force),
        ConfigCommand::Get { key } => get_config(&path, &key),
        ConfigCommand::Set { key, value } => set_config(&path, &key, &value),
        ConfigCommand::MapUnit {
            label,
            package_type,
        } => map_unit(&path, &label, package_type.into()),
        ConfigCommand::Path => show_path(&path),
    }
}

/// Location of the per-user configuration file.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("frex")
        .join("config.json")
}

fn load_or_default(path: &Path) -> anyhow::Result<FrexConfig> {
    if path.exists() {
        Ok(FrexConfig::from_file(path)?)
    } else {
        Ok(FrexConfig::default())
    }
}

fn save(path: &Path, config: &FrexConfig) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    config.save(path)?;
    Ok(())
}

fn show_config(path: &Path) -> anyhow::Result<()> {
    if !path.exists() {
        eprintln!(
            "{} No config file found, showing defaults.",
            style("ℹ").blue()
        );
    }

    let config = load_or_default(path)?;
    println!("{}", serde_json::to_string_pretty(&config)?);

    Ok(())
}

fn init_config(path: &Path, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "Config file already exists at {}. Use --force to overwrite.",
            path.display()
        );
    }

    save(path, &FrexConfig::default())?;

    println!(
        "{} Created configuration file at {}",
        style("✓").green(),
        path.display()
    );

    Ok(())
}

fn get_config(path: &Path, key: &str) -> anyhow::Result<()> {
    let json = serde_json::to_value(load_or_default(path)?)?;

    let value = key
        .split('.')
        .try_fold(&json, |current, part| current.get(part))
        .ok_or_else(|| anyhow::anyhow!("Configuration key not found: {}", key))?;

    println!("{}", serde_json::to_string_pretty(value)?);

    Ok(())
}

fn set_config(path: &Path, key: &str, value: &str) -> anyhow::Result<()> {
    let parsed: Value =
        serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));

    let mut json = serde_json::to_value(load_or_default(path)?)?;

    let (parent, last) = match key.rsplit_once('.') {
        Some((parent, last)) => (Some(parent), last),
        None => (None, key),
    };

    let mut current = &mut json;
    for part in parent.into_iter().flat_map(|p| p.split('.')) {
        current = current
            .get_mut(part)
            .ok_or_else(|| anyhow::anyhow!("Configuration path not found: {}", key))?;
    }

    match current.as_object_mut() {
        Some(obj) => {
            obj.insert(last.to_string(), parsed.clone());
        }
        None => anyhow::bail!("Cannot set value at non-object path"),
    }

    let config: FrexConfig = serde_json::from_value(json)
        .map_err(|e| anyhow::anyhow!("Invalid value for {}: {}", key, e))?;
    save(path, &config)?;

    println!(
        "{} Set {} = {}",
        style("✓").green(),
        key,
        serde_json::to_string(&parsed)?
    );

    Ok(())
}

fn map_unit(path: &Path, label: &str, package_type: PackageType) -> anyhow::Result<()> {
    let mut config = load_or_default(path)?;
    config
        .extraction
        .package_types
        .insert(label.trim().to_string(), package_type);
    save(path, &config)?;

    println!(
        "{} Unit \"{}\" maps to {}",
        style("✓").green(),
        label.trim(),
        package_type.as_key()
    );

    Ok(())
}

fn show_path(path: &Path) -> anyhow::Result<()> {
    println!("Configuration file: {}", path.display());

    if path.exists() {
        println!("Status: {}", style("exists").green());
    } else {
        println!("Status: {}", style("not created").yellow());
        println!();
        println!("Run 'frex config init' to create a configuration file.");
    }

    Ok(())
}
