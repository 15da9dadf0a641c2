use crate::config::toml_config::TomlConfig;
use crate::config::KioskSettings;
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "fb-kiosk")]
#[command(about = "Food bank ordering kiosk: browse items, fill a cart, submit an order")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// CSV catalog with name,category,tag columns (default: data/items.csv)
    #[arg(long)]
    pub catalog: Option<String>,

    /// Highest quantity allowed per item (default: 10)
    #[arg(long)]
    pub max_per_item: Option<u32>,

    /// Submit without asking for confirmation
    #[arg(short, long)]
    pub yes: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Loads the config file when one was given, then applies the flags.
    pub fn resolve(&self) -> Result<KioskSettings> {
        let base = match &self.config {
            Some(path) => KioskSettings::from_toml(&TomlConfig::from_file(path)?),
            None => KioskSettings::default(),
        };
        Ok(base.with_overrides(self.catalog.as_deref(), self.max_per_item))
    }
}
