#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::cart::DEFAULT_MAX_PER_ITEM;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use toml_config::{TomlConfig, DEFAULT_CATALOG_PATH, MAX_PER_ITEM_LIMIT};

/// Settings after merging the config file with command-line overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KioskSettings {
    pub name: String,
    pub catalog_path: String,
    pub max_per_item: u32,
    pub log_level: Option<String>,
    pub log_json: bool,
}

impl Default for KioskSettings {
    fn default() -> Self {
        Self {
            name: "FoodBank Kiosk".to_string(),
            catalog_path: DEFAULT_CATALOG_PATH.to_string(),
            max_per_item: DEFAULT_MAX_PER_ITEM,
            log_level: None,
            log_json: false,
        }
    }
}

impl KioskSettings {
    pub fn from_toml(config: &TomlConfig) -> Self {
        Self {
            name: config.kiosk_name().to_string(),
            catalog_path: config.catalog_path().to_string(),
            max_per_item: config.max_per_item(),
            log_level: config.log_level().map(str::to_string),
            log_json: config.log_json(),
        }
    }

    /// Flags given on the command line win over the file.
    pub fn with_overrides(mut self, catalog_path: Option<&str>, max_per_item: Option<u32>) -> Self {
        if let Some(path) = catalog_path {
            self.catalog_path = path.to_string();
        }
        if let Some(max) = max_per_item {
            self.max_per_item = max;
        }
        self
    }
}

impl ConfigProvider for KioskSettings {
    fn catalog_path(&self) -> &str {
        &self.catalog_path
    }

    fn max_per_item(&self) -> u32 {
        self.max_per_item
    }
}

impl Validate for KioskSettings {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("kiosk.name", &self.name)?;
        validation::validate_path("kiosk.catalog_path", &self.catalog_path)?;
        validation::validate_range("kiosk.max_per_item", self.max_per_item, 1, MAX_PER_ITEM_LIMIT)?;
        if let Some(level) = &self.log_level {
            validation::validate_log_level("logging.level", level)?;
        }
        Ok(())
    }
}
