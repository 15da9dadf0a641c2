use crate::core::ConfigProvider;
use crate::core::cart::DEFAULT_MAX_PER_ITEM;
use crate::utils::error::{KioskError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_CATALOG_PATH: &str = "data/items.csv";
pub const MAX_PER_ITEM_LIMIT: u32 = 999;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub kiosk: KioskSection,
    pub logging: Option<LoggingSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KioskSection {
    pub name: Option<String>,
    pub catalog_path: Option<String>,
    pub max_per_item: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSection {
    pub level: Option<String>,
    pub json: Option<bool>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// Replaces `${VAR}` with the environment value. Unset variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| KioskError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn kiosk_name(&self) -> &str {
        self.kiosk.name.as_deref().unwrap_or("FoodBank Kiosk")
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }

    pub fn log_json(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn catalog_path(&self) -> &str {
        self.kiosk
            .catalog_path
            .as_deref()
            .unwrap_or(DEFAULT_CATALOG_PATH)
    }

    fn max_per_item(&self) -> u32 {
        self.kiosk.max_per_item.unwrap_or(DEFAULT_MAX_PER_ITEM)
    }
}
