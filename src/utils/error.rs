use thiserror::Error;

#[derive(Error, Debug)]
pub enum KioskError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Data,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl KioskError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            KioskError::IoError(_) => ErrorCategory::Io,
            KioskError::CsvError(_) => ErrorCategory::Data,
            KioskError::TomlError(_)
            | KioskError::ConfigError { .. }
            | KioskError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // a broken catalog only empties the item list
            ErrorCategory::Data => ErrorSeverity::Medium,
            ErrorCategory::Io => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            KioskError::IoError(e) if e.kind() == std::io::ErrorKind::NotFound => {
                "A required file could not be found.".to_string()
            }
            KioskError::IoError(_) => "A file could not be read.".to_string(),
            KioskError::CsvError(_) => "The item list could not be read.".to_string(),
            KioskError::TomlError(_) => "The configuration file is not valid TOML.".to_string(),
            KioskError::ConfigError { message } => format!("Configuration problem: {}", message),
            KioskError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            KioskError::IoError(_) => "Check that the path exists and is readable",
            KioskError::CsvError(_) => {
                "Check that the catalog has a header row with name,category,tag columns"
            }
            KioskError::TomlError(_) => "Fix the syntax error reported in the configuration file",
            KioskError::ConfigError { .. } | KioskError::InvalidConfigValueError { .. } => {
                "Correct the value in the configuration file or on the command line"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, KioskError>;
