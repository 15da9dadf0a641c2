use crate::utils::error::{KioskError, Result};
use std::fmt::Display;
use thiserror::Error;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Why an order entry was refused. The `Display` text is shown to the user as is.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderFieldError {
    #[error("Item name is required.")]
    MissingItemName,

    #[error("Quantity must be a whole number.")]
    NotWholeNumber,

    #[error("Quantity must be greater than zero.")]
    NotPositive,

    #[error("Quantity must be no more than {max}.")]
    AboveMax { max: u32 },
}

/// Checks an order entry before it reaches the cart: the name must not be
/// blank and the quantity, in its text form, must be a plain digit string in
/// `1..=max_per_item`. Returns the parsed quantity.
pub fn validate_order_fields(
    item_name: &str,
    quantity: impl Display,
    max_per_item: u32,
) -> std::result::Result<u32, OrderFieldError> {
    if item_name.trim().is_empty() {
        return Err(OrderFieldError::MissingItemName);
    }

    // a digit string too long to parse is above any ceiling
    let q = parse_whole_number(quantity)?.ok_or(OrderFieldError::AboveMax {
        max: max_per_item,
    })?;

    if q == 0 {
        return Err(OrderFieldError::NotPositive);
    }
    if q > max_per_item {
        return Err(OrderFieldError::AboveMax { max: max_per_item });
    }
    Ok(q)
}

/// Parses text that must be a plain ASCII digit string (no sign, no point).
/// `Ok(None)` means the digits do not fit in a `u32`.
pub fn parse_whole_number(
    text: impl Display,
) -> std::result::Result<Option<u32>, OrderFieldError> {
    let text = text.to_string();
    let text = text.trim();
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(OrderFieldError::NotWholeNumber);
    }
    Ok(text.parse().ok())
}

pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

pub fn validate_log_level(field_name: &str, level: &str) -> Result<()> {
    if !LOG_LEVELS.contains(&level) {
        return Err(KioskError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: level.to_string(),
            reason: format!("Valid levels: {}", LOG_LEVELS.join(", ")),
        });
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(KioskError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(KioskError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(KioskError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(KioskError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}
