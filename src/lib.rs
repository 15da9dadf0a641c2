pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;

pub use crate::app::controller::{Feedback, Intent, KioskController, OrderReceipt, View};
pub use crate::config::KioskSettings;
pub use crate::core::browse::{CatalogQuery, SortOrder};
pub use crate::core::cart::{Cart, CartChange, CartRejection, ChangeKind, DEFAULT_MAX_PER_ITEM};
pub use crate::core::catalog::{CsvCatalog, InMemoryCatalog};
pub use crate::domain::model::{CartLine, ItemRecord};
pub use crate::utils::error::{KioskError, Result};
pub use crate::utils::validation::{validate_order_fields, OrderFieldError};
