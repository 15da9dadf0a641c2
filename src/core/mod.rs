pub mod browse;
pub mod cart;
pub mod catalog;
pub mod quantity;

pub use crate::domain::model::{CartLine, ItemRecord};
pub use crate::domain::ports::{CatalogSource, ConfigProvider};
