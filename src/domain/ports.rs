use crate::domain::model::ItemRecord;

/// Where the catalog comes from. Implementations absorb their own read
/// failures and hand back an empty catalog instead.
pub trait CatalogSource {
    fn load(&self) -> Vec<ItemRecord>;
}

pub trait ConfigProvider {
    fn catalog_path(&self) -> &str;
    fn max_per_item(&self) -> u32;
}
