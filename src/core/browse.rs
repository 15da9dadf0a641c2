//! Search, filter and sort over catalog records.

use crate::domain::model::ItemRecord;
use std::cmp::Reverse;
use std::str::FromStr;

pub const CATEGORIES: &[&str] = &[
    "Fruit",
    "Bakery",
    "Pantry",
    "Dairy",
    "Vegetables",
    "Meat",
    "Prepared Meals",
    "Beverages",
    "Noodle",
    "Dessert",
    "Seafood",
];

pub const DIETARY_TAGS: &[&str] = &["Vegetarian", "Vegan", "Halal"];

pub const NO_ITEMS_FOUND: &str = "No items found.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    AToZ,
    ZToA,
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "az" | "a-z" | "asc" => Ok(SortOrder::AToZ),
            "za" | "z-a" | "desc" => Ok(SortOrder::ZToA),
            other => Err(format!("Unknown sort order '{}'. Use az or za.", other)),
        }
    }
}

/// `None` for `category` or `dietary` means "All".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogQuery {
    pub keyword: String,
    pub category: Option<String>,
    pub dietary: Option<String>,
    pub sort: SortOrder,
}

impl CatalogQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = keyword.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn dietary(mut self, dietary: impl Into<String>) -> Self {
        self.dietary = Some(dietary.into());
        self
    }

    pub fn sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    /// Keyword hits either the name or the category, case-insensitively.
    /// Category matches exactly; the dietary tag must be present and match
    /// ignoring case.
    pub fn matches(&self, item: &ItemRecord) -> bool {
        let keyword = self.keyword.trim().to_lowercase();
        let keyword_hit = item.name.to_lowercase().contains(&keyword)
            || item.category.to_lowercase().contains(&keyword);

        let category_hit = self
            .category
            .as_deref()
            .map_or(true, |category| item.category == category);

        let dietary_hit = self.dietary.as_deref().map_or(true, |diet| {
            item.has_tag() && item.tag.to_lowercase() == diet.to_lowercase()
        });

        keyword_hit && category_hit && dietary_hit
    }

    pub fn apply(&self, items: &[ItemRecord]) -> Vec<ItemRecord> {
        let mut filtered: Vec<ItemRecord> = items
            .iter()
            .filter(|item| self.matches(item))
            .cloned()
            .collect();

        // both orders are stable, so equal names keep catalog order
        match self.sort {
            SortOrder::AToZ => filtered.sort_by_cached_key(|item| item.name.to_lowercase()),
            SortOrder::ZToA => {
                filtered.sort_by_cached_key(|item| Reverse(item.name.to_lowercase()))
            }
        }
        filtered
    }
}
