use serde::{Deserialize, Serialize};

/// One row of the catalog. Every field is always present; absent columns or
/// cells load as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemRecord {
    pub name: String,
    pub category: String,
    /// Optional dietary label such as "Vegan".
    pub tag: String,
}

impl ItemRecord {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        tag: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            tag: tag.into(),
        }
    }

    pub fn has_tag(&self) -> bool {
        !self.tag.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub item_name: String,
    pub quantity: u32,
}

impl CartLine {
    pub fn new(item_name: impl Into<String>, quantity: u32) -> Self {
        Self {
            item_name: item_name.into(),
            quantity,
        }
    }
}
