use crate::domain::model::ItemRecord;
use crate::domain::ports::CatalogSource;
use crate::utils::error::{KioskError, Result};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Catalog read from a CSV file with a `name,category,tag` header.
/// The file is re-read on every [`CatalogSource::load`].
#[derive(Debug, Clone)]
pub struct CsvCatalog {
    path: PathBuf,
}

impl CsvCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Like `load`, but reports why the file could not be read.
    pub fn try_load(&self) -> Result<Vec<ItemRecord>> {
        let file = File::open(&self.path)?;
        parse_items(file)
    }
}

impl CatalogSource for CsvCatalog {
    fn load(&self) -> Vec<ItemRecord> {
        match self.try_load() {
            Ok(items) => {
                tracing::debug!("Loaded {} items from {}", items.len(), self.path.display());
                items
            }
            Err(KioskError::IoError(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::error!("items.csv not found at path: {}", self.path.display());
                Vec::new()
            }
            Err(e) => {
                tracing::error!("Failed to load {}: {}", self.path.display(), e);
                tracing::warn!("Suggestion: {}", e.recovery_suggestion());
                Vec::new()
            }
        }
    }
}

/// Parses catalog rows. Short rows and missing columns fall back to empty
/// strings; unknown columns are ignored.
pub fn parse_items<R: Read>(reader: R) -> Result<Vec<ItemRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut items = Vec::new();
    for row in reader.deserialize::<ItemRecord>() {
        items.push(row?);
    }
    Ok(items)
}

/// Fixed catalog held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    items: Vec<ItemRecord>,
}

impl InMemoryCatalog {
    pub fn new(items: Vec<ItemRecord>) -> Self {
        Self { items }
    }
}

impl CatalogSource for InMemoryCatalog {
    fn load(&self) -> Vec<ItemRecord> {
        self.items.clone()
    }
}
