use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::Item;

/// On-disk form of a catalog entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogEntry {
    pub name: String,
    pub sell_in: i32,
    pub quality: i32,
}

/// Load a catalog from a JSON file: an array of `{name, sell_in, quality}`
/// entries. Every entry goes through `Item::new` validation.
pub fn load_catalog(path: &Path) -> Result<Vec<Item>> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file {:?}", path))?;

    let entries: Vec<CatalogEntry> = serde_json::from_str(&data)
        .with_context(|| format!("Failed to parse catalog file {:?}", path))?;

    entries
        .into_iter()
        .enumerate()
        .map(|(i, e)| {
            Item::new(e.name, e.sell_in, e.quality)
                .with_context(|| format!("Invalid catalog entry at index {}", i))
        })
        .collect()
}
