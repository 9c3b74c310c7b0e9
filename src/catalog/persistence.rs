use std::fs;
use std::path::Path;

use crate::catalog::Catalog;
use crate::error::Result;
use crate::models::NamedIngredient;

/// Load a catalog from a JSON array of named ingredients.
///
/// Duplicate names follow [`Catalog::insert`]: last value wins.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog> {
    let content = fs::read_to_string(path)?;
    let entries: Vec<NamedIngredient> = serde_json::from_str(&content)?;

    Catalog::from_entries(entries.into_iter().map(|e| (e.name, e.ingredient)))
}

/// Save a catalog to a JSON file in the format read by [`load_catalog`].
pub fn save_catalog<P: AsRef<Path>>(path: P, catalog: &Catalog) -> Result<()> {
    let json = serde_json::to_string_pretty(&catalog.to_entries())?;
    fs::write(path, json)?;
    Ok(())
}
