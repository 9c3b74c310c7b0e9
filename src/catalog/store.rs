use std::collections::HashMap;

use crate::error::{Result, StatsError};
use crate::models::{Ingredient, NamedIngredient};

/// Read-only ingredient lookup keyed by name, preserving insertion order.
///
/// The key order is what the combination generator enumerates over, so it
/// must stay stable for the lifetime of the catalog.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    names: Vec<String>,
    ingredients: Vec<Ingredient>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from `(name, ingredient)` pairs.
    ///
    /// Duplicate names: last value wins, first position is kept.
    pub fn from_entries<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, Ingredient)>,
        S: Into<String>,
    {
        let mut catalog = Self::new();
        for (name, ingredient) in entries {
            catalog.insert(name, ingredient)?;
        }
        Ok(catalog)
    }

    /// Add or replace an ingredient.
    pub fn insert(&mut self, name: impl Into<String>, ingredient: Ingredient) -> Result<()> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(StatsError::InvalidConfig(
                "Ingredient name must not be empty".to_string(),
            ));
        }
        if !ingredient.is_valid() {
            return Err(StatsError::InvalidConfig(format!(
                "Ingredient values must be finite and non-negative: {}",
                ingredient.debug_string(&name)
            )));
        }

        match self.index.get(&name) {
            Some(&idx) => self.ingredients[idx] = ingredient,
            None => {
                self.index.insert(name.clone(), self.names.len());
                self.names.push(name);
                self.ingredients.push(ingredient);
            }
        }
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Ingredient> {
        self.index.get(name).map(|&idx| &self.ingredients[idx])
    }

    /// Like [`Catalog::get`], but a missing name is an error.
    pub fn lookup(&self, name: &str) -> Result<&Ingredient> {
        self.get(name)
            .ok_or_else(|| StatsError::IngredientNotFound(name.to_string()))
    }

    /// Ingredient names in insertion order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Ingredient)> {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.ingredients.iter())
    }

    /// Convert to a list of named entries for JSON serialization.
    pub fn to_entries(&self) -> Vec<NamedIngredient> {
        self.iter()
            .map(|(name, ingredient)| NamedIngredient {
                name: name.to_string(),
                ingredient: *ingredient,
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
