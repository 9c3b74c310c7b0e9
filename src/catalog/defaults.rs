use crate::catalog::Catalog;
use crate::error::Result;
use crate::models::Ingredient;

/// Built-in catalog entries, in enumeration order.
pub const DEFAULT_INGREDIENTS: [(&str, Ingredient); 5] = [
    ("octopus", Ingredient::new(224.0, 21.0, 4.8, 0.3)),
    ("beef", Ingredient::new(263.0, 21.0, 3.6, 5.9)),
    ("emmental", Ingredient::new(274.0, 21.3, 5.3, 4.2)),
    ("sausage", Ingredient::new(246.0, 21.3, 3.4, 4.8)),
    ("cucumber", Ingredient::new(193.0, 24.4, 0.3, 0.0)),
];

/// Build the built-in catalog.
pub fn default_catalog() -> Result<Catalog> {
    Catalog::from_entries(DEFAULT_INGREDIENTS)
}
