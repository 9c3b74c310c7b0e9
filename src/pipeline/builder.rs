use crate::catalog::Catalog;
use crate::error::Result;
use crate::models::Meal;

/// Resolve each name against the catalog and build a meal in input order.
///
/// Returns `IngredientNotFound` for the first name missing from the catalog.
pub fn build_meal<'a>(names: &[&'a str], catalog: &'a Catalog) -> Result<Meal<'a>> {
    let mut meal = Meal::with_capacity(names.len());
    for &name in names {
        meal.add_ingredient(name, catalog.lookup(name)?);
    }
    Ok(meal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StatsError;
    use crate::models::Ingredient;

    fn sample_catalog() -> Catalog {
        Catalog::from_entries([
            ("x", Ingredient::new(100.0, 10.0, 0.0, 0.0)),
            ("y", Ingredient::new(200.0, 0.0, 20.0, 0.0)),
        ])
        .unwrap()
    }

    #[test]
    fn test_build_meal_in_input_order() {
        let catalog = sample_catalog();
        let meal = build_meal(&["y", "x"], &catalog).unwrap();
        assert_eq!(meal.names(), vec!["y", "x"]);
        assert!((meal.totals().kcal - 300.0).abs() < 1e-9);
    }

    #[test]
    fn test_missing_key_propagates() {
        let catalog = sample_catalog();
        let result = build_meal(&["x", "z"], &catalog);
        assert!(matches!(result, Err(StatsError::IngredientNotFound(name)) if name == "z"));
    }
}
