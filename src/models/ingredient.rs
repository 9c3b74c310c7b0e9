use serde::{Deserialize, Serialize};

/// Macro-nutrient profile of a single ingredient portion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub kcal: f64,
    pub carb: f64,
    pub protein: f64,
    pub fat: f64,
}

impl Ingredient {
    pub const fn new(kcal: f64, carb: f64, protein: f64, fat: f64) -> Self {
        Self {
            kcal,
            carb,
            protein,
            fat,
        }
    }

    /// All values are finite and non-negative.
    pub fn is_valid(&self) -> bool {
        [self.kcal, self.carb, self.protein, self.fat]
            .into_iter()
            .all(|v| v.is_finite() && v >= 0.0)
    }

    /// Debug string for logging.
    pub fn debug_string(&self, name: &str) -> String {
        format!(
            "{}: {} kcal, C:{} P:{} F:{}",
            name, self.kcal, self.carb, self.protein, self.fat
        )
    }
}

/// Catalog file entry: an ingredient together with its name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamedIngredient {
    pub name: String,

    #[serde(flatten)]
    pub ingredient: Ingredient,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid() {
        assert!(Ingredient::new(0.0, 0.0, 0.0, 0.0).is_valid());
        assert!(!Ingredient::new(100.0, -1.0, 0.0, 0.0).is_valid());
        assert!(!Ingredient::new(f64::NAN, 1.0, 0.0, 0.0).is_valid());
        assert!(!Ingredient::new(f64::INFINITY, 1.0, 0.0, 0.0).is_valid());
    }

    #[test]
    fn test_named_ingredient_flattens() {
        let json = r#"{"name": "beef", "kcal": 263, "carb": 21.0, "protein": 3.6, "fat": 5.9}"#;
        let entry: NamedIngredient = serde_json::from_str(json).unwrap();
        assert_eq!(entry.name, "beef");
        assert_eq!(entry.ingredient, Ingredient::new(263.0, 21.0, 3.6, 5.9));
    }
}
