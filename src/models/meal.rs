use crate::models::Ingredient;

/// Raw macro sums across the ingredients of a meal.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MacroTotals {
    pub kcal: f64,
    pub carb: f64,
    pub protein: f64,
    pub fat: f64,
}

/// An ordered collection of named ingredients borrowed from a catalog.
#[derive(Debug, Clone, Default)]
pub struct Meal<'a> {
    ingredients: Vec<(&'a str, &'a Ingredient)>,
}

impl<'a> Meal<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            ingredients: Vec::with_capacity(capacity),
        }
    }

    /// Append an ingredient; returns `self` for chaining.
    pub fn add_ingredient(&mut self, name: &'a str, ingredient: &'a Ingredient) -> &mut Self {
        self.ingredients.push((name, ingredient));
        self
    }

    pub fn ingredients(&self) -> impl Iterator<Item = &'a Ingredient> + '_ {
        self.ingredients.iter().map(|(_, i)| *i)
    }

    /// `(name, ingredient)` pairs in insertion order.
    pub fn entries(&self) -> &[(&'a str, &'a Ingredient)] {
        &self.ingredients
    }

    /// Ingredient names in insertion order.
    pub fn names(&self) -> Vec<&'a str> {
        self.ingredients.iter().map(|(n, _)| *n).collect()
    }

    /// Ingredient names sorted alphabetically, as shown in reports.
    pub fn sorted_names(&self) -> Vec<&'a str> {
        let mut names = self.names();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.ingredients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }

    /// Sum kcal and macros over every ingredient.
    pub fn totals(&self) -> MacroTotals {
        self.ingredients()
            .fold(MacroTotals::default(), |acc, i| MacroTotals {
                kcal: acc.kcal + i.kcal,
                carb: acc.carb + i.carb,
                protein: acc.protein + i.protein,
                fat: acc.fat + i.fat,
            })
    }
}
