pub mod ingredient;
pub mod meal;
pub mod stats;

pub use ingredient::{Ingredient, NamedIngredient};
pub use meal::{MacroTotals, Meal};
pub use stats::{MealStats, Metric, MetricValue};
