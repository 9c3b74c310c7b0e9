use crate::error::Result;
use crate::models::{Meal, MealStats};

/// One computed meal as handed to report writers.
#[derive(Debug, Clone, PartialEq)]
pub struct MealRecord {
    /// Ingredient names, sorted alphabetically.
    pub ingredients: Vec<String>,
    pub stats: MealStats,
}

impl MealRecord {
    pub fn new(meal: &Meal, stats: MealStats) -> Self {
        Self {
            ingredients: meal
                .sorted_names()
                .into_iter()
                .map(str::to_string)
                .collect(),
            stats,
        }
    }

    pub fn size(&self) -> usize {
        self.ingredients.len()
    }

    /// Ingredient names joined with `sep`.
    pub fn label(&self, sep: &str) -> String {
        self.ingredients.join(sep)
    }
}

/// Consumer of computed meals, called once per meal in generation order.
pub trait MealSink {
    fn record_meal(&mut self, record: &MealRecord) -> Result<()>;
}

impl MealSink for Vec<MealRecord> {
    fn record_meal(&mut self, record: &MealRecord) -> Result<()> {
        self.push(record.clone());
        Ok(())
    }
}

impl<S: MealSink + ?Sized> MealSink for &mut S {
    fn record_meal(&mut self, record: &MealRecord) -> Result<()> {
        (**self).record_meal(record)
    }
}

impl<S: MealSink> MealSink for Option<S> {
    fn record_meal(&mut self, record: &MealRecord) -> Result<()> {
        match self {
            Some(sink) => sink.record_meal(record),
            None => Ok(()),
        }
    }
}

/// Fan out to two sinks, first then second.
impl<A: MealSink, B: MealSink> MealSink for (A, B) {
    fn record_meal(&mut self, record: &MealRecord) -> Result<()> {
        self.0.record_meal(record)?;
        self.1.record_meal(record)
    }
}
