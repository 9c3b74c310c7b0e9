use crate::error::{Result, StatsError};
use crate::models::{Meal, MealStats, Metric};
use crate::pipeline::constants::BASE_FACTOR;

/// Normalize a meal's macros to `BASE_FACTOR` kcal.
///
/// `scale = total_kcal / BASE_FACTOR`; each macro total is divided by `scale`.
/// Every ingredient must carry calories: a zero-kcal ingredient fails with
/// `ZeroCalorieMeal` naming it, even when the rest of the meal has calories.
/// The check runs before any division happens.
pub fn calculate_stats(meal: &Meal) -> Result<MealStats> {
    let mut zero_kcal: Vec<String> = meal
        .entries()
        .iter()
        .filter(|(_, ingredient)| !(ingredient.kcal > 0.0))
        .map(|(name, _)| name.to_string())
        .collect();
    if !zero_kcal.is_empty() {
        zero_kcal.sort();
        return Err(StatsError::ZeroCalorieMeal(zero_kcal));
    }

    let totals = meal.totals();
    if !(totals.kcal > 0.0) {
        return Err(StatsError::ZeroCalorieMeal(
            meal.sorted_names().into_iter().map(str::to_string).collect(),
        ));
    }

    let scale_factor = totals.kcal / f64::from(BASE_FACTOR);
    let stats = MealStats::from_normalized(
        BASE_FACTOR,
        totals.carb / scale_factor,
        totals.protein / scale_factor,
        totals.fat / scale_factor,
    );

    ensure_finite(&stats)?;
    Ok(stats)
}

fn ensure_finite(stats: &MealStats) -> Result<()> {
    for (metric, value) in stats.entries() {
        let value = value.as_f64();
        if !value.is_finite() {
            return Err(non_finite(metric, value));
        }
    }
    Ok(())
}

fn non_finite(metric: Metric, value: f64) -> StatsError {
    StatsError::NonFiniteValue {
        metric: metric.name().to_string(),
        value,
    }
}
