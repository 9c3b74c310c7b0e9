pub mod aggregator;
pub mod builder;
pub mod combinations;
pub mod constants;
pub mod normalizer;
pub mod sink;

use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::error::Result;
use crate::models::Metric;

pub use aggregator::{MetricAggregate, MetricAggregator, Reducer, ReducerKind};
pub use builder::build_meal;
pub use combinations::{
    binomial, combination_count, generate_meal_inputs, Combinations, GeneratorConfig, MealInputs,
};
pub use constants::*;
pub use normalizer::calculate_stats;
pub use sink::{MealRecord, MealSink};

/// Outcome of a completed pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineSummary {
    /// Number of meals written to the sink.
    pub meals: u64,
    pub aggregator: MetricAggregator,
}

/// Enumerate, build, normalize and aggregate every meal of the catalog.
///
/// Each meal is observed by the aggregator and then handed to `sink`. The
/// first error aborts the run; the failing meal reaches neither the sink nor
/// the aggregates.
pub fn run_pipeline<S: MealSink + ?Sized>(
    catalog: &Catalog,
    config: &GeneratorConfig,
    reducers: &[ReducerKind],
    sink: &mut S,
) -> Result<PipelineSummary> {
    let inputs = generate_meal_inputs(catalog.names(), config)?;

    let mut aggregator = MetricAggregator::new();
    for metric in Metric::ALL {
        aggregator.register_metric(metric.name(), reducers)?;
    }

    let expected = combination_count(catalog.len(), config)
        .map_or_else(|| "overflow".to_string(), |count| count.to_string());
    info!(
        ingredients = catalog.len(),
        min_depth = config.min_depth,
        max_depth = config.max_depth,
        expected = %expected,
        "enumerating meals"
    );

    let mut meals = 0u64;
    for names in inputs {
        let meal = build_meal(&names, catalog)?;
        let stats = calculate_stats(&meal)?;
        let record = MealRecord::new(&meal, stats);

        debug!(
            meal = %record.label(" "),
            total_per_bf = stats.total_per_bf,
            "meal normalized"
        );

        aggregator.observe_stats(&stats)?;
        sink.record_meal(&record)?;
        meals += 1;
    }

    info!(meals, "enumeration complete");

    Ok(PipelineSummary { meals, aggregator })
}
