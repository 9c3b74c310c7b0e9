pub mod catalog;
pub mod cli;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod report;

pub use catalog::Catalog;
pub use error::{ErrorKind, Result, StatsError};
pub use models::{Ingredient, Meal, MealStats, Metric};
pub use pipeline::{run_pipeline, GeneratorConfig, PipelineSummary, ReducerKind};
