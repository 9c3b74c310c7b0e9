use std::path::PathBuf;

use clap::Parser;

use crate::pipeline::{GeneratorConfig, ReducerKind, DEFAULT_MIN_DEPTH};

/// Enumerate ingredient combinations and report their per-100-kcal macro stats.
#[derive(Parser, Debug)]
#[command(name = "meal_combo_stats")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Largest number of ingredients per meal.
    #[arg(short, long)]
    pub depth: usize,

    /// Smallest number of ingredients per meal.
    #[arg(short, long, default_value_t = DEFAULT_MIN_DEPTH)]
    pub min_depth: usize,

    /// Path to a catalog JSON file (built-in catalog when omitted).
    #[arg(short, long)]
    pub catalog: Option<PathBuf>,

    /// Also write every meal row to this CSV file.
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Track the average of every metric alongside min and max.
    #[arg(long)]
    pub average: bool,
}

impl Cli {
    pub fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig::new(self.depth).with_min_depth(self.min_depth)
    }

    pub fn reducers(&self) -> Vec<ReducerKind> {
        let mut reducers = ReducerKind::DEFAULT_SET.to_vec();
        if self.average {
            reducers.push(ReducerKind::Average);
        }
        reducers
    }
}
