use std::io::{self, BufWriter};

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use meal_combo_stats::catalog::{default_catalog, load_catalog};
use meal_combo_stats::cli::Cli;
use meal_combo_stats::error::Result;
use meal_combo_stats::pipeline::run_pipeline;
use meal_combo_stats::report::{CsvExporter, TableWriter};

fn main() {
    // Diagnostics go to stderr so stdout carries only the report
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("meal_combo_stats=warn")),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let catalog = match &cli.catalog {
        Some(path) => load_catalog(path)?,
        None => default_catalog()?,
    };
    info!(ingredients = catalog.len(), "catalog loaded");

    let config = cli.generator_config();
    let reducers = cli.reducers();

    let stdout = io::stdout();
    let table = TableWriter::new(BufWriter::new(stdout.lock()));
    let csv = cli.csv.as_ref().map(CsvExporter::from_path).transpose()?;

    let mut sinks = (table, csv);
    let summary = run_pipeline(&catalog, &config, &reducers, &mut sinks)?;

    let (mut table, csv) = sinks;
    table.finish(&summary)?;

    if let Some(mut csv) = csv {
        csv.flush()?;
        if let Some(path) = &cli.csv {
            info!(path = %path.display(), rows = summary.meals, "csv written");
        }
    }

    Ok(())
}
