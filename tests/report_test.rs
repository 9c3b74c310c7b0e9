use std::fs;

use tempfile::NamedTempFile;

use meal_combo_stats::catalog::{default_catalog, load_catalog, save_catalog, Catalog};
use meal_combo_stats::models::{Ingredient, Metric};
use meal_combo_stats::pipeline::{run_pipeline, GeneratorConfig, ReducerKind};
use meal_combo_stats::report::{CsvExporter, TableWriter, SEPARATOR};

fn render(catalog: &Catalog, config: &GeneratorConfig, reducers: &[ReducerKind]) -> String {
    let mut table = TableWriter::new(Vec::new());
    let summary = run_pipeline(catalog, config, reducers, &mut table).unwrap();
    table.finish(&summary).unwrap();
    String::from_utf8(table.into_inner()).unwrap()
}

#[test]
fn test_report_sections() {
    let catalog = default_catalog().unwrap();
    let text = render(&catalog, &GeneratorConfig::new(2), &ReducerKind::DEFAULT_SET);

    let (meals, aggregates) = text
        .split_once(&format!("{}\n", SEPARATOR))
        .expect("separator present");

    // 5 singles + 10 pairs, each a title plus one line per metric
    let titles: Vec<&str> = meals.lines().filter(|l| !l.starts_with('\t')).collect();
    assert_eq!(titles.len(), 15);
    assert_eq!(titles[0], "octopus [1]:");
    assert_eq!(titles[5], "beef octopus [2]:");
    assert_eq!(meals.lines().count(), 15 * (1 + Metric::ALL.len()));

    let agg_lines: Vec<&str> = aggregates.lines().collect();
    assert_eq!(agg_lines.len(), Metric::ALL.len() * 3);
    assert_eq!(agg_lines[0], "base_factor");
    assert_eq!(agg_lines[1], "\tmin  :       100");
    assert_eq!(agg_lines[2], "\tmax  :       100");
}

#[test]
fn test_report_two_item_values() {
    let catalog = Catalog::from_entries([
        ("x", Ingredient::new(100.0, 10.0, 0.0, 0.0)),
        ("y", Ingredient::new(200.0, 0.0, 20.0, 0.0)),
    ])
    .unwrap();
    let text = render(&catalog, &GeneratorConfig::new(2), &ReducerKind::DEFAULT_SET);

    assert!(text.contains("x y [2]:\n"));
    assert!(text.contains(&format!("\t{:<24}:{:>10}\n", "carb_per_bf", "3.33")));
    assert!(text.contains(&format!("\t{:<24}:{:>10}\n", "protein_per_bf", "6.67")));
    assert!(text.ends_with("total_per_bf\n\tmin  :     10.00\n\tmax  :     10.00\n"));
}

#[test]
fn test_report_with_average() {
    let catalog = default_catalog().unwrap();
    let text = render(
        &catalog,
        &GeneratorConfig::new(1),
        &[ReducerKind::Min, ReducerKind::Max, ReducerKind::Average],
    );
    // Averages print as floats, even for the integral base factor
    assert!(text.contains("base_factor\n\tmin  :       100\n\tmax  :       100\n\tavg  :    100.00\n"));
}

#[test]
fn test_report_no_results() {
    let catalog = default_catalog().unwrap();
    let text = render(
        &catalog,
        &GeneratorConfig::new(9).with_min_depth(6),
        &ReducerKind::DEFAULT_SET,
    );
    assert_eq!(text, "\tNo Results\n");
}

#[test]
fn test_csv_export_matches_meal_count() {
    let catalog = default_catalog().unwrap();
    let out = NamedTempFile::new().unwrap();

    let mut exporter = CsvExporter::from_path(out.path()).unwrap();
    let summary = run_pipeline(
        &catalog,
        &GeneratorConfig::new(5),
        &ReducerKind::DEFAULT_SET,
        &mut exporter,
    )
    .unwrap();
    exporter.flush().unwrap();

    let content = fs::read_to_string(out.path()).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(summary.meals, 31);
    assert_eq!(lines.len(), 1 + 31);
    assert!(lines[0].starts_with("meal,size,base_factor,"));
    assert_eq!(
        lines[31].split(',').next(),
        Some("beef+cucumber+emmental+octopus+sausage")
    );
}

#[test]
fn test_saved_catalog_drives_pipeline() {
    let file = NamedTempFile::new().unwrap();
    save_catalog(file.path(), &default_catalog().unwrap()).unwrap();

    let loaded = load_catalog(file.path()).unwrap();
    let original = render(
        &default_catalog().unwrap(),
        &GeneratorConfig::new(3),
        &ReducerKind::DEFAULT_SET,
    );
    let reloaded = render(&loaded, &GeneratorConfig::new(3), &ReducerKind::DEFAULT_SET);
    assert_eq!(original, reloaded);
}
