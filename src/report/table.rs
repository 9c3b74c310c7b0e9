use std::io::Write;

use crate::error::Result;
use crate::models::{Metric, MetricValue};
use crate::pipeline::{MealRecord, MealSink, MetricAggregate, PipelineSummary, ReducerKind};

/// Width of the right-aligned value column.
pub const VALUE_WIDTH: usize = 10;

/// Width of the reducer name column in the aggregate section.
pub const REDUCER_WIDTH: usize = 5;

/// Line between the per-meal rows and the aggregates.
pub const SEPARATOR: &str = "=====";

/// Format a value right-aligned to `width`: floats with two decimals,
/// integers without.
pub fn format_value(value: MetricValue, width: usize) -> String {
    match value {
        MetricValue::Float(v) => format!("{:>width$.2}", v, width = width),
        MetricValue::Integer(v) => format!("{:>width$}", v, width = width),
    }
}

/// Width of the metric name column: longest metric name plus one.
fn metric_column_width() -> usize {
    Metric::ALL.iter().map(|m| m.name().len()).max().unwrap_or(0) + 1
}

/// Reported form of an aggregate value.
///
/// Min and max of an integral metric are themselves integral.
fn aggregate_value(aggregate: &MetricAggregate, kind: ReducerKind, value: f64) -> MetricValue {
    let integral = Metric::from_name(aggregate.name()).is_some_and(|m| m.is_integral());
    if integral && kind.selects_observed() {
        MetricValue::Integer(value as i64)
    } else {
        MetricValue::Float(value)
    }
}

/// Plain-text report: one block per meal, then a separator and the
/// aggregates for every metric.
pub struct TableWriter<W: Write> {
    out: W,
    metric_width: usize,
}

impl<W: Write> TableWriter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            metric_width: metric_column_width(),
        }
    }

    /// Write the aggregate section and flush.
    pub fn finish(&mut self, summary: &PipelineSummary) -> Result<()> {
        if summary.meals == 0 {
            writeln!(self.out, "\tNo Results")?;
            self.out.flush()?;
            return Ok(());
        }

        writeln!(self.out, "{}", SEPARATOR)?;

        for aggregate in summary.aggregator.metrics() {
            writeln!(self.out, "{}", aggregate.name())?;
            for reducer in aggregate.reducers() {
                let kind = reducer.kind();
                let formatted = match reducer.value() {
                    Some(v) => format_value(aggregate_value(aggregate, kind, v), VALUE_WIDTH),
                    None => "-".to_string(),
                };
                writeln!(
                    self.out,
                    "\t{:<width$}:{}",
                    kind.name(),
                    formatted,
                    width = REDUCER_WIDTH
                )?;
            }
        }

        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> MealSink for TableWriter<W> {
    fn record_meal(&mut self, record: &MealRecord) -> Result<()> {
        writeln!(self.out, "{} [{}]:", record.label(" "), record.size())?;
        for (metric, value) in record.stats.entries() {
            writeln!(
                self.out,
                "\t{:<width$}:{}",
                metric.name(),
                format_value(value, VALUE_WIDTH),
                width = self.metric_width
            )?;
        }
        Ok(())
    }
}
