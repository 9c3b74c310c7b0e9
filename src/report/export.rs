use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::{Result, StatsError};
use crate::models::{Metric, MetricValue};
use crate::pipeline::{MealRecord, MealSink};

/// Writes one CSV record per meal: `meal,size,<metric columns>`.
pub struct CsvExporter<W: Write> {
    wtr: csv::Writer<W>,
}

impl CsvExporter<File> {
    /// Create (or truncate) a CSV file and write the header.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::new(File::create(path)?)
    }
}

impl<W: Write> CsvExporter<W> {
    pub fn new(out: W) -> Result<Self> {
        let mut wtr = csv::Writer::from_writer(out);

        let mut header = vec!["meal", "size"];
        header.extend(Metric::ALL.iter().map(|m| m.name()));
        wtr.write_record(&header)?;

        Ok(Self { wtr })
    }

    pub fn flush(&mut self) -> Result<()> {
        self.wtr.flush()?;
        Ok(())
    }

    /// Flush and return the underlying writer.
    pub fn into_inner(self) -> Result<W> {
        self.wtr.into_inner().map_err(|e| {
            let err = e.error();
            StatsError::Io(std::io::Error::new(err.kind(), err.to_string()))
        })
    }
}

fn csv_field(value: MetricValue) -> String {
    match value {
        MetricValue::Integer(v) => v.to_string(),
        MetricValue::Float(v) => format!("{:.6}", v),
    }
}

impl<W: Write> MealSink for CsvExporter<W> {
    fn record_meal(&mut self, record: &MealRecord) -> Result<()> {
        let mut row = vec![record.label("+"), record.size().to_string()];
        row.extend(record.stats.entries().map(|(_, v)| csv_field(v)));
        self.wtr.write_record(&row)?;
        Ok(())
    }
}
