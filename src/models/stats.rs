use std::fmt;

/// Metrics produced for every meal, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    BaseFactor,
    CarbPerBf,
    ProteinPerBf,
    FatPerBf,
    CarbAndProteinPerBf,
    CarbAndFatPerBf,
    ProteinFatPerBf,
    TotalPerBf,
}

impl Metric {
    pub const ALL: [Metric; 8] = [
        Metric::BaseFactor,
        Metric::CarbPerBf,
        Metric::ProteinPerBf,
        Metric::FatPerBf,
        Metric::CarbAndProteinPerBf,
        Metric::CarbAndFatPerBf,
        Metric::ProteinFatPerBf,
        Metric::TotalPerBf,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Metric::BaseFactor => "base_factor",
            Metric::CarbPerBf => "carb_per_bf",
            Metric::ProteinPerBf => "protein_per_bf",
            Metric::FatPerBf => "fat_per_bf",
            Metric::CarbAndProteinPerBf => "carb_and_protein_per_bf",
            Metric::CarbAndFatPerBf => "carb_and_fat_per_bf",
            Metric::ProteinFatPerBf => "protein_fat_per_bf",
            Metric::TotalPerBf => "total_per_bf",
        }
    }

    /// Whether values of this metric are whole numbers.
    pub fn is_integral(&self) -> bool {
        matches!(self, Metric::BaseFactor)
    }

    pub fn from_name(name: &str) -> Option<Metric> {
        Metric::ALL.into_iter().find(|m| m.name() == name)
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A metric value as reported: whole numbers keep their integer form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetricValue {
    Integer(i64),
    Float(f64),
}

impl MetricValue {
    pub fn as_f64(&self) -> f64 {
        match *self {
            MetricValue::Integer(v) => v as f64,
            MetricValue::Float(v) => v,
        }
    }
}

/// Per-meal statistics normalized to `base_factor` kcal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MealStats {
    pub base_factor: u32,
    pub carb_per_bf: f64,
    pub protein_per_bf: f64,
    pub fat_per_bf: f64,
    pub carb_and_protein_per_bf: f64,
    pub carb_and_fat_per_bf: f64,
    pub protein_fat_per_bf: f64,
    pub total_per_bf: f64,
}

impl MealStats {
    /// Build the record from the three normalized macros.
    pub fn from_normalized(base_factor: u32, carb: f64, protein: f64, fat: f64) -> Self {
        Self {
            base_factor,
            carb_per_bf: carb,
            protein_per_bf: protein,
            fat_per_bf: fat,
            carb_and_protein_per_bf: carb + protein,
            carb_and_fat_per_bf: carb + fat,
            protein_fat_per_bf: protein + fat,
            total_per_bf: carb + protein + fat,
        }
    }

    pub fn get(&self, metric: Metric) -> MetricValue {
        match metric {
            Metric::BaseFactor => MetricValue::Integer(i64::from(self.base_factor)),
            Metric::CarbPerBf => MetricValue::Float(self.carb_per_bf),
            Metric::ProteinPerBf => MetricValue::Float(self.protein_per_bf),
            Metric::FatPerBf => MetricValue::Float(self.fat_per_bf),
            Metric::CarbAndProteinPerBf => MetricValue::Float(self.carb_and_protein_per_bf),
            Metric::CarbAndFatPerBf => MetricValue::Float(self.carb_and_fat_per_bf),
            Metric::ProteinFatPerBf => MetricValue::Float(self.protein_fat_per_bf),
            Metric::TotalPerBf => MetricValue::Float(self.total_per_bf),
        }
    }

    /// All metrics with their values, in report order.
    pub fn entries(&self) -> impl Iterator<Item = (Metric, MetricValue)> + '_ {
        Metric::ALL.into_iter().map(move |m| (m, self.get(m)))
    }
}
