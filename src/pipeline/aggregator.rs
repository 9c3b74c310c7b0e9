//! Streaming per-metric reducers.
//!
//! Every reducer keeps only its running state, never the observed history.
//! Reducers seed from the first observed value rather than a fixed constant,
//! so a metric whose values never straddle zero still reports its true
//! minimum and maximum. Results do not depend on the order in which values
//! arrive (up to float rounding of the average's running sum).

use std::collections::HashMap;
use std::fmt;

use crate::error::{Result, StatsError};
use crate::models::MealStats;

/// The supported reducer kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReducerKind {
    Min,
    Max,
    /// Arithmetic mean, tracked as a sum and count pair.
    Average,
}

impl ReducerKind {
    /// Reducers registered for every metric unless asked otherwise.
    pub const DEFAULT_SET: [ReducerKind; 2] = [ReducerKind::Min, ReducerKind::Max];

    pub fn name(&self) -> &'static str {
        match self {
            ReducerKind::Min => "min",
            ReducerKind::Max => "max",
            ReducerKind::Average => "avg",
        }
    }

    /// Whether the reduced value is always one of the observed values.
    pub fn selects_observed(&self) -> bool {
        matches!(self, ReducerKind::Min | ReducerKind::Max)
    }
}

impl fmt::Display for ReducerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Accumulator {
    Empty,
    Extremum(f64),
    Mean { sum: f64, count: u64 },
}

fn keep_smaller(current: f64, candidate: f64) -> f64 {
    if candidate < current { candidate } else { current }
}

fn keep_larger(current: f64, candidate: f64) -> f64 {
    if candidate > current { candidate } else { current }
}

/// A single reducer and its running state.
#[derive(Debug, Clone, PartialEq)]
pub struct Reducer {
    kind: ReducerKind,
    state: Accumulator,
}

impl Reducer {
    pub fn new(kind: ReducerKind) -> Self {
        Self {
            kind,
            state: Accumulator::Empty,
        }
    }

    pub fn kind(&self) -> ReducerKind {
        self.kind
    }

    /// Fold one observation into the running state.
    pub fn apply(&mut self, candidate: f64) {
        self.state = match self.kind {
            ReducerKind::Min => Accumulator::Extremum(match self.state {
                Accumulator::Extremum(current) => keep_smaller(current, candidate),
                _ => candidate,
            }),
            ReducerKind::Max => Accumulator::Extremum(match self.state {
                Accumulator::Extremum(current) => keep_larger(current, candidate),
                _ => candidate,
            }),
            ReducerKind::Average => match self.state {
                Accumulator::Mean { sum, count } => Accumulator::Mean {
                    sum: sum + candidate,
                    count: count + 1,
                },
                _ => Accumulator::Mean {
                    sum: candidate,
                    count: 1,
                },
            },
        };
    }

    /// Current reduced value; `None` before the first observation.
    pub fn value(&self) -> Option<f64> {
        match self.state {
            Accumulator::Empty => None,
            Accumulator::Extremum(v) => Some(v),
            Accumulator::Mean { sum, count } => Some(sum / count as f64),
        }
    }
}

/// Reducers attached to one named metric.
#[derive(Debug, Clone)]
pub struct MetricAggregate {
    name: String,
    reducers: Vec<Reducer>,
    observations: u64,
}

impl MetricAggregate {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn reducers(&self) -> &[Reducer] {
        &self.reducers
    }

    pub fn observations(&self) -> u64 {
        self.observations
    }

    pub fn value(&self, kind: ReducerKind) -> Option<f64> {
        self.reducers
            .iter()
            .find(|r| r.kind == kind)
            .and_then(Reducer::value)
    }

    fn observe(&mut self, value: f64) {
        for reducer in &mut self.reducers {
            reducer.apply(value);
        }
        self.observations += 1;
    }
}

/// Running reducers for every registered metric, in registration order.
#[derive(Debug, Clone, Default)]
pub struct MetricAggregator {
    metrics: Vec<MetricAggregate>,
    index: HashMap<String, usize>,
}

impl MetricAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a metric with its reducer set.
    pub fn register_metric(
        &mut self,
        name: impl Into<String>,
        reducers: &[ReducerKind],
    ) -> Result<()> {
        let name = name.into();
        if self.index.contains_key(&name) {
            return Err(StatsError::InvalidConfig(format!(
                "metric already registered: {}",
                name
            )));
        }
        if reducers.is_empty() {
            return Err(StatsError::InvalidConfig(format!(
                "metric {} needs at least one reducer",
                name
            )));
        }

        let mut unique: Vec<Reducer> = Vec::with_capacity(reducers.len());
        for &kind in reducers {
            if unique.iter().any(|r| r.kind == kind) {
                return Err(StatsError::InvalidConfig(format!(
                    "reducer {} listed twice for metric {}",
                    kind, name
                )));
            }
            unique.push(Reducer::new(kind));
        }

        self.index.insert(name.clone(), self.metrics.len());
        self.metrics.push(MetricAggregate {
            name,
            reducers: unique,
            observations: 0,
        });
        Ok(())
    }

    /// Feed one value for `name` into each of its reducers.
    pub fn observe(&mut self, name: &str, value: f64) -> Result<()> {
        let idx = self.checked_index(name, value)?;
        self.metrics[idx].observe(value);
        Ok(())
    }

    /// Observe every metric of a meal.
    ///
    /// All values are checked before any reducer changes, so a failing meal
    /// leaves the aggregates untouched.
    pub fn observe_stats(&mut self, stats: &MealStats) -> Result<()> {
        let mut pending = Vec::with_capacity(self.metrics.len());
        for (metric, value) in stats.entries() {
            let value = value.as_f64();
            pending.push((self.checked_index(metric.name(), value)?, value));
        }
        for (idx, value) in pending {
            self.metrics[idx].observe(value);
        }
        Ok(())
    }

    /// Current value of one reducer; `None` for unknown metrics or reducers
    /// and before the first observation.
    pub fn current_value(&self, name: &str, kind: ReducerKind) -> Option<f64> {
        self.get(name).and_then(|m| m.value(kind))
    }

    pub fn get(&self, name: &str) -> Option<&MetricAggregate> {
        self.index.get(name).map(|&idx| &self.metrics[idx])
    }

    pub fn metrics(&self) -> &[MetricAggregate] {
        &self.metrics
    }

    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }

    fn checked_index(&self, name: &str, value: f64) -> Result<usize> {
        let idx = *self
            .index
            .get(name)
            .ok_or_else(|| StatsError::UnknownMetric(name.to_string()))?;
        if !value.is_finite() {
            return Err(StatsError::NonFiniteValue {
                metric: name.to_string(),
                value,
            });
        }
        Ok(idx)
    }
}
