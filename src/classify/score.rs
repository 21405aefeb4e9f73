//! Combining per-metric tiers into one alert score.

use std::collections::BTreeMap;

use aurorawatch_types::{Metric, Reading, Tier};
use serde::Serialize;
use tracing::{debug, warn};

use super::classifier::classify;
use super::thresholds::Thresholds;
use crate::error::Result;
use crate::feed::{MergedRecord, MergedSet};

/// How one metric contributed to a report.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricOutcome {
    pub metric: Metric,
    pub reading: Reading,
    pub tier: Tier,
    pub weight: i32,
}

/// Alert score for one recency rank, with the per-metric breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlertReport {
    /// Recency rank the report was computed for (0 = most recent).
    pub index: usize,
    /// Sum of all metric weights.
    pub score: i32,
    pub outcomes: Vec<MetricOutcome>,
}

impl AlertReport {
    /// Tier assigned to a metric.
    pub fn tier(&self, metric: Metric) -> Option<Tier> {
        self.outcomes
            .iter()
            .find(|o| o.metric == metric)
            .map(|o| o.tier)
    }

    /// Most severe tier across all metrics.
    pub fn worst_tier(&self) -> Tier {
        self.outcomes
            .iter()
            .map(|o| o.tier)
            .max()
            .unwrap_or(Tier::NoData)
    }

    /// Integer tier per metric (-1 through 3).
    pub fn levels(&self) -> BTreeMap<Metric, i8> {
        self.outcomes
            .iter()
            .map(|o| (o.metric, o.tier.level()))
            .collect()
    }

    /// Metrics that had no reading.
    pub fn missing_metrics(&self) -> impl Iterator<Item = Metric> + '_ {
        self.outcomes
            .iter()
            .filter(|o| o.tier == Tier::NoData)
            .map(|o| o.metric)
    }
}

/// Classify and weight one metric.
pub fn assess(metric: Metric, reading: Reading, thresholds: &Thresholds) -> MetricOutcome {
    let tier = classify(reading, &thresholds.for_metric(metric).table);
    let weight = thresholds.weight(metric, tier);
    match tier {
        Tier::NoData => warn!("No data for {}", metric),
        Tier::Unclassified => warn!("{} reading {} matched no tier", metric, reading),
        _ => debug!("{} {} ({}) weight {}", metric, tier, reading, weight),
    }
    MetricOutcome {
        metric,
        reading,
        tier,
        weight,
    }
}

/// Score a merged record.
pub fn aggregate(record: &MergedRecord, thresholds: &Thresholds) -> AlertReport {
    let outcomes: Vec<MetricOutcome> = Metric::ALL
        .iter()
        .map(|metric| assess(*metric, record.metric(*metric), thresholds))
        .collect();
    let score = outcomes.iter().map(|o| o.weight).sum();

    AlertReport {
        index: record.index,
        score,
        outcomes,
    }
}

/// Score the record at a recency rank.
///
/// Fails with `IndexOutOfBounds` if the set has no such rank.
pub fn evaluate(set: &MergedSet, index: usize, thresholds: &Thresholds) -> Result<AlertReport> {
    let record = set.get(index)?;
    Ok(aggregate(record, thresholds))
}

/// Score the `count` most recent records, newest first.
///
/// Returns fewer reports when the set is shorter than `count`.
pub fn evaluate_window(set: &MergedSet, count: usize, thresholds: &Thresholds) -> Vec<AlertReport> {
    set.iter()
        .take(count)
        .map(|record| aggregate(record, thresholds))
        .collect()
}
