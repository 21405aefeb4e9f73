//! Severity classification and alert scoring.
//!
//! ```text
//! MergedRecord ──▶ classify(reading, table) ──▶ Tier
//!                                                │
//!                         Thresholds::weight() ◀─┘
//!                                │
//!                                ▼
//!                   AlertReport { score, outcomes }
//! ```

pub mod classifier;
pub mod score;
pub mod thresholds;

pub use classifier::classify;
pub use score::{aggregate, assess, evaluate, evaluate_window, AlertReport, MetricOutcome};
pub use thresholds::{Band, MetricThresholds, ThresholdTable, Thresholds, WeightTable};
