//! Tier boundaries and weights.
//!
//! Everything the classifier and the scorer need is carried in a
//! [`Thresholds`] value, so callers can load, tweak, or test alternative
//! tables without touching shared state.

use aurorawatch_types::{Metric, Tier};
use serde::{Deserialize, Serialize};

/// Value range `[lower, upper)`. `None` leaves that side unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Band {
    pub lower: Option<f64>,
    pub upper: Option<f64>,
}

impl Band {
    /// Band from `lower` (inclusive) to `upper` (exclusive).
    pub const fn new(lower: Option<f64>, upper: Option<f64>) -> Self {
        Self { lower, upper }
    }

    pub fn contains(&self, value: f64) -> bool {
        self.lower.map_or(true, |lo| value >= lo) && self.upper.map_or(true, |hi| value < hi)
    }
}

/// Bands for the four severity tiers of one metric.
///
/// Neighbouring bands meet at a boundary value, which belongs to the band
/// that starts there. The classifier checks green, yellow, orange, then red
/// and takes the first match, so hand-written tables with overlapping bands
/// resolve toward the less severe tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ThresholdTable {
    pub green: Band,
    pub yellow: Band,
    pub orange: Band,
    pub red: Band,
}

impl ThresholdTable {
    /// Severity rises with the value: green `[floor, yellow)`, yellow
    /// `[yellow, orange)`, orange `[orange, red)`, red `[red, ∞)`.
    pub const fn ascending(floor: Option<f64>, yellow: f64, orange: f64, red: f64) -> Self {
        Self {
            green: Band::new(floor, Some(yellow)),
            yellow: Band::new(Some(yellow), Some(orange)),
            orange: Band::new(Some(orange), Some(red)),
            red: Band::new(Some(red), None),
        }
    }

    /// Severity rises as the value falls: green `[green, ∞)`, yellow
    /// `[orange, green)`, orange `[red, orange)`, red `(-∞, red)`.
    pub const fn descending(green: f64, orange: f64, red: f64) -> Self {
        Self {
            green: Band::new(Some(green), None),
            yellow: Band::new(Some(orange), Some(green)),
            orange: Band::new(Some(red), Some(orange)),
            red: Band::new(None, Some(red)),
        }
    }

    /// Bands in evaluation order.
    pub fn bands(&self) -> [(Tier, &Band); 4] {
        [
            (Tier::Green, &self.green),
            (Tier::Yellow, &self.yellow),
            (Tier::Orange, &self.orange),
            (Tier::Red, &self.red),
        ]
    }
}

/// Score contribution of each tier for one metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeightTable {
    pub green: i32,
    pub yellow: i32,
    pub orange: i32,
    pub red: i32,
    /// Falls back to [`Thresholds::no_data_weight`] when unset.
    pub no_data: Option<i32>,
}

impl WeightTable {
    /// Weights used for Bz, speed and density.
    pub const SOLAR_WIND: WeightTable = WeightTable {
        green: -10,
        yellow: 10,
        orange: 15,
        red: 25,
        no_data: Some(DEFAULT_NO_DATA_WEIGHT),
    };

    /// Kp weights. There is no Kp-specific no-data weight.
    pub const KP: WeightTable = WeightTable {
        green: -5,
        yellow: 2,
        orange: 5,
        red: 10,
        no_data: None,
    };
}

/// Classification and weighting rules for one metric.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricThresholds {
    pub table: ThresholdTable,
    pub weights: WeightTable,
}

pub const DEFAULT_NO_DATA_WEIGHT: i32 = -50;

/// Full classification configuration.
///
/// When deserialized, every entry is optional: anything left out keeps the
/// value from [`Thresholds::default`] for that metric, down to a single
/// band edge or weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ThresholdsOverrides")]
pub struct Thresholds {
    pub bz: MetricThresholds,
    pub speed: MetricThresholds,
    pub density: MetricThresholds,
    pub kp: MetricThresholds,
    /// Weight for a missing reading when the metric has none of its own.
    pub no_data_weight: i32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            bz: MetricThresholds {
                table: ThresholdTable::descending(0.0, -10.0, -15.0),
                weights: WeightTable::SOLAR_WIND,
            },
            speed: MetricThresholds {
                table: ThresholdTable::ascending(Some(200.0), 350.0, 500.0, 700.0),
                weights: WeightTable::SOLAR_WIND,
            },
            density: MetricThresholds {
                table: ThresholdTable::ascending(Some(0.0), 4.0, 10.0, 14.0),
                weights: WeightTable::SOLAR_WIND,
            },
            kp: MetricThresholds {
                table: ThresholdTable::ascending(Some(0.0), 3.0, 4.0, 5.0),
                weights: WeightTable::KP,
            },
            no_data_weight: DEFAULT_NO_DATA_WEIGHT,
        }
    }
}

impl Thresholds {
    /// Rules for one metric.
    pub fn for_metric(&self, metric: Metric) -> &MetricThresholds {
        match metric {
            Metric::Bz => &self.bz,
            Metric::Speed => &self.speed,
            Metric::Density => &self.density,
            Metric::Kp => &self.kp,
        }
    }

    /// Score contribution of a tier for a metric.
    ///
    /// Unclassified readings contribute nothing.
    pub fn weight(&self, metric: Metric, tier: Tier) -> i32 {
        let weights = &self.for_metric(metric).weights;
        match tier {
            Tier::NoData => weights.no_data.unwrap_or(self.no_data_weight),
            Tier::Unclassified => 0,
            Tier::Green => weights.green,
            Tier::Yellow => weights.yellow,
            Tier::Orange => weights.orange,
            Tier::Red => weights.red,
        }
    }
}

/// Configuration form of [`Thresholds`]. Unset entries keep their defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ThresholdsOverrides {
    bz: MetricOverrides,
    speed: MetricOverrides,
    density: MetricOverrides,
    kp: MetricOverrides,
    no_data_weight: Option<i32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct MetricOverrides {
    table: TableOverrides,
    weights: WeightOverrides,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TableOverrides {
    green: BandOverrides,
    yellow: BandOverrides,
    orange: BandOverrides,
    red: BandOverrides,
}

// An unset edge keeps the default edge, so an open side cannot be
// configured on a band whose default is bounded there.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct BandOverrides {
    lower: Option<f64>,
    upper: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WeightOverrides {
    green: Option<i32>,
    yellow: Option<i32>,
    orange: Option<i32>,
    red: Option<i32>,
    no_data: Option<i32>,
}

impl BandOverrides {
    fn apply(self, base: Band) -> Band {
        Band {
            lower: self.lower.or(base.lower),
            upper: self.upper.or(base.upper),
        }
    }
}

impl MetricOverrides {
    fn apply(self, base: MetricThresholds) -> MetricThresholds {
        let (table, weights) = (self.table, self.weights);
        MetricThresholds {
            table: ThresholdTable {
                green: table.green.apply(base.table.green),
                yellow: table.yellow.apply(base.table.yellow),
                orange: table.orange.apply(base.table.orange),
                red: table.red.apply(base.table.red),
            },
            weights: WeightTable {
                green: weights.green.unwrap_or(base.weights.green),
                yellow: weights.yellow.unwrap_or(base.weights.yellow),
                orange: weights.orange.unwrap_or(base.weights.orange),
                red: weights.red.unwrap_or(base.weights.red),
                no_data: weights.no_data.or(base.weights.no_data),
            },
        }
    }
}

impl From<ThresholdsOverrides> for Thresholds {
    fn from(overrides: ThresholdsOverrides) -> Self {
        let base = Thresholds::default();
        Self {
            bz: overrides.bz.apply(base.bz),
            speed: overrides.speed.apply(base.speed),
            density: overrides.density.apply(base.density),
            kp: overrides.kp.apply(base.kp),
            no_data_weight: overrides.no_data_weight.unwrap_or(base.no_data_weight),
        }
    }
}
