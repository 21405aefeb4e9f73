//! The metrics that feed into the alert score.

use core::fmt;

/// A scored metric.
///
/// Each one maps to a named field in one of the three feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Metric {
    /// North-south IMF component (nT), magnetometer feed.
    Bz,
    /// Solar wind bulk speed (km/s), plasma feed.
    Speed,
    /// Proton density (p/cc), plasma feed.
    Density,
    /// Planetary K-index, K-index feed.
    Kp,
}

impl Metric {
    /// All scored metrics, in scoring order.
    pub const ALL: [Metric; 4] = [Metric::Bz, Metric::Speed, Metric::Density, Metric::Kp];

    /// Field name used in feed records.
    pub fn name(&self) -> &'static str {
        match self {
            Metric::Bz => "Bz",
            Metric::Speed => "Speed",
            Metric::Density => "Density",
            Metric::Kp => "Kp",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}
