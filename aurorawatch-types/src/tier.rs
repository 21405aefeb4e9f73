//! Severity tiers.

use core::fmt;

/// Severity tier assigned to a single metric.
///
/// Variants are ordered by severity, so `max()` over a set of tiers gives
/// the worst one. `NoData` and `Unclassified` sort below `Green`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tier {
    /// The reading was missing.
    NoData,
    /// The reading was present but matched no band.
    Unclassified,
    Green,
    Yellow,
    Orange,
    Red,
}

impl Tier {
    /// Integer tier: -1 for no data/unclassified, 0 (green) through 3 (red).
    pub fn level(&self) -> i8 {
        match self {
            Tier::NoData | Tier::Unclassified => -1,
            Tier::Green => 0,
            Tier::Yellow => 1,
            Tier::Orange => 2,
            Tier::Red => 3,
        }
    }

    /// Returns a short label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Tier::NoData => "NO DATA",
            Tier::Unclassified => "UNCLASSIFIED",
            Tier::Green => "GREEN",
            Tier::Yellow => "YELLOW",
            Tier::Orange => "ORANGE",
            Tier::Red => "RED",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}
