//! Readings that may or may not carry a usable value.

use core::fmt;

/// Sentinel the SWPC flat files (and exported records) use for "no usable reading".
pub const MISSING_DATA: f64 = -999.9;

/// A single instrument reading.
///
/// Feeds encode gaps as [`MISSING_DATA`] (or a more negative fill value).
/// Those are turned into `Missing` at parse time, so a real negative
/// reading can never be mistaken for the sentinel later on.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Reading {
    Present(f64),
    #[default]
    Missing,
}

impl Reading {
    /// Wrap a raw float, treating the sentinel (and anything below it) as missing.
    pub fn from_raw(value: f64) -> Self {
        if value.is_nan() || value <= MISSING_DATA {
            Reading::Missing
        } else {
            Reading::Present(value)
        }
    }

    /// Parse a whitespace-free token. Never fails: garbage becomes `Missing`.
    pub fn parse(token: &str) -> Self {
        token
            .trim()
            .parse::<f64>()
            .map_or(Reading::Missing, Reading::from_raw)
    }

    /// The measured value, or `None` when missing.
    pub fn value(&self) -> Option<f64> {
        match self {
            Reading::Present(v) => Some(*v),
            Reading::Missing => None,
        }
    }

    /// True for [`Reading::Missing`].
    pub fn is_missing(&self) -> bool {
        matches!(self, Reading::Missing)
    }

    /// Flat-file representation, with the sentinel standing in for `Missing`.
    pub fn raw(&self) -> f64 {
        self.value().unwrap_or(MISSING_DATA)
    }
}

impl From<f64> for Reading {
    fn from(value: f64) -> Self {
        Reading::from_raw(value)
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reading::Present(v) => write!(f, "{}", v),
            Reading::Missing => f.write_str("n/a"),
        }
    }
}
