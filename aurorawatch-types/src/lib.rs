//! # aurorawatch-types
//!
//! Core value types for space-weather alerting. These are shared between the
//! feed parser, the classifier, and anything that consumes exported reports.
//!
//! ## Features
//!
//! - `serde`: JSON/TOML/etc. serialization via serde
//!
//! ## Example
//!
//! ```rust
//! use aurorawatch_types::{Metric, Reading, Tier};
//!
//! let bz = Reading::parse("-12.4");
//! assert_eq!(bz.value(), Some(-12.4));
//!
//! let missing = Reading::parse("-999.9");
//! assert!(missing.is_missing());
//!
//! assert_eq!(Metric::Bz.name(), "Bz");
//! assert!(Tier::Red > Tier::Green);
//! ```

mod metric;
mod reading;
mod tier;

pub use metric::*;
pub use reading::*;
pub use tier::*;
