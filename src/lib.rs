//! # aurorawatch
//!
//! Aurora visibility alerting from NOAA SWPC space-weather feeds.
//!
//! The crate turns the flat, whitespace-delimited text files published for
//! the ACE magnetometer, ACE SWEPAM plasma, and Wing Kp feeds into a single
//! signed alert score with a per-metric tier breakdown. Retrieving the files
//! is left to the caller.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │  ┌─────────┐    ┌─────────────────────────┐    ┌──────────────┐  │
//! │  │ source  │───▶│          feed           │───▶│   classify   │  │
//! │  │ (text)  │    │ extract ▶ map ▶ merge   │    │ tier ▶ score │  │
//! │  └─────────┘    └─────────────────────────┘    └──────────────┘  │
//! │       ▲                                               │          │
//! │       │                 ┌───────┐                     │          │
//! │       └─────────────────│ watch │◀────────────────────┘          │
//! │                         └───────┘                                │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`source`]**: [`FeedSource`] trait with file and channel implementations,
//!   plus [`gather`] for fetching all three feeds concurrently
//! - **[`feed`]**: Line extraction, positional record mapping, and rank-based merging
//! - **[`classify`]**: Threshold tables, tier classification, and score aggregation
//! - **[`watch`]**: [`AuroraWatch`], which polls sources and scores the current records
//! - **[`settings`]**: Configuration loading
//!
//! ## Usage
//!
//! ### Scoring text you already have
//!
//! ```
//! use aurorawatch::{evaluate, FeedTexts, Metric, Thresholds, Tier};
//!
//! let texts = FeedTexts {
//!     magnetometer: "2021 01 01  0000 59215 0 0 -2.0 1.2 -16.3 4.6 -57.9 149.0\n".into(),
//!     plasma: "2021 01 01  0000 59215 0 0 5.3 720.5 1.1e+05\n".into(),
//!     kindex: String::new(),
//! };
//!
//! let report = evaluate(&texts.merge(), 0, &Thresholds::default()).unwrap();
//! assert_eq!(report.tier(Metric::Bz), Some(Tier::Red));
//! assert_eq!(report.tier(Metric::Kp), Some(Tier::NoData));
//! assert_eq!(report.score, 25 + 25 + 10 - 50);
//! ```
//!
//! ### Polling local copies of the feeds
//!
//! ```no_run
//! use aurorawatch::{AuroraWatch, FeedSources, FileSource, Thresholds};
//!
//! let mut watch = AuroraWatch::new(
//!     FeedSources {
//!         magnetometer: Box::new(FileSource::new("ace_mag_1m.txt")),
//!         plasma: Box::new(FileSource::new("ace_swepam_1m.txt")),
//!         kindex: Box::new(FileSource::new("wingkp_list.txt")),
//!     },
//!     Thresholds::default(),
//! );
//! watch.reload_data()?;
//! println!("score: {}", watch.latest()?.score);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod classify;
pub mod error;
pub mod feed;
pub mod settings;
pub mod source;
pub mod watch;

pub use aurorawatch_types::{Metric, Reading, Tier, MISSING_DATA};
pub use classify::{
    aggregate, classify, evaluate, evaluate_window, AlertReport, Band, MetricOutcome,
    MetricThresholds, ThresholdTable, Thresholds, WeightTable,
};
pub use error::{Error, Result};
pub use feed::{
    extract_lines, parse_feed, DataRecord, FeedKind, FeedSchema, MergedRecord, MergedSet, RawLine,
    KINDEX, MAGNETOMETER, PLASMA,
};
pub use settings::{FeedPaths, Settings};
pub use source::{gather, ChannelSource, FeedSource, FeedTexts, FileSource};
pub use watch::{AuroraWatch, FeedSources};
