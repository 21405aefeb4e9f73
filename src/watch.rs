//! Ingest-cycle state: polls the feed sources and keeps the current records.

use anyhow::Result;
use tracing::{info, warn};

use crate::classify::{evaluate, evaluate_window, AlertReport, Thresholds};
use crate::feed::{parse_feed, DataRecord, FeedKind, MergedSet};
use crate::source::FeedSource;

/// One source per feed.
#[derive(Debug)]
pub struct FeedSources {
    pub magnetometer: Box<dyn FeedSource>,
    pub plasma: Box<dyn FeedSource>,
    pub kindex: Box<dyn FeedSource>,
}

impl FeedSources {
    /// The source feeding `kind`.
    pub fn get(&self, kind: FeedKind) -> &dyn FeedSource {
        match kind {
            FeedKind::Magnetometer => self.magnetometer.as_ref(),
            FeedKind::Plasma => self.plasma.as_ref(),
            FeedKind::KIndex => self.kindex.as_ref(),
        }
    }

    fn get_mut(&mut self, kind: FeedKind) -> &mut dyn FeedSource {
        match kind {
            FeedKind::Magnetometer => self.magnetometer.as_mut(),
            FeedKind::Plasma => self.plasma.as_mut(),
            FeedKind::KIndex => self.kindex.as_mut(),
        }
    }
}

/// Latest parsed records for each feed.
#[derive(Debug, Clone, Default)]
struct FeedRecords {
    magnetometer: Vec<DataRecord>,
    plasma: Vec<DataRecord>,
    kindex: Vec<DataRecord>,
}

impl FeedRecords {
    fn slot(&mut self, kind: FeedKind) -> &mut Vec<DataRecord> {
        match kind {
            FeedKind::Magnetometer => &mut self.magnetometer,
            FeedKind::Plasma => &mut self.plasma,
            FeedKind::KIndex => &mut self.kindex,
        }
    }
}

/// Polls three feed sources and scores the merged result.
///
/// Only the latest text of each feed is kept; older cycles are discarded.
///
/// ```
/// use aurorawatch::{AuroraWatch, ChannelSource, FeedSources, Thresholds};
///
/// let (mag_tx, magnetometer) = ChannelSource::create("mag");
/// let (_plasma_tx, plasma) = ChannelSource::create("plasma");
/// let (_kp_tx, kindex) = ChannelSource::create("kp");
///
/// let mut watch = AuroraWatch::new(
///     FeedSources {
///         magnetometer: Box::new(magnetometer),
///         plasma: Box::new(plasma),
///         kindex: Box::new(kindex),
///     },
///     Thresholds::default(),
/// );
///
/// mag_tx
///     .send("2021 01 01  0000 59215 0 0 -2.0 1.2 -12.5 4.6 -57.9 149.0".to_string())
///     .unwrap();
/// watch.reload_data().unwrap();
/// assert_eq!(watch.data.len(), 1);
/// ```
pub struct AuroraWatch {
    sources: FeedSources,
    records: FeedRecords,
    pub data: MergedSet,
    pub load_error: Option<String>,
    pub thresholds: Thresholds,
}

impl AuroraWatch {
    pub fn new(sources: FeedSources, thresholds: Thresholds) -> Self {
        Self {
            sources,
            records: FeedRecords::default(),
            data: MergedSet::default(),
            load_error: None,
            thresholds,
        }
    }

    /// Description of the source behind a feed.
    pub fn source_description(&self, kind: FeedKind) -> &str {
        self.sources.get(kind).description()
    }

    /// Poll every source and rebuild the merged records.
    ///
    /// Returns whether any feed changed. Source errors are kept in
    /// `load_error`; feeds that fail keep their previous records.
    pub fn reload_data(&mut self) -> Result<bool> {
        let mut changed = false;
        let mut errors = Vec::new();

        for kind in FeedKind::ALL {
            let source = self.sources.get_mut(kind);
            match source.poll() {
                Some(text) => {
                    let records = parse_feed(&text, kind.schema());
                    info!("Loaded {} {} records from {}", records.len(), kind, source.description());
                    *self.records.slot(kind) = records;
                    changed = true;
                }
                None => {
                    if let Some(err) = source.error() {
                        warn!("{} feed: {}", kind, err);
                        errors.push(format!("{}: {}", kind, err));
                    }
                }
            }
        }

        self.load_error = (!errors.is_empty()).then(|| errors.join("; "));

        if changed {
            self.data = MergedSet::merge(
                &self.records.magnetometer,
                &self.records.plasma,
                &self.records.kindex,
            );
        }

        Ok(changed)
    }

    /// Score the record at a recency rank.
    pub fn report(&self, index: usize) -> crate::Result<AlertReport> {
        evaluate(&self.data, index, &self.thresholds)
    }

    /// Score the most recent record.
    pub fn latest(&self) -> crate::Result<AlertReport> {
        self.report(0)
    }

    /// Score the `count` most recent records.
    pub fn window(&self, count: usize) -> Vec<AlertReport> {
        evaluate_window(&self.data, count, &self.thresholds)
    }
}
