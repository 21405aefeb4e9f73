//! Aligning the three feeds into one record per recency rank.
//!
//! Records are paired by rank, not by timestamp: index 0 of the 15-minute
//! K-index feed is paired with index 0 of the 1-minute feeds, index 1 with
//! index 1, and so on. Past index 0 the K-index sample is therefore older
//! than the solar wind samples it sits beside.

use aurorawatch_types::{Metric, Reading};
use serde::Serialize;
use tracing::debug;

use super::record::DataRecord;
use super::schema::{FeedKind, FeedSchema, KINDEX, MAGNETOMETER, PLASMA};
use crate::error::{Error, Result};

/// All three feeds at one recency rank (0 = most recent).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MergedRecord {
    pub index: usize,
    pub magnetometer: DataRecord,
    pub plasma: DataRecord,
    pub kindex: DataRecord,
}

impl MergedRecord {
    pub fn feed(&self, kind: FeedKind) -> &DataRecord {
        match kind {
            FeedKind::Magnetometer => &self.magnetometer,
            FeedKind::Plasma => &self.plasma,
            FeedKind::KIndex => &self.kindex,
        }
    }

    /// Look up a field by name across all feeds.
    pub fn get(&self, name: &str) -> Option<Reading> {
        FeedKind::ALL
            .iter()
            .find_map(|kind| self.feed(*kind).get(name))
    }

    /// Reading for a scored metric. Missing if no feed supplied it.
    pub fn metric(&self, metric: Metric) -> Reading {
        self.get(metric.name()).unwrap_or(Reading::Missing)
    }
}

fn pick(records: &[DataRecord], index: usize, schema: &'static FeedSchema) -> DataRecord {
    records
        .get(index)
        .cloned()
        .unwrap_or_else(|| DataRecord::missing(schema))
}

/// Merged records for one ingest cycle, indexed by recency rank.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct MergedSet {
    records: Vec<MergedRecord>,
}

impl MergedSet {
    /// Merge per-feed records (each most recent first).
    ///
    /// The set is as long as the longest feed. Shorter or empty feeds
    /// contribute all-missing records for the ranks they lack.
    pub fn merge(magnetometer: &[DataRecord], plasma: &[DataRecord], kindex: &[DataRecord]) -> Self {
        let len = magnetometer.len().max(plasma.len()).max(kindex.len());
        debug!(
            magnetometer = magnetometer.len(),
            plasma = plasma.len(),
            kindex = kindex.len(),
            "Merging feeds into {} records",
            len
        );

        let records = (0..len)
            .map(|index| MergedRecord {
                index,
                magnetometer: pick(magnetometer, index, &MAGNETOMETER),
                plasma: pick(plasma, index, &PLASMA),
                kindex: pick(kindex, index, &KINDEX),
            })
            .collect();

        Self { records }
    }

    /// Record at a recency rank.
    pub fn get(&self, index: usize) -> Result<&MergedRecord> {
        self.records.get(index).ok_or(Error::IndexOutOfBounds {
            index,
            len: self.records.len(),
        })
    }

    /// The most recent record.
    pub fn latest(&self) -> Result<&MergedRecord> {
        self.get(0)
    }

    /// Number of ranks, i.e. the length of the longest feed.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records from most to least recent.
    pub fn iter(&self) -> impl Iterator<Item = &MergedRecord> {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::record::parse_feed;

    const MAG: &str = "\
2021 01 01  0000   59215      0    0    -2.0     1.2    -3.9     4.6   -57.9   149.0
2021 01 01  0001   59215     60    0    -2.1     1.3    -4.0     4.7   -58.3   148.2
";

    const PLASMA_TEXT: &str = "\
2021 01 01  0001   59215     60    0      6.0      410.0    1.0e+05
";

    #[test]
    fn test_merge_aligns_by_rank() {
        let set = MergedSet::merge(
            &parse_feed(MAG, &MAGNETOMETER),
            &parse_feed(PLASMA_TEXT, &PLASMA),
            &[],
        );
        assert_eq!(set.len(), 2);

        let latest = set.latest().unwrap();
        assert_eq!(latest.index, 0);
        assert_eq!(latest.metric(Metric::Bz), Reading::Present(-4.0));
        assert_eq!(latest.metric(Metric::Speed), Reading::Present(410.0));
        assert_eq!(latest.metric(Metric::Kp), Reading::Missing);

        // The plasma feed is shorter, so rank 1 has no plasma data.
        let older = set.get(1).unwrap();
        assert_eq!(older.metric(Metric::Bz), Reading::Present(-3.9));
        assert_eq!(older.metric(Metric::Density), Reading::Missing);
        assert!(older.plasma.is_empty());
    }

    #[test]
    fn test_out_of_bounds() {
        let set = MergedSet::merge(&parse_feed(MAG, &MAGNETOMETER), &[], &[]);
        match set.get(5) {
            Err(Error::IndexOutOfBounds { index, len }) => {
                assert_eq!(index, 5);
                assert_eq!(len, 2);
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_all_feeds_empty() {
        let set = MergedSet::merge(&[], &[], &[]);
        assert!(set.is_empty());
        assert!(set.latest().is_err());
    }

    #[test]
    fn test_lookup_non_scored_field() {
        let set = MergedSet::merge(&parse_feed(MAG, &MAGNETOMETER), &[], &[]);
        let latest = set.latest().unwrap();
        assert_eq!(latest.get("Bt"), Some(Reading::Present(4.7)));
        assert_eq!(latest.get("IonTemperature"), Some(Reading::Missing));
        assert_eq!(latest.get("Nope"), None);
    }
}
