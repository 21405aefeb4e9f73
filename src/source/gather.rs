//! Concurrent retrieval of all three feeds.

use std::future::Future;

use anyhow::Result;
use tracing::warn;

use crate::feed::{parse_feed, FeedKind, MergedSet, KINDEX, MAGNETOMETER, PLASMA};

/// Raw text of the three feeds from one fetch round.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedTexts {
    pub magnetometer: String,
    pub plasma: String,
    pub kindex: String,
}

impl FeedTexts {
    /// Parse and merge all three feeds.
    pub fn merge(&self) -> MergedSet {
        MergedSet::merge(
            &parse_feed(&self.magnetometer, &MAGNETOMETER),
            &parse_feed(&self.plasma, &PLASMA),
            &parse_feed(&self.kindex, &KINDEX),
        )
    }
}

fn or_empty(kind: FeedKind, fetched: Result<String>) -> String {
    fetched.unwrap_or_else(|e| {
        warn!("Fetching {} feed failed: {:#}", kind, e);
        String::new()
    })
}

/// Run the three fetches concurrently and wait for all of them.
///
/// A failed fetch is logged and treated as an empty feed; it does not
/// cancel the others. Timeouts and retries belong to the futures passed in.
///
/// ```
/// use aurorawatch::gather;
///
/// # tokio_test::block_on(async {
/// let texts = gather(
///     async { Ok::<_, anyhow::Error>("2021 01 01  0000 ...".to_string()) },
///     async { Ok::<_, anyhow::Error>(String::new()) },
///     async { Err::<String, _>(anyhow::anyhow!("connection refused")) },
/// )
/// .await;
/// assert!(texts.kindex.is_empty());
/// # });
/// ```
pub async fn gather<M, P, K>(magnetometer: M, plasma: P, kindex: K) -> FeedTexts
where
    M: Future<Output = Result<String>>,
    P: Future<Output = Result<String>>,
    K: Future<Output = Result<String>>,
{
    let (magnetometer, plasma, kindex) = tokio::join!(magnetometer, plasma, kindex);

    FeedTexts {
        magnetometer: or_empty(FeedKind::Magnetometer, magnetometer),
        plasma: or_empty(FeedKind::Plasma, plasma),
        kindex: or_empty(FeedKind::KIndex, kindex),
    }
}
