//! Channel-based feed source.
//!
//! Lets an external fetcher push freshly retrieved feed text through a
//! tokio watch channel.

use tokio::sync::watch;

use super::FeedSource;

/// A source fed through a watch channel.
///
/// Only the most recent text is kept; intermediate pushes between two polls
/// are skipped.
///
/// # Example
///
/// ```
/// use aurorawatch::{ChannelSource, FeedSource};
///
/// let (tx, mut source) = ChannelSource::create("ftp.swpc.noaa.gov/ace_mag_1m.txt");
/// tx.send("2021 01 01  0000  ...".to_string()).unwrap();
/// assert!(source.poll().is_some());
/// ```
#[derive(Debug)]
pub struct ChannelSource {
    receiver: watch::Receiver<String>,
    description: String,
}

impl ChannelSource {
    /// Wrap an existing receiver. Polls return only text the receiver has
    /// not yet seen.
    pub fn new(receiver: watch::Receiver<String>, source_description: &str) -> Self {
        Self {
            receiver,
            description: format!("channel: {}", source_description),
        }
    }

    /// Create a channel pair. Push text with the returned sender.
    pub fn create(source_description: &str) -> (watch::Sender<String>, Self) {
        let (tx, rx) = watch::channel(String::new());
        (tx, Self::new(rx, source_description))
    }
}

impl FeedSource for ChannelSource {
    fn poll(&mut self) -> Option<String> {
        if self.receiver.has_changed().unwrap_or(false) {
            Some(self.receiver.borrow_and_update().clone())
        } else {
            None
        }
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn error(&self) -> Option<&str> {
        None
    }
}
