//! Feed text sources.
//!
//! Fetching the SWPC files (FTP, HTTP, a local mirror) is left to the
//! caller. This module only defines how raw text reaches the parser: a
//! [`FeedSource`] per feed that is polled for new text, and [`gather`] for
//! fetchers that retrieve all three feeds concurrently.

mod channel;
mod file;
mod gather;

pub use channel::ChannelSource;
pub use file::FileSource;
pub use gather::{gather, FeedTexts};

use std::fmt::Debug;

/// Trait for receiving raw feed text.
///
/// # Example
///
/// ```
/// use aurorawatch::{FeedSource, FileSource};
///
/// let mut source = FileSource::new("ace_mag_1m.txt");
/// if let Some(text) = source.poll() {
///     println!("Got {} bytes", text.len());
/// }
/// ```
pub trait FeedSource: Send + Debug {
    /// Poll for the latest feed text.
    ///
    /// Returns `Some(text)` if new text is available, `None` otherwise.
    /// This method should be non-blocking.
    fn poll(&mut self) -> Option<String>;

    /// Returns a human-readable description of the source.
    fn description(&self) -> &str;

    /// Returns the error message from the last poll, if any.
    fn error(&self) -> Option<&str>;
}
