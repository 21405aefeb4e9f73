//! File-based feed source.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use super::FeedSource;

/// A source that reads feed text from a local file, e.g. a mirrored
/// `ace_swepam_1m.txt`.
///
/// The file's modification time is tracked and text is only returned when
/// the file has been updated since the last successful read.
#[derive(Debug)]
pub struct FileSource {
    path: PathBuf,
    description: String,
    last_error: Option<String>,
    last_modified: Option<SystemTime>,
}

impl FileSource {
    /// Create a source for `path`. Nothing is read until the first poll.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let description = format!("file: {}", path.display());
        Self {
            path,
            description,
            last_error: None,
            last_modified: None,
        }
    }

    /// The file this source reads.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn modified_time(&self) -> Option<SystemTime> {
        fs::metadata(&self.path).ok()?.modified().ok()
    }

    fn read_file(&mut self) -> Option<String> {
        match fs::read(&self.path) {
            Ok(bytes) => {
                self.last_error = None;
                // Feeds are ASCII; tolerate stray bytes rather than drop the file.
                Some(String::from_utf8_lossy(&bytes).into_owned())
            }
            Err(e) => {
                self.last_error = Some(format!("Read error: {}", e));
                None
            }
        }
    }
}

impl FeedSource for FileSource {
    fn poll(&mut self) -> Option<String> {
        let current_modified = self.modified_time();

        let file_changed = match (&self.last_modified, &current_modified) {
            (None, _) => true,
            (Some(_), None) => false,
            (Some(last), Some(current)) => current > last,
        };

        if file_changed {
            if let Some(text) = self.read_file() {
                self.last_modified = current_modified;
                return Some(text);
            }
        }

        None
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::time::Duration;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = "\
# YR MO DA  HHMM    Day     Day    S    Density    Speed    Temperature
2021 01 01  0000   59215      0    0      5.0      400.0    1.0e+05
";

    #[test]
    fn test_file_source_new() {
        let source = FileSource::new("/tmp/ace_swepam_1m.txt");
        assert_eq!(source.path(), Path::new("/tmp/ace_swepam_1m.txt"));
        assert_eq!(source.description(), "file: /tmp/ace_swepam_1m.txt");
        assert!(source.error().is_none());
    }

    #[test]
    fn test_file_source_poll_reads_once() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", SAMPLE).unwrap();

        let mut source = FileSource::new(file.path());

        let text = source.poll();
        assert_eq!(text.as_deref(), Some(SAMPLE));

        // Unchanged file yields nothing new
        assert!(source.poll().is_none());
    }

    /// Push the file's mtime past the last read so coarse filesystem
    /// timestamps cannot hide the rewrite.
    fn bump_modified(path: &Path) {
        let later = SystemTime::now() + Duration::from_secs(5);
        fs::File::options()
            .write(true)
            .open(path)
            .unwrap()
            .set_modified(later)
            .unwrap();
    }

    #[test]
    fn test_file_source_detects_changes() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", SAMPLE).unwrap();

        let mut source = FileSource::new(file.path());
        assert_eq!(source.poll().as_deref(), Some(SAMPLE));
        assert!(source.poll().is_none());

        let updated = "2021 01 01  0001   59215     60    0      6.0      410.0    1.1e+05\n";
        fs::write(file.path(), updated).unwrap();
        bump_modified(file.path());

        assert_eq!(source.poll().as_deref(), Some(updated));
        assert!(source.poll().is_none());
    }

    #[test]
    fn test_file_source_missing_file() {
        let mut source = FileSource::new("/nonexistent/path/ace_mag_1m.txt");

        assert!(source.poll().is_none());
        assert!(source.error().unwrap().contains("Read error"));
    }

    #[test]
    fn test_file_source_non_utf8() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"2021 01 01  0000 \xff 5.0\n").unwrap();

        let mut source = FileSource::new(file.path());
        let text = source.poll().unwrap();
        assert!(text.starts_with("2021 01 01"));
        assert!(source.error().is_none());
    }
}
