//! Line extraction from SWPC flat files.
//!
//! Data lines start with a zero-padded `YYYY MM DD HHMM` prefix, so sorting
//! the raw lines in descending lexical order puts the newest sample first.
//! That only holds while the date columns stay fixed-width.

/// One tokenized data line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLine {
    pub tokens: Vec<String>,
}

impl RawLine {
    /// Split a line on runs of whitespace.
    pub fn tokenize(line: &str) -> Self {
        Self {
            tokens: line.split_whitespace().map(str::to_string).collect(),
        }
    }

    /// Token at a zero-based position.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.tokens.get(index).map(String::as_str)
    }

    /// Number of tokens on the line.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// True for a line with no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Re-join with single spaces.
    pub fn join(&self) -> String {
        self.tokens.join(" ")
    }
}

/// Whether a line carries data. Comments (`#`, `;`) and blanks do not.
fn is_data_line(line: &str) -> bool {
    line.chars().next().is_some_and(|c| c.is_ascii_digit())
}

/// Extract data lines from a raw text blob, most recent first.
///
/// A blob with no data lines gives an empty vector.
pub fn extract_lines(text: &str) -> Vec<RawLine> {
    let mut lines: Vec<&str> = text.lines().filter(|l| is_data_line(l)).collect();
    lines.sort_unstable_by(|a, b| b.cmp(a));
    lines.into_iter().map(RawLine::tokenize).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
:Data_list: ace_mag_1m.txt
# Prepared by the U.S. Dept. of Commerce, NOAA, Space Weather Prediction Center
#
#                Modified Seconds
# UT Date   Time  Julian  of the   ----------------  GSM Coordinates ---------------
# YR MO DA  HHMM    Day     Day    S     Bx      By      Bz      Bt     Lat.   Long.
#------------------------------------------------------------------------------------
2021 01 01  0001   59215     60    0    -2.1     1.3    -4.0     4.7   -58.3   148.2
2021 01 01  0000   59215      0    0    -2.0     1.2    -3.9     4.6   -57.9   149.0
2021 01 01  0002   59215    120    0    -2.3     1.1    -4.4     5.1   -59.8   154.4
";

    #[test]
    fn test_comments_and_headers_dropped() {
        let lines = extract_lines(SAMPLE);
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|l| l.len() == 13));
    }

    #[test]
    fn test_most_recent_first() {
        let lines = extract_lines(SAMPLE);
        assert_eq!(lines[0].get(3), Some("0002"));
        assert_eq!(lines[1].get(3), Some("0001"));
        assert_eq!(lines[2].get(3), Some("0000"));
    }

    #[test]
    fn test_semicolon_and_blank_lines_ignored() {
        let text = "; comment\n\n   \n2021 01 01  0000  1 2\n";
        let lines = extract_lines(text);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].tokens, vec!["2021", "01", "01", "0000", "1", "2"]);
    }

    #[test]
    fn test_indented_line_is_not_data() {
        let lines = extract_lines("  2021 01 01  0000  1 2\n");
        assert!(lines.is_empty());
    }

    #[test]
    fn test_empty_feed() {
        assert!(extract_lines("").is_empty());
        assert!(extract_lines("# only\n# comments\n").is_empty());
    }

    #[test]
    fn test_tokenize_is_idempotent() {
        let line = "2021 01 01  0000   59215      0    0    -2.0   1.2\t-3.9";
        let first = RawLine::tokenize(line);
        let second = RawLine::tokenize(&first.join());
        assert_eq!(first.len(), 10);
        assert_eq!(first.len(), line.split_whitespace().count());
        assert_eq!(second.len(), first.len());
        assert_eq!(first, second);
    }

    #[test]
    fn test_crlf_line_endings() {
        let lines = extract_lines("2021 01 01  0000  5.0\r\n2021 01 01  0001  6.0\r\n");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].get(4), Some("6.0"));
    }
}
