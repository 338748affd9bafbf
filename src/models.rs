//! Data models for notices and their persisted representations.
//!
//! Two structures flow through the pipeline:
//! - [`Notice`]: a (title, href) pair as extracted from a board page, with
//!   the href still relative to the board's base URL
//! - [`StoredNotice`]: the durable record written to a source's store file,
//!   one JSON object per line, after the link has been resolved

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A notice as extracted from a board page.
///
/// The `href` is carried exactly as it appears in the page markup and is
/// resolved against the configured base URL only when the notice turns out
/// to be new.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Trimmed display text of the notice, with inline badges removed.
    pub title: String,
    /// The raw href attribute of the notice's anchor, usually page-relative.
    pub href: String,
}

/// One line of a notice store file.
///
/// Store files are JSON Lines: each record is serialized on its own line and
/// the file only ever grows. The `title` field is the deduplication key and
/// is compared by exact match.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoredNotice {
    /// Trimmed notice title, the deduplication key.
    pub title: String,
    /// Absolute URL of the notice page.
    pub link: String,
    /// When this notice was first recorded.
    pub seen_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stored_notice_round_trip() {
        let record = StoredNotice {
            title: "Scholarship Application Opens".to_string(),
            link: "https://example.edu/board/123".to_string(),
            seen_at: Utc::now(),
        };

        let line = serde_json::to_string(&record).unwrap();
        assert!(line.contains("\"title\""));
        assert!(!line.contains('\n'));

        let parsed: StoredNotice = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed.title, record.title);
        assert_eq!(parsed.link, record.link);
    }

    #[test]
    fn test_titles_with_embedded_newlines_stay_one_line() {
        // A title containing control characters must not break the
        // line-oriented store format.
        let record = StoredNotice {
            title: "Line one\nline two".to_string(),
            link: "https://example.edu/board/9".to_string(),
            seen_at: Utc::now(),
        };

        let line = serde_json::to_string(&record).unwrap();
        assert!(!line.contains('\n'));
        let parsed: StoredNotice = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed.title, "Line one\nline two");
    }
}
