//! Per-source log of previously seen notices.
//!
//! Each monitored source owns one append-only file holding one JSON record
//! per line (see [`StoredNotice`]). The file is created on first append,
//! grows for the life of the deployment, and is never compacted or rotated.
//! The process is the only writer and handles sources strictly one after
//! another, so no locking is used. Durability is best-effort append; fsync
//! is not forced.

use crate::models::StoredNotice;
use std::collections::HashSet;
use std::error::Error;
use std::io::ErrorKind;
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, instrument, warn};

/// Read the set of already-seen notice titles from a store file.
///
/// A missing file yields the empty set. Lines that fail to parse as a
/// record are skipped with a warning so a hand-edited or legacy file does
/// not abort the run.
#[instrument(level = "debug", skip_all, fields(path = %path.display()))]
pub async fn read_titles(path: &Path) -> Result<HashSet<String>, Box<dyn Error>> {
    let text = match fs::read_to_string(path).await {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(HashSet::new()),
        Err(e) => return Err(e.into()),
    };

    let mut titles = HashSet::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match serde_json::from_str::<StoredNotice>(line) {
            Ok(record) => {
                titles.insert(record.title);
            }
            Err(e) => warn!(error = %e, "Skipping malformed store line"),
        }
    }

    debug!(count = titles.len(), "Loaded seen titles");
    Ok(titles)
}

/// Append one notice record to a store file, creating the file and its
/// parent directories as needed.
#[instrument(level = "debug", skip_all, fields(path = %path.display(), title = %record.title))]
pub async fn append(path: &Path, record: &StoredNotice) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).await?;
        }
    }

    let mut line = serde_json::to_string(record)?;
    line.push('\n');

    let mut file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .await?;
    file.write_all(line.as_bytes()).await?;

    Ok(())
}
