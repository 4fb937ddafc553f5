//! JSON snapshots of the entry list. This is the CLI's input/output adapter,
//! not a storage engine: a snapshot is a plain JSON array of entries.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::entry::MoodEntry;

pub fn load_entries(path: impl AsRef<Path>) -> Result<Vec<MoodEntry>> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read entries snapshot {}", path.display()))?;
    let entries: Vec<MoodEntry> = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse entries snapshot {}", path.display()))?;
    tracing::debug!("loaded {} entries from {}", entries.len(), path.display());
    Ok(entries)
}

pub fn save_entries(path: impl AsRef<Path>, entries: &[MoodEntry]) -> Result<()> {
    let path = path.as_ref();
    let raw = serde_json::to_string_pretty(entries).context("failed to serialize entries")?;
    fs::write(path, raw)
        .with_context(|| format!("failed to write entries snapshot {}", path.display()))?;
    Ok(())
}
