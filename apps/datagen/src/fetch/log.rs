//! Cumulative fetch log: URL → saved file paths, kept as pretty JSON on disk
//! so successive runs accumulate instead of clobbering each other.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::warn;

use crate::errors::AppError;

pub type FetchLog = BTreeMap<String, Vec<String>>;

/// Loads an existing log. A missing file is an empty log; a malformed file is
/// treated as empty (it will be overwritten on the next store).
pub fn load(path: &Path) -> FetchLog {
    let Ok(contents) = std::fs::read_to_string(path) else {
        return FetchLog::new();
    };
    match serde_json::from_str(&contents) {
        Ok(log) => log,
        Err(e) => {
            warn!("Existing fetch log at {} is malformed ({e}); starting fresh", path.display());
            FetchLog::new()
        }
    }
}

/// Merges this run's results into an existing log. Same-URL entries are
/// replaced; everything else is preserved.
pub fn merge(existing: &mut FetchLog, new_entries: FetchLog) {
    existing.extend(new_entries);
}

/// Writes the log as pretty-printed JSON, creating parent directories.
pub fn store(path: &Path, log: &FetchLog) -> Result<(), AppError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, serde_json::to_string_pretty(log)?)?;
    Ok(())
}
