use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::errors::AppError;
use crate::models::Record;

/// Writes records as JSON-lines: one compact object per line, UTF-8,
/// overwriting any existing file. Parent directories are created as needed.
pub fn write_jsonl(records: &[Record], out_path: &Path) -> Result<(), AppError> {
    if let Some(parent) = out_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let file = File::create(out_path)?;
    let mut writer = BufWriter::new(file);
    for record in records {
        let line = serde_json::to_string(record)?;
        writeln!(writer, "{line}")?;
    }
    writer.flush()?;

    info!("Wrote {} samples to {}", records.len(), out_path.display());
    Ok(())
}
