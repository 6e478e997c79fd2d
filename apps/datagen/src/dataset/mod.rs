//! Dataset assembler — builds `data/sample.jsonl` from whichever source exists.
//!
//! Flow: read CSV → fall back to raw `.txt` files → sanitize + validate → write
//! JSON-lines. A run that finds no input is a soft outcome, not an error.

pub mod sources;
pub mod validate;
pub mod writer;

use std::path::Path;

use tracing::info;

use crate::errors::AppError;

pub const RAW_DIR: &str = "data/raw";
pub const CSV_INPUT: &str = "data/raw_labels.csv";
pub const OUT_FILE: &str = "data/sample.jsonl";

/// Runs the full assembly pipeline. Returns the number of records written;
/// zero means neither source yielded anything and no file was touched.
///
/// The CSV source wins whenever it yields at least one record — the raw-file
/// directory is not read in that case.
pub fn assemble(
    csv_path: &Path,
    raw_dir: &Path,
    out_path: &Path,
    max_records: Option<usize>,
) -> Result<usize, AppError> {
    let mut records = sources::from_csv(csv_path)?;
    if records.is_empty() {
        records = sources::from_raw_files(raw_dir)?;
    }
    if records.is_empty() {
        info!(
            "No samples found. Add .txt files to {} or a CSV at {}",
            raw_dir.display(),
            csv_path.display()
        );
        return Ok(0);
    }

    let records = validate::validate(records, max_records);
    writer::write_jsonl(&records, out_path)?;
    Ok(records.len())
}
