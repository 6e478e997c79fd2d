//! Input readers for the assembler. Both return raw records — trimming and
//! length checks happen in `validate`.

use std::collections::BTreeMap;
use std::path::Path;

use csv::StringRecord;
use tracing::info;

use crate::errors::AppError;
use crate::models::Record;

/// Header names accepted for the prompt column, in priority order.
const PROMPT_COLUMNS: &[&str] = &["prompt", "input", "text"];
/// Header names accepted for the completion column, in priority order.
const COMPLETION_COLUMNS: &[&str] = &["completion", "label", "output"];

/// Reads records from a labels CSV. A missing file yields no records (the
/// caller falls back to the raw-file directory). Rows without a prompt under
/// any accepted header are skipped.
pub fn from_csv(csv_path: &Path) -> Result<Vec<Record>, AppError> {
    let mut records = Vec::new();
    if !csv_path.exists() {
        return Ok(records);
    }

    let mut reader = csv::Reader::from_path(csv_path)?;
    let headers = reader.headers()?.clone();

    for row in reader.records() {
        let row = row?;

        let prompt = match first_column_value(&headers, &row, PROMPT_COLUMNS) {
            Some(p) => p.to_string(),
            None => continue,
        };
        let completion = first_column_value(&headers, &row, COMPLETION_COLUMNS)
            .unwrap_or_default()
            .to_string();

        let mut metadata = BTreeMap::new();
        metadata.insert("source".to_string(), csv_path.display().to_string());

        let record = match first_column_value(&headers, &row, &["id"]) {
            Some(id) => Record::with_id(id.to_string(), prompt, completion, metadata),
            None => Record::new(prompt, completion, metadata),
        };
        records.push(record);
    }
    Ok(records)
}

fn first_column_value<'a>(
    headers: &StringRecord,
    row: &'a StringRecord,
    columns: &[&str],
) -> Option<&'a str> {
    columns
        .iter()
        .filter_map(|name| {
            headers
                .iter()
                .position(|h| h == *name)
                .and_then(|i| row.get(i))
        })
        .find(|value| !value.is_empty())
}

/// Reads all `.txt` files from a directory, sorted by name. Each non-empty
/// file becomes one record: the whole file is the clause, wrapped in the
/// shared analysis prompt. A missing directory logs a pointer and yields
/// nothing.
pub fn from_raw_files(raw_dir: &Path) -> Result<Vec<Record>, AppError> {
    let mut records = Vec::new();
    if !raw_dir.exists() {
        info!(
            "No {} directory found. Create it and add .txt files, or provide a labels CSV.",
            raw_dir.display()
        );
        return Ok(records);
    }

    let mut paths: Vec<_> = std::fs::read_dir(raw_dir)?
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "txt"))
        .collect();
    paths.sort();

    for path in paths {
        let text = std::fs::read_to_string(&path)?;
        let text = text.trim();
        if text.is_empty() {
            continue;
        }

        let mut metadata = BTreeMap::new();
        let source = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        metadata.insert("source".to_string(), source);

        records.push(Record::new(
            Record::analysis_prompt(text),
            String::new(),
            metadata,
        ));
    }
    Ok(records)
}
