//! Synthetic generator — fully self-contained clause samples.
//!
//! Each sample: uniform category → uniform template → placeholder fill from
//! fixed pools → canned risk/recommendation completion. The binary drives this
//! with an unseeded thread RNG; tests pass a seeded one.

pub mod review;
pub mod templates;

use std::collections::BTreeMap;
use std::path::Path;

use rand::Rng;

use crate::dataset::writer::write_jsonl;
use crate::errors::AppError;
use crate::models::Record;

pub const OUT_FILE: &str = "data/generated.jsonl";

/// Generates `n` records in memory.
pub fn generate_records(n: usize, rng: &mut impl Rng) -> Vec<Record> {
    (0..n)
        .map(|_| {
            let clause_type = templates::random_clause_type(rng);
            let clause = templates::render_clause(clause_type, rng);
            let completion = review::make_completion(&clause, clause_type, rng);

            let mut metadata = BTreeMap::new();
            metadata.insert("type".to_string(), clause_type.as_str().to_string());

            Record::new(Record::analysis_prompt(&clause), completion, metadata)
        })
        .collect()
}

/// Generates `n` records and writes them to `out_path` as JSON-lines.
pub fn generate(n: usize, out_path: &Path, rng: &mut impl Rng) -> Result<usize, AppError> {
    let records = generate_records(n, rng);
    write_jsonl(&records, out_path)?;
    Ok(records.len())
}
