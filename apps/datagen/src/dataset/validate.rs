use tracing::warn;

use crate::models::record::MAX_PROMPT_CHARS;
use crate::models::Record;

/// Trims the text fields in place.
pub fn sanitize(record: &mut Record) {
    record.prompt = record.prompt.trim().to_string();
    record.completion = record.completion.trim().to_string();
}

/// Sanitizes and filters a batch: empty prompts are dropped silently,
/// over-length prompts are dropped with a warning (never truncated).
/// `max_records` caps the output while preserving input order.
pub fn validate(records: Vec<Record>, max_records: Option<usize>) -> Vec<Record> {
    let mut valid = Vec::new();
    for mut record in records {
        sanitize(&mut record);
        if record.prompt.is_empty() {
            continue;
        }
        if record.prompt.chars().count() > MAX_PROMPT_CHARS {
            warn!("Skipping too-long sample {}", record.id);
            continue;
        }
        valid.push(record);
        if let Some(max) = max_records {
            if valid.len() >= max {
                break;
            }
        }
    }
    valid
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn record(prompt: &str) -> Record {
        Record::new(prompt.to_string(), String::new(), BTreeMap::new())
    }

    #[test]
    fn test_trims_fields() {
        let mut r = Record::new("  padded  ".into(), "  done  ".into(), BTreeMap::new());
        sanitize(&mut r);
        assert_eq!(r.prompt, "padded");
        assert_eq!(r.completion, "done");
    }

    #[test]
    fn test_drops_empty_prompts() {
        let out = validate(vec![record("   "), record("kept")], None);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].prompt, "kept");
    }

    #[test]
    fn test_drops_over_length_prompts() {
        let long = "x".repeat(MAX_PROMPT_CHARS + 1);
        let out = validate(vec![record(&long), record("short")], None);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].prompt, "short");
    }

    #[test]
    fn test_keeps_prompt_at_exact_limit() {
        let at_limit = "x".repeat(MAX_PROMPT_CHARS);
        let out = validate(vec![record(&at_limit)], None);
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn test_max_records_truncates_in_order() {
        let out = validate(vec![record("a"), record("b"), record("c")], Some(2));
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].prompt, "a");
        assert_eq!(out[1].prompt, "b");
    }
}
