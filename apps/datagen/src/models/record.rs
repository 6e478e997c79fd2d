use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Prompts longer than this are dropped outright (not truncated).
pub const MAX_PROMPT_CHARS: usize = 50_000;

/// Instruction prepended to every clause before it becomes a training prompt.
/// Shared by the assembler's raw-file source and the synthetic generator so the
/// dataset stays uniform no matter which tool produced a record.
pub const ANALYSIS_PROMPT_PREFIX: &str =
    "Analyze the following contract clause for regulatory compliance and recommend fixes:\n\n";

/// One dataset sample. Serialized as a single JSON object per output line.
///
/// Records are created in memory and written immediately — there is no update
/// or deletion path, and `id` uniqueness is by construction (v4 UUID), not
/// enforced on read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    pub prompt: String,
    pub completion: String,
    pub metadata: BTreeMap<String, String>,
}

impl Record {
    /// Builds a record with a fresh v4 UUID id.
    pub fn new(prompt: String, completion: String, metadata: BTreeMap<String, String>) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), prompt, completion, metadata)
    }

    pub fn with_id(
        id: String,
        prompt: String,
        completion: String,
        metadata: BTreeMap<String, String>,
    ) -> Self {
        Self {
            id,
            prompt,
            completion,
            metadata,
        }
    }

    /// Wraps a bare clause in the shared analysis instruction.
    pub fn analysis_prompt(clause: &str) -> String {
        format!("{ANALYSIS_PROMPT_PREFIX}{clause}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_mints_unique_ids() {
        let a = Record::new("p".into(), String::new(), BTreeMap::new());
        let b = Record::new("p".into(), String::new(), BTreeMap::new());
        assert!(!a.id.is_empty());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_serializes_with_fixed_field_order() {
        let mut metadata = BTreeMap::new();
        metadata.insert("source".to_string(), "x.txt".to_string());
        let r = Record::with_id("1".into(), "p".into(), "c".into(), metadata);
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(
            json,
            r#"{"id":"1","prompt":"p","completion":"c","metadata":{"source":"x.txt"}}"#
        );
    }

    #[test]
    fn test_analysis_prompt_keeps_clause_verbatim() {
        let p = Record::analysis_prompt("The Provider shall…");
        assert!(p.starts_with(ANALYSIS_PROMPT_PREFIX));
        assert!(p.ends_with("The Provider shall…"));
    }
}
