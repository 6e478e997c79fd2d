/// Splits extracted text into clause-sized chunks.
///
/// Paragraphs (lines, trimmed, empties dropped) are grouped greedily: a
/// paragraph joins the current chunk while the running length (each paragraph
/// counted with one separator char) stays within `max_chars`. A single
/// paragraph longer than the budget becomes its own oversized chunk rather
/// than being cut. Paragraphs inside a chunk are joined with blank lines.
pub fn split_into_chunks(text: &str, max_chars: usize) -> Vec<String> {
    let paragraphs: Vec<&str> = text
        .split('\n')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();

    let mut chunks = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut current_len = 0usize;

    for paragraph in paragraphs {
        let len = paragraph.chars().count();
        if current_len + len + 1 <= max_chars {
            current.push(paragraph);
            current_len += len + 1;
        } else {
            if !current.is_empty() {
                chunks.push(current.join("\n\n"));
            }
            current = vec![paragraph];
            current_len = len + 1;
        }
    }
    if !current.is_empty() {
        chunks.push(current.join("\n\n"));
    }
    chunks
}

/// Case-insensitive any-keyword substring check.
pub fn contains_keyword(text: &str, keywords: &[String]) -> bool {
    let lower = text.to_lowercase();
    keywords
        .iter()
        .any(|keyword| lower.contains(&keyword.to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunks_stay_within_budget() {
        let text = "aaaa\nbbbb\ncccc\ndddd";
        let chunks = split_into_chunks(text, 11);
        assert!(chunks.iter().all(|c| c.chars().count() <= 11));
        // 4+1 + 4+1 = 10 fits; the third paragraph starts a new chunk.
        assert_eq!(chunks, vec!["aaaa\n\nbbbb", "cccc\n\ndddd"]);
    }

    #[test]
    fn test_oversized_paragraph_becomes_own_chunk() {
        let long = "x".repeat(50);
        let text = format!("short\n{long}\ntail");
        let chunks = split_into_chunks(&text, 10);
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[1], long);
        assert!(chunks[1].chars().count() > 10);
    }

    #[test]
    fn test_reassembly_preserves_paragraph_order() {
        let text = "one\ntwo\nthree\nfour\nfive";
        let chunks = split_into_chunks(text, 12);
        let rejoined: Vec<&str> = chunks
            .iter()
            .flat_map(|c| c.split("\n\n"))
            .collect();
        assert_eq!(rejoined, vec!["one", "two", "three", "four", "five"]);
    }

    #[test]
    fn test_blank_lines_dropped() {
        let chunks = split_into_chunks("a\n\n   \nb", 100);
        assert_eq!(chunks, vec!["a\n\nb"]);
    }

    #[test]
    fn test_empty_text_yields_no_chunks() {
        assert!(split_into_chunks("", 100).is_empty());
        assert!(split_into_chunks("\n  \n", 100).is_empty());
    }

    #[test]
    fn test_keyword_match_is_case_insensitive() {
        let keywords = vec!["Liability".to_string(), "privacy".to_string()];
        assert!(contains_keyword("limitation of LIABILITY", &keywords));
        assert!(contains_keyword("Privacy Policy", &keywords));
        assert!(!contains_keyword("delivery schedule", &keywords));
    }
}
