use thiserror::Error;

/// Application-level error type shared by the library pipelines.
///
/// Per-item problems (empty prompt, unreachable URL, empty extraction) are
/// skipped and logged, not raised; this enum covers the failures that abort a
/// run. The LLM client has its own error type (`llm_client::LlmError`).
#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}
