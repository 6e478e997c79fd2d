use anyhow::{Context, Result};

/// Configuration loaded from environment variables (a local `.env` is honored).
///
/// `GROQ_API_KEY` is only required by the `ask` binary, so it is optional here
/// and enforced by `require_groq_api_key` on the path that needs it. Callers
/// receive the key explicitly — nothing reads the environment after startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub groq_api_key: Option<String>,
    /// Sample count for the synthetic generator.
    pub num_samples: usize,
    /// Optional cap on assembled records; unset means keep everything valid.
    pub max_records: Option<usize>,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            groq_api_key: std::env::var("GROQ_API_KEY").ok(),
            num_samples: std::env::var("NUM_SAMPLES")
                .unwrap_or_else(|_| "200".to_string())
                .parse::<usize>()
                .context("NUM_SAMPLES must be a non-negative integer")?,
            max_records: match std::env::var("MAX_RECORDS") {
                Ok(v) => Some(
                    v.parse::<usize>()
                        .context("MAX_RECORDS must be a non-negative integer")?,
                ),
                Err(_) => None,
            },
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    pub fn require_groq_api_key(&self) -> Result<&str> {
        self.groq_api_key
            .as_deref()
            .context("Required environment variable 'GROQ_API_KEY' is not set")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(groq_api_key: Option<String>) -> Config {
        Config {
            groq_api_key,
            num_samples: 200,
            max_records: None,
            rust_log: "info".to_string(),
        }
    }

    #[test]
    fn test_missing_api_key_only_fails_when_required() {
        let c = config(None);
        let err = c.require_groq_api_key().unwrap_err();
        assert!(err.to_string().contains("GROQ_API_KEY"));
    }

    #[test]
    fn test_present_api_key_passes_through() {
        let c = config(Some("gsk_test".to_string()));
        assert_eq!(c.require_groq_api_key().unwrap(), "gsk_test");
    }
}
