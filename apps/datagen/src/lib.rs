//! Dataset tooling for contract-clause (prompt, completion) pairs.
//!
//! Four independent binaries share this library: `ask` (one-shot LLM call),
//! `create_dataset` (CSV / raw-file assembler), `fetch_contracts` (web fetcher),
//! and `generate_synthetic` (template-based generator). Each runs top to bottom
//! and exits; the only thing they share is the record shape and the `data/`
//! file-naming convention.

pub mod config;
pub mod dataset;
pub mod errors;
pub mod fetch;
pub mod llm_client;
pub mod models;
pub mod synthetic;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes structured logging for a binary. `RUST_LOG` wins when set;
/// otherwise everything logs at `level`. The default filter is global rather
/// than per-crate so events from the binary targets are kept too.
pub fn init_tracing(level: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with(tracing_subscriber::fmt::layer())
        .init();
}
