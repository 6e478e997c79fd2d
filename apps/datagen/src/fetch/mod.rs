//! Web fetcher — downloads pages and saves clause-sized text chunks.
//!
//! Per-URL pipeline: fetch → extract paragraph text → split into chunks →
//! keyword filter → per-URL cap → write `data/raw/<domain>-<n>.txt`. Fetch
//! failures and empty extractions are logged and skipped; nothing is retried.

pub mod chunk;
pub mod extract;
pub mod log;

use std::path::Path;
use std::time::Duration;

use reqwest::Client;
use tracing::{info, warn};
use url::Url;

use crate::errors::AppError;
use chunk::{contains_keyword, split_into_chunks};
use extract::extract_text_from_html;

pub const OUT_DIR: &str = "data/raw";
pub const LOG_FILE: &str = "data/fetch_log.json";

const USER_AGENT: &str = "DatasetFetcher/1.0 (+https://example)";
const FETCH_TIMEOUT: Duration = Duration::from_secs(20);

#[derive(Debug, Clone)]
pub struct FetchOptions {
    /// Approximate character budget per saved chunk.
    pub max_chars: usize,
    /// Chunks must contain at least one keyword; empty means keep everything.
    pub keywords: Vec<String>,
    /// Suppress all writes (chunk files and the fetch log) but still report
    /// what would be saved.
    pub dry_run: bool,
    /// Max chunks saved per URL; 0 means no limit.
    pub per_url: usize,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            max_chars: 800,
            keywords: Vec::new(),
            dry_run: false,
            per_url: 5,
        }
    }
}

pub fn build_client() -> Result<Client, AppError> {
    Ok(Client::builder()
        .user_agent(USER_AGENT)
        .timeout(FETCH_TIMEOUT)
        .build()?)
}

/// File-name prefix for a URL: the host with any leading `www.` stripped and
/// `:` replaced, or `unknown` when the URL has no usable host.
pub fn domain_for_url(url: &str) -> String {
    Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_owned))
        .map(|host| {
            host.strip_prefix("www.")
                .unwrap_or(&host)
                .replace(':', "-")
        })
        .unwrap_or_else(|| "unknown".to_string())
}

/// Chunks a page's text and decides which chunks to keep and under what file
/// names. The file number is the chunk's 1-based position in the full chunk
/// sequence, so keyword-filtered chunks leave gaps in the numbering.
pub fn plan_chunks(domain: &str, text: &str, options: &FetchOptions) -> Vec<(String, String)> {
    let chunks = split_into_chunks(text, options.max_chars);
    let mut planned = Vec::new();
    for (i, chunk) in chunks.into_iter().enumerate() {
        if options.per_url > 0 && planned.len() >= options.per_url {
            break;
        }
        if !options.keywords.is_empty() && !contains_keyword(&chunk, &options.keywords) {
            continue;
        }
        planned.push((format!("{domain}-{}.txt", i + 1), chunk));
    }
    planned
}

/// Writes planned chunks under `out_dir`, returning the paths as they appear
/// in the fetch log. With `dry_run` nothing touches the filesystem; the
/// would-be paths are still returned.
pub fn write_chunks(
    planned: &[(String, String)],
    out_dir: &Path,
    dry_run: bool,
) -> Result<Vec<String>, AppError> {
    let mut saved = Vec::new();
    for (name, contents) in planned {
        let out_path = out_dir.join(name);
        if !dry_run {
            std::fs::create_dir_all(out_dir)?;
            std::fs::write(&out_path, contents)?;
        }
        saved.push(out_path.display().to_string());
    }
    Ok(saved)
}

async fn fetch_page(client: &Client, url: &str) -> Result<String, AppError> {
    let response = client.get(url).send().await?.error_for_status()?;
    Ok(response.text().await?)
}

/// Fetches one URL and saves its surviving chunks. Network and HTTP failures
/// are per-URL: logged and skipped with an empty result. Write failures abort
/// the run.
pub async fn fetch_and_save(
    client: &Client,
    url: &str,
    out_dir: &Path,
    options: &FetchOptions,
) -> Result<Vec<String>, AppError> {
    info!("Fetching: {url}");
    let html = match fetch_page(client, url).await {
        Ok(html) => html,
        Err(e) => {
            warn!("Failed to fetch {url}: {e}");
            return Ok(Vec::new());
        }
    };

    let text = extract_text_from_html(&html);
    if text.is_empty() {
        warn!("No textual content extracted from {url}");
        return Ok(Vec::new());
    }

    let planned = plan_chunks(&domain_for_url(url), &text, options);
    let saved = write_chunks(&planned, out_dir, options.dry_run)?;
    info!("Saved {} chunks from {url}", saved.len());
    Ok(saved)
}
