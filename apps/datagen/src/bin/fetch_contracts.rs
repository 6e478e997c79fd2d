//! Fetches public contract/terms pages and saves clause-sized chunks into
//! `data/raw/`, logging URL → saved-paths mappings to `data/fetch_log.json`.
//!
//! Only fetch URLs you have permission to crawl.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use tracing::info;

use datagen::config::Config;
use datagen::fetch::{self, log::FetchLog, FetchOptions};

#[derive(Parser)]
#[command(
    name = "fetch_contracts",
    about = "Fetch contract/terms text from URLs into data/raw/"
)]
struct Cli {
    /// Path to file with URLs (one per line)
    #[arg(long, short = 'i')]
    input: Option<PathBuf>,

    /// Single URL to fetch
    #[arg(long, short = 'u')]
    url: Option<String>,

    /// Max number of URLs to process from input (0 = no limit)
    #[arg(long, default_value_t = 0)]
    limit: usize,

    /// Approx max chars per saved chunk
    #[arg(long, default_value_t = 800)]
    max_chars: usize,

    /// Comma-separated keywords to filter chunks (optional)
    #[arg(long, short = 'k')]
    keywords: Option<String>,

    /// Don't write files; just show what would be saved
    #[arg(long)]
    dry_run: bool,

    /// Max chunks per URL to save (0 = no limit)
    #[arg(long, default_value_t = 5)]
    per_url: usize,
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;
    datagen::init_tracing(&config.rust_log);
    let cli = Cli::parse();

    let mut urls: Vec<String> = if let Some(url) = cli.url {
        vec![url]
    } else if let Some(input) = cli.input {
        if !input.exists() {
            info!("Input file not found: {}", input.display());
            return Ok(());
        }
        std::fs::read_to_string(&input)?
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_owned)
            .collect()
    } else {
        info!("Provide --url or --input file with URLs.");
        return Ok(());
    };

    if cli.limit > 0 {
        urls.truncate(cli.limit);
    }

    let keywords: Vec<String> = cli
        .keywords
        .map(|list| {
            list.split(',')
                .map(str::trim)
                .filter(|k| !k.is_empty())
                .map(str::to_owned)
                .collect()
        })
        .unwrap_or_default();

    let options = FetchOptions {
        max_chars: cli.max_chars,
        keywords,
        dry_run: cli.dry_run,
        per_url: cli.per_url,
    };

    let client = fetch::build_client()?;
    let out_dir = Path::new(fetch::OUT_DIR);

    let mut saved_map = FetchLog::new();
    for url in &urls {
        let saved = fetch::fetch_and_save(&client, url, out_dir, &options).await?;
        saved_map.insert(url.clone(), saved);
    }

    if !cli.dry_run {
        let log_path = Path::new(fetch::LOG_FILE);
        let mut log = fetch::log::load(log_path);
        fetch::log::merge(&mut log, saved_map);
        fetch::log::store(log_path, &log)?;
        info!("Fetch log written to {}", log_path.display());
    }

    Ok(())
}
