//! Assembles `data/sample.jsonl` from the labels CSV or raw `.txt` files.

use std::path::Path;

use anyhow::Result;

use datagen::config::Config;
use datagen::dataset;

fn main() -> Result<()> {
    let config = Config::from_env()?;
    datagen::init_tracing(&config.rust_log);

    dataset::assemble(
        Path::new(dataset::CSV_INPUT),
        Path::new(dataset::RAW_DIR),
        Path::new(dataset::OUT_FILE),
        config.max_records,
    )?;
    Ok(())
}
