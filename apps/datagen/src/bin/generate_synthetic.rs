//! Writes `data/generated.jsonl` full of synthetic clause samples.

use std::path::Path;

use anyhow::Result;

use datagen::config::Config;
use datagen::synthetic;

fn main() -> Result<()> {
    let config = Config::from_env()?;
    datagen::init_tracing(&config.rust_log);

    let mut rng = rand::thread_rng();
    synthetic::generate(config.num_samples, Path::new(synthetic::OUT_FILE), &mut rng)?;
    Ok(())
}
