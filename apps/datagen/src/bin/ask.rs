//! One-shot chat call: send the fixed prompt pair, print the reply.

use anyhow::Result;
use tracing::info;

use datagen::config::Config;
use datagen::llm_client::prompts::{ASK_SYSTEM, ASK_USER};
use datagen::llm_client::{GroqClient, MODEL};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;
    datagen::init_tracing(&config.rust_log);

    let api_key = config.require_groq_api_key()?;
    let llm = GroqClient::new(api_key.to_string());
    info!("LLM client initialized (model: {MODEL})");

    let reply = llm.call_text(ASK_SYSTEM, ASK_USER).await?;
    println!("{reply}");
    Ok(())
}
