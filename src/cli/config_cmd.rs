use anyhow::Result;

use crate::config::Config;

use super::args::Cli;
use super::util::mask_api_key;

pub(crate) fn handle_config_direct(args: &Cli) -> Result<()> {
    let mut config = if Config::config_path()?.exists() {
        Config::load()?
    } else {
        Config::builder().build()?
    };

    if let Some(ref api_key) = args.api_key {
        config.llm.api_key = api_key.clone();
    }

    if let Some(timeout) = args.timeout {
        config.llm.timeout_secs = timeout;
    }

    if let Some(ref model) = args.model {
        config.models.generator = model.clone();
    }

    config.save()?;

    println!(
        "✅ Configuration saved to {}",
        Config::config_path()?.display()
    );
    println!("📋 Current configuration:");
    println!("   API Key: {}", mask_api_key(&config.llm.api_key));
    println!("   Base URL: {}", config.llm.base_url);
    println!("   Timeout: {}s", config.llm.timeout_secs);
    println!("   Model: {}", config.models.generator);

    Ok(())
}
