use anyhow::Result;
use std::io::{self, Write};

use crate::config::Config;

use super::util::{mask_api_key, prompt_string_with_default, prompt_timeout, read_trimmed_line};

pub(crate) fn run_setup() -> Result<()> {
    println!("🚀 Welcome to itinera setup!");
    println!("Let's configure your Gemini access.\n");

    let mut config = Config::builder().build()?;
    config.llm.api_key = prompt_api_key()?;
    config.llm.timeout_secs = prompt_timeout(config.llm.timeout_secs)?;
    config.models.generator =
        prompt_string_with_default("🤖 Generator model", &config.models.generator)?;

    config.validate()?;
    config.save()?;

    println!(
        "\n✅ Configuration saved to {}",
        Config::config_path()?.display()
    );
    println!("📋 Your configuration:");
    println!("   API Key: {}", mask_api_key(&config.llm.api_key));
    println!("   Base URL: {}", config.llm.base_url);
    println!("   Timeout: {}s", config.llm.timeout_secs);
    println!("   Model: {}", config.models.generator);
    println!("\n🎉 Setup complete! Plan your first trip with:");
    println!("   itinera            # interactive trip form");
    println!("   itinera kyoto      # pre-fill the destination");
    println!("   itinera --config --timeout 60  # adjust settings later\n");

    Ok(())
}

fn prompt_api_key() -> Result<String> {
    loop {
        print!("🔑 Enter your Gemini API key: ");
        io::stdout().flush()?;

        let key = read_trimmed_line()?;
        if key.is_empty() {
            println!("❌ API key cannot be empty. Please try again.");
            continue;
        }
        return Ok(key);
    }
}
