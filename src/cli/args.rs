use anyhow::Result;
use clap::Parser;

use super::commands;

/// Entry point for the `itinera` command-line interface.
#[derive(Debug, Parser)]
#[command(
    name = "itinera",
    about = "AI-powered travel itinerary generator",
    version,
    long_about = None
)]
pub struct Cli {
    /// Enable verbose logging of LLM requests and responses
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Interactive setup for first-time configuration
    #[arg(long = "setup")]
    pub setup: bool,

    /// Configure itinera settings
    #[arg(long)]
    pub config: bool,

    /// Set the Gemini API key
    #[arg(long)]
    pub api_key: Option<String>,

    /// Set the request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Set the generator model identifier
    #[arg(long)]
    pub model: Option<String>,

    /// Destination words typed after `itinera` (pre-fills the form)
    #[arg(trailing_var_arg = true)]
    pub destination: Vec<String>,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        commands::run(self).await
    }
}
