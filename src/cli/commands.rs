use anyhow::Result;

use crate::client::set_verbose_logging;
use crate::config::Config;

use super::args::Cli;
use super::config_cmd;
use super::plan;
use super::setup;

pub(crate) async fn run(cli: Cli) -> Result<()> {
    set_verbose_logging(cli.verbose);

    // Handle setup flag (no config required)
    if cli.setup {
        return setup::run_setup();
    }

    // Handle config flags
    if cli.config || cli.api_key.is_some() || cli.timeout.is_some() || cli.model.is_some() {
        return config_cmd::handle_config_direct(&cli);
    }

    // Default action: the trip form. Loading the config fails here when no
    // API key is configured anywhere.
    let config = Config::load()?;
    plan::handle_plan(cli.destination, &config).await
}
