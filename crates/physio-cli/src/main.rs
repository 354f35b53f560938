use clap::Parser;
use eyre::Result;
use tracing::{info, warn};

use physio_cli::cli::{Cli, Command};
use physio_cli::config::CURRENT_VERSION;
use physio_cli::{commands, config, logging};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let loaded = config::load_or_default();
    let log_format = cli
        .log_format
        .or_else(|| loaded.as_ref().ok().map(|l| l.config.log_format))
        .unwrap_or_default();
    logging::init_tracing(log_format);

    // `config init --force` must work even when the file on disk is unreadable.
    if let Command::Config { action } = &cli.command {
        if let Err(e) = &loaded {
            warn!(error = %e, "ignoring unreadable config");
        }
        return commands::run_config(action);
    }

    let loaded = loaded?;
    if let Some(from) = loaded.migrated_from {
        info!(from, to = CURRENT_VERSION, "config migrated in memory; run `config init --force` to rewrite it");
    }

    match &cli.command {
        Command::Replay(args) => commands::run_replay(args, &loaded.config).await,
        Command::Protocols(args) => commands::run_protocols(args),
        Command::Config { action } => commands::run_config(action),
    }
}
