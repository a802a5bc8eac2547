use clap::Parser;
use tracing_subscriber::EnvFilter;

use relaynum::{
    cli::{
        commands::{claim::ClaimCommand, search::SearchCommand, status::StatusCommand, CommandHandler},
        Cli, Commands,
    },
    Result,
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match cli.command {
        Commands::Claim => ClaimCommand.execute().await?,
        Commands::Status => StatusCommand.execute().await?,
        Commands::Search { query } => SearchCommand { query }.execute().await?,
    }

    Ok(())
}

/// Logs go to stderr; the default is quiet so the wizard's terminal
/// stays clean.
fn init_logging(verbose: bool) {
    let default_directive = if verbose { "relaynum=debug" } else { "relaynum=warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
