use clap::Parser;
use tracing_subscriber::EnvFilter;

mod catalog;
mod cli;
mod commands;
mod domain;
mod repl;
mod services;

use catalog::CatalogClient;
use cli::Cli;
use commands::Session;

fn init_tracing(verbose: bool) -> anyhow::Result<()> {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let client = CatalogClient::new(&cli.base_url, cli.timeout_ms)?;
    let mut session = Session::new(Box::new(client));
    tracing::info!(base_url = %cli.base_url, "session started");

    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut out = std::io::stdout();
    let outcome = repl::run(&mut session, &mut input, &mut out)?;

    tracing::info!(?outcome, page = session.pager.current(), "session ended");
    Ok(())
}
