//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use football_api::{
    cli::{Cli, Commands},
    commands::{
        credits::handle_credits,
        get::{handle_get, GetParams},
        sync_leagues::handle_sync_leagues,
        table::handle_table,
    },
    ClientConfig,
};
use tracing_subscriber::EnvFilter;

/// Run the CLI.
fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let app = Cli::parse();
    let config = ClientConfig::from_env()?;

    match app.command {
        Commands::Credits => handle_credits(config)?,

        Commands::Get {
            endpoint,
            param,
            id,
            dry_run,
            no_validate,
        } => handle_get(
            config,
            GetParams {
                endpoint,
                params: param,
                ids: id,
                dry_run,
                no_validate,
            },
        )?,

        Commands::Table {
            country,
            league,
            season,
            as_of,
        } => handle_table(config, &country, &league, season, as_of)?,

        Commands::SyncLeagues { database } => handle_sync_leagues(config, database)?,
    }

    Ok(())
}
