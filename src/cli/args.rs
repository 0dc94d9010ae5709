//! CLI argument definitions and parsing structures.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[clap(name = "football-api", about = "api-football client and league table CLI")]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Refresh and print the remaining daily request credits.
    Credits,

    /// Call an arbitrary allowed endpoint and print the JSON payload.
    Get {
        /// Endpoint name, e.g. `countries`, `teams/league`, or a custom
        /// name like `match`.
        endpoint: String,

        /// Query parameter as key=value (repeatable).
        #[clap(long, short)]
        param: Vec<String>,

        /// Custom endpoint id as name=value (repeatable), e.g.
        /// `--id fixture_id=65`.
        #[clap(long)]
        id: Vec<String>,

        /// Build and log the request without sending it; costs no credit.
        #[clap(long)]
        dry_run: bool,

        /// Skip JSON Schema validation of the response.
        #[clap(long)]
        no_validate: bool,
    },

    /// Build the league standings table as of a given date.
    Table {
        /// Country name, e.g. England.
        #[clap(long, short)]
        country: String,

        /// League name, e.g. "Premier League".
        #[clap(long, short)]
        league: String,

        /// Season starting year, e.g. 2015 for the 2015/16 season.
        #[clap(long, short)]
        season: u16,

        /// Table cut-off date (inclusive), defaults to today.
        #[clap(long)]
        as_of: Option<NaiveDate>,
    },

    /// Fetch all leagues and load new ones into the local database.
    SyncLeagues {
        /// Database file; defaults to the cache directory.
        #[clap(long)]
        database: Option<std::path::PathBuf>,
    },
}
