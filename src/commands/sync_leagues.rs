//! `sync-leagues` command: load the leagues endpoint into SQLite.
//!
//! New leagues are appended; ids already present are skipped so re-running
//! the sync costs one credit and touches nothing.

use std::collections::BTreeSet;
use std::path::PathBuf;

use tracing::info;

use crate::client::{ApiFootball, GetRequest};
use crate::config::ClientConfig;
use crate::error::{FootballError, Result};
use crate::storage::{leagues_spec, FootballDatabase, LeagueRow};

pub fn handle_sync_leagues(config: ClientConfig, database: Option<PathBuf>) -> Result<()> {
    let mut api = ApiFootball::new(config)?;
    api.update_credits()?;

    let payload = api.get_json(GetRequest::new("leagues"))?;
    let leagues = payload
        .pointer("/api/leagues")
        .and_then(|v| v.as_array())
        .ok_or_else(|| FootballError::InvalidParameters {
            message: "leagues payload missing api.leagues".to_string(),
        })?;
    info!(count = leagues.len(), "fetched leagues");

    let mut db = match database {
        Some(path) => FootballDatabase::open(&path)?,
        None => FootballDatabase::new()?,
    };
    let spec = leagues_spec();
    db.create_table(&spec)?;

    let existing: BTreeSet<i64> = db.existing_ids(&spec)?.into_iter().collect();
    let mut rows = Vec::new();
    for league in leagues {
        let row = LeagueRow::from_api(league)?;
        if existing.contains(&(row.league_id as i64)) {
            continue;
        }
        rows.push(row.into_values());
    }

    let inserted = db.insert_rows(&spec, &rows)?;
    println!(
        "{} league(s) fetched, {} new, {} already present",
        leagues.len(),
        inserted,
        leagues.len() - inserted
    );
    Ok(())
}
