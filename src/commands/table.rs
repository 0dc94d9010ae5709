//! `table` command: print the league standings table.

use chrono::{Local, NaiveDate};

use crate::client::ApiFootball;
use crate::config::ClientConfig;
use crate::error::Result;
use crate::standings::LeagueTable;

pub fn handle_table(
    config: ClientConfig,
    country: &str,
    league: &str,
    season: u16,
    as_of: Option<NaiveDate>,
) -> Result<()> {
    let mut api = ApiFootball::new(config)?;
    api.update_credits()?;

    let league_table = LeagueTable::fetch(&mut api, country, league, season)?;
    let as_of = as_of.unwrap_or_else(|| Local::now().date_naive());
    let table = league_table.table(as_of)?;

    println!("{country} - {league} {season}, as of {as_of}");
    println!(
        "{:<4} {:<28} {:>3} {:>3} {:>3} {:>4} {:>4}",
        "POS", "TEAM", "PL", "GF", "GA", "GD", "PTS"
    );
    for row in &table {
        println!(
            "{:<4} {:<28} {:>3} {:>3} {:>3} {:>4} {:>4}",
            row.position,
            row.team,
            row.matches_played,
            row.goals_for,
            row.goals_against,
            row.goal_difference,
            row.points
        );
    }
    Ok(())
}
