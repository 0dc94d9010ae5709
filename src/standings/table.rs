//! League table builder.
//!
//! Resolves a league id from the `leagues` endpoint, pulls that league's
//! fixtures through the `league_fixtures` custom endpoint, and hands the
//! finished ones to the standings pipeline.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use crate::client::{ApiFootball, GetRequest};
use crate::error::{FootballError, Result};
use crate::standings::compute::{standings, Standing};
use crate::standings::types::{fixtures_from_payload, Fixture};

/// Wire shape of a leagues payload down to the league list.
#[derive(Debug, Deserialize)]
struct LeaguesEnvelope {
    api: LeaguesApi,
}

#[derive(Debug, Deserialize)]
struct LeaguesApi {
    leagues: Vec<ApiLeague>,
}

#[derive(Debug, Deserialize)]
struct ApiLeague {
    league_id: u64,
    name: String,
    country: String,
    season: u16,
}

/// Standings builder for one league and season.
///
/// Fixtures are fetched once at construction; tables for different dates
/// are recomputed from that snapshot without further API calls.
#[derive(Debug)]
pub struct LeagueTable {
    league_id: u64,
    fixtures: Vec<Fixture>,
    earliest_match: NaiveDate,
}

impl LeagueTable {
    /// Fetch the fixtures for `country`/`league` in `season` (season is
    /// the starting year, e.g. 2015 for 2015/16).
    ///
    /// Name matching is case-insensitive. Costs two credits: one for the
    /// league lookup, one for the fixtures.
    pub fn fetch(
        api: &mut ApiFootball,
        country: &str,
        league: &str,
        season: u16,
    ) -> Result<Self> {
        let league_id = resolve_league_id(api, country, league, season)?;
        info!(league_id, country, league, season, "resolved league");

        let mut custom_ids = BTreeMap::new();
        custom_ids.insert("league_id".to_string(), league_id);
        let payload =
            api.get_json(GetRequest::new("league_fixtures").custom_ids(custom_ids))?;

        let fixtures: Vec<Fixture> = fixtures_from_payload(&payload)?
            .into_iter()
            .filter(Fixture::is_finished)
            .collect();
        let earliest_match = fixtures
            .iter()
            .map(|f| f.event_date)
            .min()
            .ok_or(FootballError::NoFixtures)?;
        info!(count = fixtures.len(), %earliest_match, "loaded finished fixtures");

        Ok(Self {
            league_id,
            fixtures,
            earliest_match,
        })
    }

    /// Build from an already-fetched set of fixtures; unfinished ones are
    /// dropped.
    pub fn from_fixtures(league_id: u64, fixtures: Vec<Fixture>) -> Result<Self> {
        let fixtures: Vec<Fixture> = fixtures.into_iter().filter(Fixture::is_finished).collect();
        let earliest_match = fixtures
            .iter()
            .map(|f| f.event_date)
            .min()
            .ok_or(FootballError::NoFixtures)?;
        Ok(Self {
            league_id,
            fixtures,
            earliest_match,
        })
    }

    pub fn league_id(&self) -> u64 {
        self.league_id
    }

    /// Date of the earliest finished fixture.
    pub fn earliest_match(&self) -> NaiveDate {
        self.earliest_match
    }

    pub fn fixtures(&self) -> &[Fixture] {
        &self.fixtures
    }

    /// The ranked table as of `as_of`, inclusive.
    pub fn table(&self, as_of: NaiveDate) -> Result<Vec<Standing>> {
        standings(&self.fixtures, as_of)
    }
}

fn resolve_league_id(
    api: &mut ApiFootball,
    country: &str,
    league: &str,
    season: u16,
) -> Result<u64> {
    let payload: Value = api.get_json(GetRequest::new("leagues"))?;
    let envelope: LeaguesEnvelope = serde_json::from_value(payload)?;

    envelope
        .api
        .leagues
        .iter()
        .find(|l| {
            l.country.eq_ignore_ascii_case(country)
                && l.name.eq_ignore_ascii_case(league)
                && l.season == season
        })
        .map(|l| l.league_id)
        .ok_or_else(|| FootballError::LeagueNotFound {
            country: country.to_string(),
            league: league.to_string(),
            season,
        })
}
