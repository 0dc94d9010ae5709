//! Fixture records and their mapping from API payloads.
//!
//! The upstream payload is deserialized into named-field structs and then
//! mapped explicitly into [`Fixture`], so a change in upstream field order
//! or shape fails loudly instead of silently misaligning columns.

use chrono::{DateTime, NaiveDate};
use serde::Deserialize;
use serde_json::Value;

use crate::error::Result;

#[cfg(test)]
mod tests;

/// Status short-code marking a fixture as finished with final goals.
pub const FINISHED_STATUS: &str = "FT";

/// A completed or scheduled match as returned by the fixtures endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixture {
    pub fixture_id: u64,
    pub league_id: u64,
    pub event_date: NaiveDate,
    pub status_short: String,
    pub home_team_id: u64,
    pub home_team: String,
    pub away_team_id: u64,
    pub away_team: String,
    pub home_goals: u32,
    pub away_goals: u32,
}

impl Fixture {
    pub fn is_finished(&self) -> bool {
        self.status_short == FINISHED_STATUS
    }
}

/// Wire shape of one entry in `api.fixtures`.
#[derive(Debug, Deserialize)]
struct ApiFixture {
    fixture_id: u64,
    league_id: u64,
    event_date: String,
    #[serde(rename = "statusShort")]
    status_short: String,
    #[serde(rename = "homeTeam")]
    home_team: ApiTeam,
    #[serde(rename = "awayTeam")]
    away_team: ApiTeam,
    #[serde(rename = "goalsHomeTeam")]
    goals_home_team: Option<u32>,
    #[serde(rename = "goalsAwayTeam")]
    goals_away_team: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct ApiTeam {
    team_id: u64,
    team_name: String,
}

/// Wire shape of a fixtures payload down to the fixture list.
#[derive(Debug, Deserialize)]
struct FixturesEnvelope {
    api: FixturesApi,
}

#[derive(Debug, Deserialize)]
struct FixturesApi {
    fixtures: Vec<ApiFixture>,
}

impl TryFrom<ApiFixture> for Fixture {
    type Error = crate::error::FootballError;

    fn try_from(raw: ApiFixture) -> Result<Self> {
        Ok(Self {
            fixture_id: raw.fixture_id,
            league_id: raw.league_id,
            event_date: parse_event_date(&raw.event_date)?,
            status_short: raw.status_short,
            home_team_id: raw.home_team.team_id,
            home_team: raw.home_team.team_name,
            away_team_id: raw.away_team.team_id,
            away_team: raw.away_team.team_name,
            home_goals: raw.goals_home_team.unwrap_or(0),
            away_goals: raw.goals_away_team.unwrap_or(0),
        })
    }
}

/// Map a raw fixtures payload into fixture records.
pub fn fixtures_from_payload(payload: &Value) -> Result<Vec<Fixture>> {
    let envelope: FixturesEnvelope = serde_json::from_value(payload.clone())?;
    envelope
        .api
        .fixtures
        .into_iter()
        .map(Fixture::try_from)
        .collect()
}

/// Event dates arrive as RFC 3339 timestamps; older seasons use bare
/// dates.
fn parse_event_date(raw: &str) -> Result<NaiveDate> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Ok(timestamp.date_naive());
    }
    Ok(raw.parse::<NaiveDate>()?)
}
