//! The standings pipeline: filter, points, row expansion, aggregation,
//! ranking.
//!
//! Pure functions over a snapshot of fixture records; no state is carried
//! between matches.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::{FootballError, Result};
use crate::standings::types::Fixture;


/// One ranked row of the standings table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Standing {
    pub team: String,
    pub points: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i64,
    pub matches_played: u32,
    /// 1-based rank after sorting.
    pub position: u32,
}

/// Points earned by the home and away side of a single match: a draw is
/// worth one each, a win three to the higher scorer.
pub fn match_points(home_goals: u32, away_goals: u32) -> (u32, u32) {
    if home_goals == away_goals {
        (1, 1)
    } else if home_goals > away_goals {
        (3, 0)
    } else {
        (0, 3)
    }
}

/// One team's perspective of a match.
#[derive(Debug, Clone)]
struct PerspectiveRow {
    team: String,
    points: u32,
    goals_for: u32,
    goals_against: u32,
}

/// Each match contributes one row per participating team, goals oriented
/// from that team's perspective.
fn expand_rows(fixtures: &[&Fixture]) -> Vec<PerspectiveRow> {
    let mut rows = Vec::with_capacity(fixtures.len() * 2);
    for fixture in fixtures {
        let (home_points, away_points) = match_points(fixture.home_goals, fixture.away_goals);
        rows.push(PerspectiveRow {
            team: fixture.home_team.clone(),
            points: home_points,
            goals_for: fixture.home_goals,
            goals_against: fixture.away_goals,
        });
        rows.push(PerspectiveRow {
            team: fixture.away_team.clone(),
            points: away_points,
            goals_for: fixture.away_goals,
            goals_against: fixture.home_goals,
        });
    }
    rows
}

/// Build the ranked standings table from finished fixtures played on or
/// before `as_of`.
///
/// Fails with [`FootballError::NoFixtures`] when no fixture is finished at
/// all, and [`FootballError::NoDataInRange`] when the earliest finished
/// fixture postdates `as_of`.
pub fn standings(fixtures: &[Fixture], as_of: NaiveDate) -> Result<Vec<Standing>> {
    let finished: Vec<&Fixture> = fixtures.iter().filter(|f| f.is_finished()).collect();
    let earliest = finished
        .iter()
        .map(|f| f.event_date)
        .min()
        .ok_or(FootballError::NoFixtures)?;
    if earliest > as_of {
        return Err(FootballError::NoDataInRange { earliest });
    }

    let in_range: Vec<&Fixture> = finished
        .into_iter()
        .filter(|f| f.event_date <= as_of)
        .collect();

    let mut totals: BTreeMap<String, Standing> = BTreeMap::new();
    for row in expand_rows(&in_range) {
        let entry = totals.entry(row.team.clone()).or_insert_with(|| Standing {
            team: row.team.clone(),
            points: 0,
            goals_for: 0,
            goals_against: 0,
            goal_difference: 0,
            matches_played: 0,
            position: 0,
        });
        entry.points += row.points;
        entry.goals_for += row.goals_for;
        entry.goals_against += row.goals_against;
        entry.matches_played += 1;
    }

    let mut table: Vec<Standing> = totals.into_values().collect();
    for standing in &mut table {
        standing.goal_difference = i64::from(standing.goals_for) - i64::from(standing.goals_against);
    }

    // Descending by points, then goal difference, then goals for; the sort
    // is stable so fully tied teams keep their grouping order.
    table.sort_by(|a, b| {
        (b.points, b.goal_difference, b.goals_for).cmp(&(a.points, a.goal_difference, a.goals_for))
    });
    for (index, standing) in table.iter_mut().enumerate() {
        standing.position = index as u32 + 1;
    }

    Ok(table)
}
