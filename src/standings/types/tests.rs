//! Unit tests for fixture payload mapping

use super::*;
use serde_json::json;

fn fixtures_payload() -> Value {
    json!({
        "api": {
            "results": 2,
            "fixtures": [
                {
                    "fixture_id": 65,
                    "league_id": 2,
                    "event_date": "2015-08-08T11:45:00+00:00",
                    "statusShort": "FT",
                    "homeTeam": {"team_id": 33, "team_name": "Manchester United"},
                    "awayTeam": {"team_id": 47, "team_name": "Tottenham"},
                    "goalsHomeTeam": 1,
                    "goalsAwayTeam": 0
                },
                {
                    "fixture_id": 66,
                    "league_id": 2,
                    "event_date": "2015-08-09",
                    "statusShort": "NS",
                    "homeTeam": {"team_id": 34, "team_name": "Newcastle"},
                    "awayTeam": {"team_id": 41, "team_name": "Southampton"},
                    "goalsHomeTeam": null,
                    "goalsAwayTeam": null
                }
            ]
        }
    })
}

#[test]
fn test_fixtures_from_payload_maps_named_fields() {
    let fixtures = fixtures_from_payload(&fixtures_payload()).unwrap();
    assert_eq!(fixtures.len(), 2);

    let first = &fixtures[0];
    assert_eq!(first.fixture_id, 65);
    assert_eq!(first.league_id, 2);
    assert_eq!(first.event_date, NaiveDate::from_ymd_opt(2015, 8, 8).unwrap());
    assert_eq!(first.home_team, "Manchester United");
    assert_eq!(first.away_team_id, 47);
    assert_eq!(first.home_goals, 1);
    assert_eq!(first.away_goals, 0);
    assert!(first.is_finished());
}

#[test]
fn test_bare_date_and_null_goals() {
    let fixtures = fixtures_from_payload(&fixtures_payload()).unwrap();
    let second = &fixtures[1];
    assert_eq!(second.event_date, NaiveDate::from_ymd_opt(2015, 8, 9).unwrap());
    assert_eq!(second.home_goals, 0);
    assert_eq!(second.away_goals, 0);
    assert!(!second.is_finished());
}

#[test]
fn test_unparseable_date_is_an_error() {
    let payload = json!({
        "api": {
            "fixtures": [{
                "fixture_id": 1,
                "league_id": 2,
                "event_date": "yesterday",
                "statusShort": "FT",
                "homeTeam": {"team_id": 1, "team_name": "A"},
                "awayTeam": {"team_id": 2, "team_name": "B"},
                "goalsHomeTeam": 0,
                "goalsAwayTeam": 0
            }]
        }
    });
    assert!(fixtures_from_payload(&payload).is_err());
}

#[test]
fn test_missing_team_block_is_an_error() {
    let payload = json!({
        "api": {
            "fixtures": [{
                "fixture_id": 1,
                "league_id": 2,
                "event_date": "2015-08-08",
                "statusShort": "FT",
                "homeTeam": {"team_id": 1, "team_name": "A"}
            }]
        }
    });
    assert!(fixtures_from_payload(&payload).is_err());
}
