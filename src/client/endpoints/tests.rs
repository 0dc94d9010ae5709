//! Unit tests for endpoint resolution

use super::*;

fn ids(pairs: &[(&str, u64)]) -> BTreeMap<String, u64> {
    pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

#[test]
fn test_plain_endpoint_resolves_to_itself() {
    let config = EndpointConfig::default();
    let resolved = config.resolve("countries", None).unwrap();
    assert_eq!(resolved.path, "countries");
    assert_eq!(resolved.base, "countries");
}

#[test]
fn test_endpoint_with_sub_path_checks_base_only() {
    let config = EndpointConfig::default();
    let resolved = config.resolve("teams/league", None).unwrap();
    assert_eq!(resolved.path, "teams/league");
    assert_eq!(resolved.base, "teams");
}

#[test]
fn test_unknown_endpoint_is_rejected() {
    let config = EndpointConfig::default();
    let err = config.resolve("teamz", None).unwrap_err();
    match err {
        FootballError::InvalidEndpoint { endpoint } => assert_eq!(endpoint, "teamz"),
        other => panic!("Expected InvalidEndpoint, got {other:?}"),
    }
}

#[test]
fn test_custom_endpoint_substitutes_ids() {
    let config = EndpointConfig::default();
    let resolved = config
        .resolve("match", Some(&ids(&[("fixture_id", 65)])))
        .unwrap();
    assert_eq!(resolved.path, "fixtures/id/65");
    assert_eq!(resolved.base, "fixtures");
}

#[test]
fn test_custom_endpoint_unknown_id_is_rejected() {
    let config = EndpointConfig::default();
    let err = config
        .resolve("match", Some(&ids(&[("should_fail", 1)])))
        .unwrap_err();
    match err {
        FootballError::InvalidCustomId { id } => assert_eq!(id, "should_fail"),
        other => panic!("Expected InvalidCustomId, got {other:?}"),
    }
}

#[test]
fn test_custom_endpoint_without_ids_is_rejected() {
    let config = EndpointConfig::default();
    let err = config.resolve("match", None).unwrap_err();
    assert!(matches!(err, FootballError::MissingParameters { .. }));
}

#[test]
fn test_custom_endpoint_with_wrong_id_name_is_missing_parameters() {
    // league_id is a recognized id, but the match template needs fixture_id
    let config = EndpointConfig::default();
    let err = config
        .resolve("match", Some(&ids(&[("league_id", 2)])))
        .unwrap_err();
    assert!(matches!(err, FootballError::MissingParameters { .. }));
}

#[test]
fn test_league_fixtures_template() {
    let config = EndpointConfig::default();
    let resolved = config
        .resolve("league_fixtures", Some(&ids(&[("league_id", 2)])))
        .unwrap();
    assert_eq!(resolved.path, "fixtures/league/2");
}

#[test]
fn test_added_custom_endpoint_base_must_be_allowed() {
    let mut config = EndpointConfig::default();
    config.add_custom("bad", "unknown/{fixture_id}");
    let err = config
        .resolve("bad", Some(&ids(&[("fixture_id", 1)])))
        .unwrap_err();
    assert!(matches!(err, FootballError::InvalidEndpoint { .. }));
}

#[test]
fn test_allow_extends_the_allow_list() {
    let mut config = EndpointConfig::default();
    assert!(config.resolve("transfers", None).is_err());
    config.allow("transfers");
    assert!(config.resolve("transfers", None).is_ok());
}

#[test]
fn test_parse_path_round_trips_substitution() {
    let config = EndpointConfig::default();
    let requested = ids(&[("fixture_id", 65)]);
    let resolved = config.resolve("match", Some(&requested)).unwrap();

    let template = config.template("match").unwrap();
    let recovered = parse_path(template, &resolved.path).unwrap();
    assert_eq!(recovered, requested);
}

#[test]
fn test_parse_path_rejects_mismatched_literal() {
    assert!(parse_path("fixtures/id/{fixture_id}", "fixtures/league/65").is_none());
}

#[test]
fn test_parse_path_rejects_non_numeric_value() {
    assert!(parse_path("fixtures/id/{fixture_id}", "fixtures/id/abc").is_none());
}
