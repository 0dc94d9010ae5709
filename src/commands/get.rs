//! `get` command: call an arbitrary allowed endpoint.

use std::collections::BTreeMap;

use crate::client::http::parse_query_params;
use crate::client::{ApiFootball, GetRequest};
use crate::config::ClientConfig;
use crate::error::{FootballError, Result};

pub struct GetParams {
    pub endpoint: String,
    pub params: Vec<String>,
    pub ids: Vec<String>,
    pub dry_run: bool,
    pub no_validate: bool,
}

pub fn handle_get(config: ClientConfig, args: GetParams) -> Result<()> {
    let mut api = ApiFootball::new(config)?;
    api.update_credits()?;

    let mut request = GetRequest::new(&args.endpoint).dry_run(args.dry_run);
    if !args.params.is_empty() {
        request = request.params(parse_query_params(&args.params)?);
    }
    if !args.ids.is_empty() {
        request = request.custom_ids(parse_custom_ids(&args.ids)?);
    }
    if args.no_validate {
        request = request.no_validate();
    }

    match api.get(request)? {
        Some(payload) => println!("{}", serde_json::to_string_pretty(&payload)?),
        None => println!("(dry run, no request sent)"),
    }
    Ok(())
}

/// Parse `name=value` strings into a custom id map.
fn parse_custom_ids(raw: &[String]) -> Result<BTreeMap<String, u64>> {
    let mut ids = BTreeMap::new();
    for entry in raw {
        let (name, value) = entry
            .split_once('=')
            .ok_or_else(|| FootballError::InvalidParameters {
                message: format!("expected name=value, got {entry}"),
            })?;
        let value = value
            .parse::<u64>()
            .map_err(|_| FootballError::InvalidParameters {
                message: format!("id {name} is not an integer: {value}"),
            })?;
        ids.insert(name.to_string(), value);
    }
    Ok(ids)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_custom_ids() {
        let ids = parse_custom_ids(&["fixture_id=65".to_string()]).unwrap();
        assert_eq!(ids.get("fixture_id"), Some(&65));
    }

    #[test]
    fn test_parse_custom_ids_rejects_non_integer() {
        let err = parse_custom_ids(&["fixture_id=abc".to_string()]).unwrap_err();
        assert!(matches!(err, FootballError::InvalidParameters { .. }));
    }

    #[test]
    fn test_parse_custom_ids_rejects_missing_separator() {
        assert!(parse_custom_ids(&["fixture_id".to_string()]).is_err());
    }
}
