//! Endpoint allow-list and custom endpoint templates.
//!
//! Every call is checked against a known set of base endpoints before any
//! network I/O, purely so a typo never burns a metered credit. Custom
//! endpoints map a friendly name to a parameterized path template whose
//! placeholders are filled from a caller-supplied id map.

use std::collections::BTreeMap;

use crate::error::{FootballError, Result};

#[cfg(test)]
mod tests;

/// Base endpoints documented at <https://www.api-football.com/documentation>.
pub const BASE_ENDPOINTS: [&str; 13] = [
    "status",
    "timezone",
    "seasons",
    "countries",
    "leagues",
    "teams",
    "players",
    "leagueTable",
    "fixtures",
    "events",
    "lineups",
    "statistics",
    "odds",
];

/// Id names recognized inside custom endpoint templates.
pub const VALID_CUSTOM_IDS: [&str; 2] = ["fixture_id", "league_id"];

/// A requested endpoint resolved to the literal path passed to the HTTP
/// layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEndpoint {
    /// Full path appended to the base URL, placeholders substituted.
    pub path: String,
    /// First path segment; keys the schema registry.
    pub base: String,
}

/// Allow-list plus custom endpoint table, built once and owned by the
/// client.
#[derive(Debug, Clone)]
pub struct EndpointConfig {
    allowed: Vec<String>,
    custom: BTreeMap<String, String>,
    valid_ids: Vec<String>,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        let mut custom = BTreeMap::new();
        custom.insert("match".to_string(), "fixtures/id/{fixture_id}".to_string());
        custom.insert(
            "league_fixtures".to_string(),
            "fixtures/league/{league_id}".to_string(),
        );
        Self {
            allowed: BASE_ENDPOINTS.iter().map(|e| e.to_string()).collect(),
            custom,
            valid_ids: VALID_CUSTOM_IDS.iter().map(|i| i.to_string()).collect(),
        }
    }
}

impl EndpointConfig {
    /// Register an extra allowed base endpoint.
    pub fn allow(&mut self, endpoint: impl Into<String>) {
        self.allowed.push(endpoint.into());
    }

    /// Register a custom endpoint name resolving to `template`.
    pub fn add_custom(&mut self, name: impl Into<String>, template: impl Into<String>) {
        self.custom.insert(name.into(), template.into());
    }

    /// Template for a custom endpoint name, if one is registered.
    pub fn template(&self, name: &str) -> Option<&str> {
        self.custom.get(name).map(String::as_str)
    }

    /// Resolve a requested endpoint to the literal path for the HTTP layer.
    ///
    /// Plain endpoints may carry a sub-path (`teams/league`); only the
    /// first segment is checked against the allow-list. Custom endpoint
    /// names are substituted from `custom_ids`, which must only contain
    /// recognized id names.
    pub fn resolve(
        &self,
        endpoint: &str,
        custom_ids: Option<&BTreeMap<String, u64>>,
    ) -> Result<ResolvedEndpoint> {
        let path = match self.custom.get(endpoint) {
            Some(template) => {
                let ids = custom_ids.ok_or_else(|| FootballError::MissingParameters {
                    endpoint: endpoint.to_string(),
                })?;
                self.substitute(endpoint, template, ids)?
            }
            None => endpoint.to_string(),
        };

        let base = path.split('/').next().unwrap_or_default().to_string();
        if !self.allowed.iter().any(|allowed| *allowed == base) {
            return Err(FootballError::InvalidEndpoint {
                endpoint: base.clone(),
            });
        }

        Ok(ResolvedEndpoint { path, base })
    }

    fn substitute(
        &self,
        endpoint: &str,
        template: &str,
        ids: &BTreeMap<String, u64>,
    ) -> Result<String> {
        for key in ids.keys() {
            if !self.valid_ids.iter().any(|valid| valid == key) {
                return Err(FootballError::InvalidCustomId { id: key.clone() });
            }
        }

        let mut segments = Vec::new();
        for segment in template.split('/') {
            match placeholder_name(segment) {
                Some(name) => {
                    let value = ids.get(name).ok_or_else(|| FootballError::MissingParameters {
                        endpoint: endpoint.to_string(),
                    })?;
                    segments.push(value.to_string());
                }
                None => segments.push(segment.to_string()),
            }
        }
        Ok(segments.join("/"))
    }
}

/// Placeholder name of a `{name}` template segment, or `None` for a
/// literal segment.
fn placeholder_name(segment: &str) -> Option<&str> {
    segment.strip_prefix('{')?.strip_suffix('}')
}

/// Recover the id values substituted into `template` to produce `path`.
///
/// The inverse of template substitution; returns `None` when the path does
/// not match the template shape.
pub fn parse_path(template: &str, path: &str) -> Option<BTreeMap<String, u64>> {
    let template_segments: Vec<&str> = template.split('/').collect();
    let path_segments: Vec<&str> = path.split('/').collect();
    if template_segments.len() != path_segments.len() {
        return None;
    }

    let mut ids = BTreeMap::new();
    for (template_segment, path_segment) in template_segments.iter().zip(&path_segments) {
        match placeholder_name(template_segment) {
            Some(name) => {
                ids.insert(name.to_string(), path_segment.parse().ok()?);
            }
            None if template_segment == path_segment => (),
            None => return None,
        }
    }
    Some(ids)
}
