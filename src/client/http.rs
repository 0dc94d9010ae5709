//! The blocking HTTP layer and the `ApiFootball` client.
//!
//! Every data call runs the same gauntlet: endpoint resolution, credit
//! check, GET, local credit spend, schema validation. Nothing is retried;
//! any failure is surfaced to the caller immediately. Dry-run mode stops
//! after building the request and logs what would have been sent.

use std::collections::BTreeMap;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT};
use reqwest::StatusCode;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::client::credits::CreditLedger;
use crate::client::endpoints::EndpointConfig;
use crate::client::validation::SchemaRegistry;
use crate::config::ClientConfig;
use crate::error::{FootballError, Result};

/// RapidAPI authentication header.
pub const API_KEY_HEADER: &str = "x-rapidapi-key";

/// One API call, built up fluently and passed to [`ApiFootball::get`].
#[derive(Debug, Clone)]
pub struct GetRequest<'a> {
    pub endpoint: &'a str,
    pub dry_run: bool,
    pub params: Option<BTreeMap<String, String>>,
    pub custom_ids: Option<BTreeMap<String, u64>>,
    pub validate: bool,
    pub schema: Option<&'a Value>,
}

impl<'a> GetRequest<'a> {
    pub fn new(endpoint: &'a str) -> Self {
        Self {
            endpoint,
            dry_run: false,
            params: None,
            custom_ids: None,
            validate: true,
            schema: None,
        }
    }

    /// Build but do not send the request; the call costs no credit and
    /// returns no data.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Query-string parameters.
    pub fn params(mut self, params: BTreeMap<String, String>) -> Self {
        self.params = Some(params);
        self
    }

    /// Id values substituted into a custom endpoint template.
    pub fn custom_ids(mut self, custom_ids: BTreeMap<String, u64>) -> Self {
        self.custom_ids = Some(custom_ids);
        self
    }

    /// Skip response schema validation.
    pub fn no_validate(mut self) -> Self {
        self.validate = false;
        self
    }

    /// Validate against this schema instead of the registered default.
    pub fn schema(mut self, schema: &'a Value) -> Self {
        self.schema = Some(schema);
        self
    }
}

/// Credit-aware client for the api-football REST API.
///
/// Owns the credit ledger; not safe for unsynchronized use from multiple
/// threads, wrap it in a mutex if that is needed.
pub struct ApiFootball {
    http: Client,
    base_url: String,
    headers: HeaderMap,
    endpoints: EndpointConfig,
    schemas: SchemaRegistry,
    credits: CreditLedger,
}

impl ApiFootball {
    /// Build a client from explicit configuration with the default
    /// endpoint allow-list and bundled schemas.
    pub fn new(config: ClientConfig) -> Result<Self> {
        Self::with_parts(config, EndpointConfig::default(), SchemaRegistry::default())
    }

    /// Build a client with a caller-supplied endpoint table and schema
    /// registry.
    pub fn with_parts(
        config: ClientConfig,
        endpoints: EndpointConfig,
        schemas: SchemaRegistry,
    ) -> Result<Self> {
        if !config.verify {
            warn!("TLS certificate verification is disabled");
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            HeaderName::from_static(API_KEY_HEADER),
            HeaderValue::from_str(&config.api_key)?,
        );
        for (name, value) in &config.extra_headers {
            let name = name
                .parse::<HeaderName>()
                .map_err(|e| FootballError::InvalidParameters {
                    message: format!("invalid header name {name}: {e}"),
                })?;
            headers.insert(name, HeaderValue::from_str(value)?);
        }

        let http = Client::builder()
            .danger_accept_invalid_certs(!config.verify)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            headers,
            endpoints,
            schemas,
            credits: CreditLedger::default(),
        })
    }

    /// Credits remaining today, or `None` before the first refresh.
    pub fn available_credits(&self) -> Option<u32> {
        self.credits.available()
    }

    /// Daily request budget, or `None` before the first refresh.
    pub fn max_credits(&self) -> Option<u32> {
        self.credits.max()
    }

    pub fn endpoints_mut(&mut self) -> &mut EndpointConfig {
        &mut self.endpoints
    }

    pub fn schemas_mut(&mut self) -> &mut SchemaRegistry {
        &mut self.schemas
    }

    /// Refresh the credit ledger from the `status` endpoint.
    ///
    /// The status call itself is not metered and does not require an
    /// initialized ledger.
    pub fn update_credits(&mut self) -> Result<()> {
        debug!("updating credits");
        let payload = self
            .request("status", false, None)?
            .expect("non-dry-run request returns a payload");
        self.schemas.validate("status", &payload, None)?;
        self.credits.apply_status_payload(&payload)?;
        info!(
            available = self.credits.available(),
            max = self.credits.max(),
            "credit(s) available"
        );
        Ok(())
    }

    /// Call an endpoint and return its JSON payload.
    ///
    /// The endpoint is resolved against the allow-list (custom names are
    /// substituted from the request's id map) before any credit is risked.
    /// Returns `Ok(None)` for dry runs. The local credit count is
    /// decremented after each real call; refresh with
    /// [`Self::update_credits`] for the authoritative figure.
    pub fn get(&mut self, request: GetRequest<'_>) -> Result<Option<Value>> {
        let resolved = self
            .endpoints
            .resolve(request.endpoint, request.custom_ids.as_ref())?;

        let available = self
            .credits
            .available()
            .ok_or(FootballError::CreditsUninitialized)?;
        if available == 0 && !request.dry_run {
            return Err(FootballError::QuotaExhausted);
        }

        let payload = self.request(&resolved.path, request.dry_run, request.params.as_ref())?;
        let Some(payload) = payload else {
            return Ok(None);
        };
        self.credits.spend();

        if request.validate {
            self.schemas
                .validate(&resolved.base, &payload, request.schema)?;
        } else {
            warn!(endpoint = %resolved.base, "skipping response validation");
        }

        Ok(Some(payload))
    }

    /// Like [`Self::get`] for requests that are never dry runs, returning
    /// the payload directly.
    pub fn get_json(&mut self, request: GetRequest<'_>) -> Result<Value> {
        if request.dry_run {
            return Err(FootballError::InvalidParameters {
                message: "get_json does not support dry runs".to_string(),
            });
        }
        let payload = self.get(request)?;
        payload.ok_or_else(|| FootballError::InvalidParameters {
            message: "request returned no payload".to_string(),
        })
    }

    /// Issue a single GET to `{base_url}/{path}`.
    ///
    /// Only HTTP 200 is a success; any other status is an error carrying
    /// the observed code. Dry runs log the would-be URL and return `None`.
    fn request(
        &self,
        path: &str,
        dry_run: bool,
        params: Option<&BTreeMap<String, String>>,
    ) -> Result<Option<Value>> {
        let url = format!("{}/{}", self.base_url, path);

        if dry_run {
            info!(%url, ?params, "dry run, skipping request");
            return Ok(None);
        }

        debug!(%url, "requesting");
        let mut builder = self.http.get(&url).headers(self.headers.clone());
        if let Some(params) = params {
            builder = builder.query(params);
        }

        let response = builder.send()?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(FootballError::InvalidStatusCode {
                status: status.as_u16(),
            });
        }
        debug!("valid status code received");

        Ok(Some(response.json()?))
    }
}

/// Parse `key=value` strings into a query parameter map.
///
/// Entries without a `=` are rejected before any network I/O.
pub fn parse_query_params(raw: &[String]) -> Result<BTreeMap<String, String>> {
    let mut params = BTreeMap::new();
    for entry in raw {
        let (key, value) = entry
            .split_once('=')
            .ok_or_else(|| FootballError::InvalidParameters {
                message: format!("expected key=value, got {entry}"),
            })?;
        if key.is_empty() {
            return Err(FootballError::InvalidParameters {
                message: format!("empty key in {entry}"),
            });
        }
        params.insert(key.to_string(), value.to_string());
    }
    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_query_params() {
        let params =
            parse_query_params(&["timezone=Europe/London".to_string(), "page=2".to_string()])
                .unwrap();
        assert_eq!(params.get("timezone").unwrap(), "Europe/London");
        assert_eq!(params.get("page").unwrap(), "2");
    }

    #[test]
    fn test_parse_query_params_rejects_missing_separator() {
        let err = parse_query_params(&["timezone".to_string()]).unwrap_err();
        assert!(matches!(err, FootballError::InvalidParameters { .. }));
    }

    #[test]
    fn test_parse_query_params_rejects_empty_key() {
        let err = parse_query_params(&["=value".to_string()]).unwrap_err();
        assert!(matches!(err, FootballError::InvalidParameters { .. }));
    }

    #[test]
    fn test_get_request_builder_defaults() {
        let request = GetRequest::new("fixtures");
        assert_eq!(request.endpoint, "fixtures");
        assert!(!request.dry_run);
        assert!(request.validate);
        assert!(request.params.is_none());
        assert!(request.custom_ids.is_none());
    }
}
