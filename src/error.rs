//! Error types for the api-football client and its helpers.

use chrono::NaiveDate;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, FootballError>;

#[derive(Error, Debug)]
pub enum FootballError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database error: {0}")]
    Sql(#[from] rusqlite::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Failed to parse date: {0}")]
    InvalidDate(#[from] chrono::ParseError),

    #[error("API key not provided and {env_var} environment variable not set")]
    MissingApiKey { env_var: String },

    #[error("{endpoint} is not an allowed endpoint")]
    InvalidEndpoint { endpoint: String },

    #[error("{id} is not a recognized custom endpoint id")]
    InvalidCustomId { id: String },

    #[error("custom endpoint {endpoint} requires id parameters")]
    MissingParameters { endpoint: String },

    #[error("invalid request parameters: {message}")]
    InvalidParameters { message: String },

    #[error("{status} is an invalid status code")]
    InvalidStatusCode { status: u16 },

    #[error("no available credits remain for today")]
    QuotaExhausted,

    #[error("available credits are unknown; call update_credits() first")]
    CreditsUninitialized,

    #[error("no default validation schema for endpoint {endpoint}")]
    NoValidationSchema { endpoint: String },

    #[error("schema validation failed with {} error(s)", errors.len())]
    SchemaValidationFailed { errors: Vec<String> },

    #[error("no results on or before the requested date; earliest match is {earliest}")]
    NoDataInRange { earliest: NaiveDate },

    #[error("no finished fixtures found")]
    NoFixtures,

    #[error("league not found for country {country}, league {league}, season {season}")]
    LeagueNotFound {
        country: String,
        league: String,
        season: u16,
    },

    #[error("invalid table spec: {message}")]
    InvalidTableSpec { message: String },
}

#[cfg(test)]
mod tests;
