//! api-football client library
//!
//! A Rust client for the api-football REST API with credit-aware request
//! dispatch, endpoint validation, JSON Schema response validation, a league
//! standings calculator, and a small relational helper for loading API data
//! into SQLite.
//!
//! ## Features
//!
//! - **Credit accounting**: Track the daily request quota reported by the
//!   `status` endpoint and refuse calls once it is spent
//! - **Endpoint allow-list**: Reject unknown endpoints before they waste a
//!   metered credit, with named custom endpoints resolving to parameterized
//!   paths
//! - **Response validation**: Validate payloads against bundled Draft-07
//!   JSON Schemas, collecting every violation for deterministic reporting
//! - **League tables**: Build the standings table for any league and season
//!   as of a given date
//! - **ETL storage**: Typed table specs and chunked inserts over SQLite
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use football_api::{ApiFootball, ClientConfig, GetRequest};
//!
//! # fn example() -> football_api::Result<()> {
//! let mut api = ApiFootball::new(ClientConfig::from_env()?)?;
//! api.update_credits()?;
//!
//! let countries = api.get(GetRequest::new("countries"))?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Set your API key to avoid passing it explicitly:
//! ```bash
//! export API_KEY=your-rapidapi-key
//! ```

pub mod cli;
pub mod client;
pub mod commands;
pub mod config;
pub mod error;
pub mod standings;
pub mod storage;

// Re-export commonly used types
pub use client::{ApiFootball, EndpointConfig, GetRequest, SchemaRegistry};
pub use config::{ClientConfig, API_KEY_ENV_VAR, DEFAULT_BASE_URL};
pub use error::{FootballError, Result};
pub use standings::{Fixture, LeagueTable, Standing};
