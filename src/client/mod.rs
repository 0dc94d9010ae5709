//! Credit-aware api-football client.
//!
//! Organized the same way the requests flow:
//! - `endpoints`: allow-list and custom endpoint resolution
//! - `credits`: daily request quota accounting
//! - `http`: the blocking GET layer and the `ApiFootball` client itself
//! - `validation`: JSON Schema registry and response validation

pub mod credits;
pub mod endpoints;
pub mod http;
pub mod validation;

// Re-export the main types for easy access
pub use credits::CreditLedger;
pub use endpoints::{EndpointConfig, ResolvedEndpoint};
pub use http::{ApiFootball, GetRequest};
pub use validation::SchemaRegistry;
