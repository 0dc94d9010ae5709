//! JSON Schema validation of API responses.
//!
//! Each endpoint base name maps to a Draft-07 schema document. Validation
//! collects every violation, ordered by instance path, and surfaces them as
//! a single structured [`FootballError::SchemaValidationFailed`] so the
//! caller decides whether schema drift stops the pipeline.

use std::collections::BTreeMap;

use jsonschema::{Draft, JSONSchema};
use serde_json::Value;
use tracing::debug;

use crate::error::{FootballError, Result};


/// Bundled default schemas, keyed by endpoint base name.
const BUNDLED_SCHEMAS: [(&str, &str); 4] = [
    ("status", include_str!("schemas/status.json")),
    ("countries", include_str!("schemas/countries.json")),
    ("leagues", include_str!("schemas/leagues.json")),
    ("fixtures", include_str!("schemas/fixtures.json")),
];

/// Mapping from endpoint base name to its expected response schema.
#[derive(Debug, Clone)]
pub struct SchemaRegistry {
    schemas: BTreeMap<String, Value>,
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        let schemas = BUNDLED_SCHEMAS
            .iter()
            .map(|(name, raw)| {
                let schema =
                    serde_json::from_str(raw).unwrap_or_else(|e| panic!("bundled schema {name}: {e}"));
                (name.to_string(), schema)
            })
            .collect();
        Self { schemas }
    }
}

impl SchemaRegistry {
    /// Registry with no schemas; useful when every call supplies its own.
    pub fn empty() -> Self {
        Self {
            schemas: BTreeMap::new(),
        }
    }

    /// Register or replace the schema for an endpoint base name.
    pub fn insert(&mut self, endpoint: impl Into<String>, schema: Value) {
        self.schemas.insert(endpoint.into(), schema);
    }

    pub fn get(&self, endpoint: &str) -> Option<&Value> {
        self.schemas.get(endpoint)
    }

    /// Check that every registered document is itself a valid Draft-07
    /// schema.
    pub fn check_all(&self) -> Result<()> {
        for (endpoint, schema) in &self.schemas {
            compile(schema).map_err(|mut e| {
                if let FootballError::SchemaValidationFailed { errors } = &mut e {
                    for message in errors.iter_mut() {
                        *message = format!("{endpoint}: {message}");
                    }
                }
                e
            })?;
        }
        Ok(())
    }

    /// Validate `payload` for `endpoint`, using `schema` when supplied and
    /// the registered default otherwise.
    ///
    /// Fails with [`FootballError::NoValidationSchema`] when neither is
    /// available, and [`FootballError::SchemaValidationFailed`] carrying
    /// every violation (ordered by instance path) when the payload does not
    /// conform.
    pub fn validate(
        &self,
        endpoint: &str,
        payload: &Value,
        schema: Option<&Value>,
    ) -> Result<()> {
        let schema = match schema {
            Some(schema) => schema,
            None => self
                .get(endpoint)
                .ok_or_else(|| FootballError::NoValidationSchema {
                    endpoint: endpoint.to_string(),
                })?,
        };

        let compiled = compile(schema)?;
        if let Err(violations) = compiled.validate(payload) {
            let mut errors: Vec<String> = violations
                .map(|e| format!("{}: {}", e.instance_path, e))
                .collect();
            errors.sort();
            return Err(FootballError::SchemaValidationFailed { errors });
        }

        debug!(endpoint, "payload passed schema validation");
        Ok(())
    }
}

fn compile(schema: &Value) -> Result<JSONSchema> {
    JSONSchema::options()
        .with_draft(Draft::Draft7)
        .compile(schema)
        .map_err(|e| FootballError::SchemaValidationFailed {
            errors: vec![format!("schema does not compile: {e}")],
        })
}
