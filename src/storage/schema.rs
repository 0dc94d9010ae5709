//! Database connection and table creation.

use std::path::{Path, PathBuf};

use rusqlite::Connection;
use tracing::debug;

use crate::error::{FootballError, Result};
use crate::storage::models::TableSpec;

/// Connection manager for the football database.
pub struct FootballDatabase {
    pub(crate) conn: Connection,
}

impl FootballDatabase {
    /// Open (or create) the database at the default cache location.
    pub fn new() -> Result<Self> {
        Self::open(&Self::database_path()?)
    }

    /// Open (or create) the database at an explicit path.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(path)?;
        Ok(Self { conn })
    }

    /// In-memory database, used by tests.
    pub fn new_in_memory() -> Result<Self> {
        Ok(Self {
            conn: Connection::open_in_memory()?,
        })
    }

    /// Path to the database file: `<cache dir>/football-api/football.db`.
    fn database_path() -> Result<PathBuf> {
        let cache_dir = dirs::cache_dir().ok_or_else(|| FootballError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "could not determine cache directory",
        )))?;
        Ok(cache_dir.join("football-api").join("football.db"))
    }

    /// Create the table described by `spec` if it does not exist.
    pub fn create_table(&mut self, spec: &TableSpec) -> Result<()> {
        let columns: Vec<String> = spec
            .columns
            .iter()
            .map(|c| {
                let mut definition = format!("{} {}", c.name, c.ty.as_sql());
                if c.primary_key {
                    definition.push_str(" PRIMARY KEY");
                } else if !c.nullable {
                    definition.push_str(" NOT NULL");
                }
                definition
            })
            .collect();

        let sql = format!(
            "CREATE TABLE IF NOT EXISTS {} ({})",
            spec.name,
            columns.join(", ")
        );
        debug!(table = %spec.name, "creating table");
        self.conn.execute(&sql, [])?;
        Ok(())
    }

    /// Create every table in `specs`.
    pub fn create_tables(&mut self, specs: &[TableSpec]) -> Result<()> {
        for spec in specs {
            self.create_table(spec)?;
        }
        Ok(())
    }
}
