//! Insert, delete, and key-lookup operations.

use rusqlite::params_from_iter;
use rusqlite::types::Value as SqlValue;
use tracing::info;

use super::{models::TableSpec, schema::FootballDatabase};
use crate::error::{FootballError, Result};

/// Rows are inserted in chunks of this size, one transaction per chunk.
pub const INSERT_BATCH_SIZE: usize = 50;

impl FootballDatabase {
    /// Insert `rows` into the table described by `spec`, in chunks of
    /// [`INSERT_BATCH_SIZE`]. Returns the number of rows inserted.
    ///
    /// Every row must carry one value per spec column, in spec order.
    pub fn insert_rows(&mut self, spec: &TableSpec, rows: &[Vec<SqlValue>]) -> Result<usize> {
        for (index, row) in rows.iter().enumerate() {
            if row.len() != spec.columns.len() {
                return Err(FootballError::InvalidTableSpec {
                    message: format!(
                        "row {index} has {} values, table {} expects {}",
                        row.len(),
                        spec.name,
                        spec.columns.len()
                    ),
                });
            }
        }

        let column_names: Vec<&str> = spec.columns.iter().map(|c| c.name.as_str()).collect();
        let placeholders: Vec<&str> = spec.columns.iter().map(|_| "?").collect();
        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            spec.name,
            column_names.join(", "),
            placeholders.join(", ")
        );

        let mut inserted = 0;
        for chunk in rows.chunks(INSERT_BATCH_SIZE) {
            let tx = self.conn.transaction()?;
            {
                let mut statement = tx.prepare(&sql)?;
                for row in chunk {
                    inserted += statement.execute(params_from_iter(row.iter()))?;
                }
            }
            tx.commit()?;
            info!(table = %spec.name, rows = chunk.len(), "inserted chunk");
        }
        Ok(inserted)
    }

    /// Delete rows where `column` matches any of `keys`. Returns the
    /// number of rows deleted.
    pub fn delete_values(
        &mut self,
        spec: &TableSpec,
        column: &str,
        keys: &[i64],
    ) -> Result<usize> {
        if !spec.columns.iter().any(|c| c.name == column) {
            return Err(FootballError::InvalidTableSpec {
                message: format!("table {} has no column {column}", spec.name),
            });
        }
        if keys.is_empty() {
            return Ok(0);
        }

        let placeholders: Vec<&str> = keys.iter().map(|_| "?").collect();
        let sql = format!(
            "DELETE FROM {} WHERE {column} IN ({})",
            spec.name,
            placeholders.join(", ")
        );
        let deleted = self.conn.execute(&sql, params_from_iter(keys.iter()))?;
        info!(table = %spec.name, rows = deleted, "deleted rows");
        Ok(deleted)
    }

    /// Primary key values already present in the table.
    pub fn existing_ids(&self, spec: &TableSpec) -> Result<Vec<i64>> {
        let pk = spec
            .primary_key()
            .ok_or_else(|| FootballError::InvalidTableSpec {
                message: format!("table {} has no primary key", spec.name),
            })?;

        let sql = format!("SELECT {pk} FROM {} ORDER BY {pk}", spec.name);
        let mut statement = self.conn.prepare(&sql)?;
        let ids = statement
            .query_map([], |row| row.get(0))?
            .collect::<std::result::Result<Vec<i64>, _>>()?;
        Ok(ids)
    }
}
