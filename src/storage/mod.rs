//! Relational helper for loading API data into SQLite.
//!
//! A thin abstraction over rusqlite, organized into logical components:
//! - `models`: typed table/column specs and ETL row types
//! - `schema`: database connection and table creation
//! - `queries`: inserts, deletes, and key lookups

pub mod models;
pub mod queries;
pub mod schema;


// Re-export the main types and database struct for easy access
pub use models::*;
pub use schema::FootballDatabase;
