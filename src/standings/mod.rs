//! League standings calculation.
//!
//! - `types`: fixture records mapped from API payloads
//! - `compute`: the pure points/aggregation/ranking pipeline
//! - `table`: `LeagueTable`, which pulls fixtures through the client

pub mod compute;
pub mod table;
pub mod types;

// Re-export the main types for easy access
pub use compute::{match_points, standings, Standing};
pub use table::LeagueTable;
pub use types::{Fixture, FINISHED_STATUS};
