//! Command implementations for the football-api CLI

pub mod credits;
pub mod get;
pub mod sync_leagues;
pub mod table;
