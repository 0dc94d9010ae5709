//! Typed table specifications and ETL row types.
//!
//! Table specs are explicit records validated at construction, so a
//! malformed spec fails before it touches the database.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{FootballError, Result};

/// SQLite column affinity for a spec column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Integer,
    Real,
    Text,
    Boolean,
}

impl ColumnType {
    pub fn as_sql(&self) -> &'static str {
        match self {
            ColumnType::Integer => "INTEGER",
            ColumnType::Real => "REAL",
            ColumnType::Text => "TEXT",
            ColumnType::Boolean => "INTEGER",
        }
    }
}

/// One column of a table spec.
#[derive(Debug, Clone)]
pub struct ColumnSpec {
    pub name: String,
    pub ty: ColumnType,
    pub primary_key: bool,
    pub nullable: bool,
}

impl ColumnSpec {
    pub fn new(name: impl Into<String>, ty: ColumnType) -> Self {
        Self {
            name: name.into(),
            ty,
            primary_key: false,
            nullable: true,
        }
    }

    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self.nullable = false;
        self
    }

    pub fn not_null(mut self) -> Self {
        self.nullable = false;
        self
    }
}

/// A table definition: name plus ordered column specs.
#[derive(Debug, Clone)]
pub struct TableSpec {
    pub name: String,
    pub columns: Vec<ColumnSpec>,
}

impl TableSpec {
    /// Build a spec, rejecting empty names, empty column lists, and
    /// duplicate column names.
    pub fn new(name: impl Into<String>, columns: Vec<ColumnSpec>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(FootballError::InvalidTableSpec {
                message: "table name is empty".to_string(),
            });
        }
        if columns.is_empty() {
            return Err(FootballError::InvalidTableSpec {
                message: format!("table {name} has no columns"),
            });
        }
        for (index, column) in columns.iter().enumerate() {
            if column.name.is_empty() {
                return Err(FootballError::InvalidTableSpec {
                    message: format!("table {name} column {index} has no name"),
                });
            }
            if columns[..index].iter().any(|c| c.name == column.name) {
                return Err(FootballError::InvalidTableSpec {
                    message: format!("table {name} has duplicate column {}", column.name),
                });
            }
        }
        Ok(Self { name, columns })
    }

    /// Name of the primary key column, if the spec declares one.
    pub fn primary_key(&self) -> Option<&str> {
        self.columns
            .iter()
            .find(|c| c.primary_key)
            .map(|c| c.name.as_str())
    }
}

/// Spec for the leagues reference table.
pub fn leagues_spec() -> TableSpec {
    TableSpec::new(
        "leagues",
        vec![
            ColumnSpec::new("league_id", ColumnType::Integer).primary_key(),
            ColumnSpec::new("name", ColumnType::Text).not_null(),
            ColumnSpec::new("type", ColumnType::Text),
            ColumnSpec::new("country", ColumnType::Text).not_null(),
            ColumnSpec::new("country_code", ColumnType::Text),
            ColumnSpec::new("season", ColumnType::Integer).not_null(),
            ColumnSpec::new("season_start", ColumnType::Text),
            ColumnSpec::new("season_end", ColumnType::Text),
            ColumnSpec::new("standings", ColumnType::Integer),
            ColumnSpec::new("is_current", ColumnType::Integer),
        ],
    )
    .expect("bundled leagues spec is valid")
}

/// Spec for the fixtures table.
pub fn fixtures_spec() -> TableSpec {
    TableSpec::new(
        "fixtures",
        vec![
            ColumnSpec::new("fixture_id", ColumnType::Integer).primary_key(),
            ColumnSpec::new("league_id", ColumnType::Integer).not_null(),
            ColumnSpec::new("event_date", ColumnType::Text),
            ColumnSpec::new("round", ColumnType::Text),
            ColumnSpec::new("status_short", ColumnType::Text),
            ColumnSpec::new("home_team_id", ColumnType::Integer).not_null(),
            ColumnSpec::new("home_team", ColumnType::Text),
            ColumnSpec::new("away_team_id", ColumnType::Integer).not_null(),
            ColumnSpec::new("away_team", ColumnType::Text),
            ColumnSpec::new("goals_home_team", ColumnType::Integer),
            ColumnSpec::new("goals_away_team", ColumnType::Integer),
        ],
    )
    .expect("bundled fixtures spec is valid")
}

/// One row of the leagues table, mapped by name from the API payload.
#[derive(Debug, Clone, Deserialize)]
pub struct LeagueRow {
    pub league_id: u64,
    pub name: String,
    #[serde(rename = "type")]
    pub league_type: Option<String>,
    pub country: String,
    pub country_code: Option<String>,
    pub season: u16,
    pub season_start: Option<String>,
    pub season_end: Option<String>,
    pub standings: Option<i64>,
    pub is_current: Option<i64>,
}

impl LeagueRow {
    /// Map one entry of `api.leagues` into a named-field row.
    pub fn from_api(value: &Value) -> Result<Self> {
        Ok(serde_json::from_value(value.clone())?)
    }

    /// Row values in leagues-spec column order.
    pub fn into_values(self) -> Vec<rusqlite::types::Value> {
        use rusqlite::types::Value as Sql;
        vec![
            Sql::Integer(self.league_id as i64),
            Sql::Text(self.name),
            self.league_type.map_or(Sql::Null, Sql::Text),
            Sql::Text(self.country),
            self.country_code.map_or(Sql::Null, Sql::Text),
            Sql::Integer(i64::from(self.season)),
            self.season_start.map_or(Sql::Null, Sql::Text),
            self.season_end.map_or(Sql::Null, Sql::Text),
            self.standings.map_or(Sql::Null, Sql::Integer),
            self.is_current.map_or(Sql::Null, Sql::Integer),
        ]
    }
}

/// Row values for a fixture in fixtures-spec column order.
pub fn fixture_row(fixture: &crate::standings::Fixture) -> Vec<rusqlite::types::Value> {
    use rusqlite::types::Value as Sql;
    vec![
        Sql::Integer(fixture.fixture_id as i64),
        Sql::Integer(fixture.league_id as i64),
        Sql::Text(fixture.event_date.to_string()),
        Sql::Null,
        Sql::Text(fixture.status_short.clone()),
        Sql::Integer(fixture.home_team_id as i64),
        Sql::Text(fixture.home_team.clone()),
        Sql::Integer(fixture.away_team_id as i64),
        Sql::Text(fixture.away_team.clone()),
        Sql::Integer(i64::from(fixture.home_goals)),
        Sql::Integer(i64::from(fixture.away_goals)),
    ]
}
