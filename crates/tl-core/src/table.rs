//! Managed warehouse tables and their fixed execution orders

use serde::{Deserialize, Serialize};
use std::fmt;

/// A warehouse relation managed by the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Table {
    /// Raw event log rows, one per user action
    StagingEvents,
    /// Raw song/artist metadata rows
    StagingSongs,
    /// Fact table, one row per NextSong play event
    Songplays,
    /// User dimension
    Users,
    /// Song dimension
    Songs,
    /// Artist dimension
    Artists,
    /// Time dimension
    Time,
}

impl Table {
    /// SQL name of the table
    pub fn name(&self) -> &'static str {
        match self {
            Table::StagingEvents => "staging_events",
            Table::StagingSongs => "staging_songs",
            Table::Songplays => "songplays",
            Table::Users => "users",
            Table::Songs => "songs",
            Table::Artists => "artists",
            Table::Time => "time",
        }
    }

    /// Whether this is a transient staging table (dropped and reloaded each
    /// run) as opposed to a durable fact/dimension table
    pub fn is_staging(&self) -> bool {
        matches!(self, Table::StagingEvents | Table::StagingSongs)
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Order in which tables are dropped.
///
/// The fixed order of these lists is an execution-order contract, not an
/// incidental convenience. No foreign keys are declared, so order within
/// the DDL lists does not affect correctness, but it is preserved as
/// written.
pub const DROP_ORDER: [Table; 7] = [
    Table::StagingEvents,
    Table::StagingSongs,
    Table::Songplays,
    Table::Users,
    Table::Songs,
    Table::Artists,
    Table::Time,
];

/// Order in which tables are created
pub const CREATE_ORDER: [Table; 7] = [
    Table::StagingEvents,
    Table::StagingSongs,
    Table::Songplays,
    Table::Users,
    Table::Songs,
    Table::Artists,
    Table::Time,
];

/// Order in which staging tables are bulk-loaded
pub const COPY_ORDER: [Table; 2] = [Table::StagingEvents, Table::StagingSongs];

/// Order in which final tables are populated: the fact table first, then
/// the dimensions
pub const INSERT_ORDER: [Table; 5] = [
    Table::Songplays,
    Table::Users,
    Table::Songs,
    Table::Artists,
    Table::Time,
];

#[cfg(test)]
#[path = "table_test.rs"]
mod tests;
