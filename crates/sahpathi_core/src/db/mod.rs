//! Local SQLite file holding the per-module key-value slots.
//!
//! # Responsibility
//! - Open the slot database and bring its schema up to date.
//! - Refuse files that cannot safely back the slot store.
//!
//! # Invariants
//! - Schema version lives in `PRAGMA user_version`.
//! - A connection handed out always has a `kv_slots` table.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};

/// Table every slot row lives in.
pub const SLOT_TABLE: &str = "kv_slots";

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
    /// The file was written by a newer build; its slots are left alone.
    SchemaTooNew { found: u32, supported: u32 },
    /// One schema step failed; earlier steps of the same run were rolled back.
    MigrationFailed {
        version: u32,
        step: &'static str,
        source: rusqlite::Error,
    },
    /// Schema version claims to be current but the slot table is gone.
    SlotTableMissing { version: u32 },
}

impl DbError {
    /// Stable code used in `error_code=` log fields.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Sqlite(_) => "sqlite_error",
            Self::SchemaTooNew { .. } => "schema_too_new",
            Self::MigrationFailed { .. } => "migration_failed",
            Self::SlotTableMissing { .. } => "slot_table_missing",
        }
    }
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::SchemaTooNew { found, supported } => write!(
                f,
                "slot database schema {found} is newer than this build understands ({supported})"
            ),
            Self::MigrationFailed {
                version,
                step,
                source,
            } => write!(f, "schema step {version} ({step}) failed: {source}"),
            Self::SlotTableMissing { version } => write!(
                f,
                "slot database at schema {version} has no {SLOT_TABLE} table"
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) | Self::MigrationFailed { source: err, .. } => Some(err),
            Self::SchemaTooNew { .. } | Self::SlotTableMissing { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
