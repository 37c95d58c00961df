//! Schema steps for the slot database.
//!
//! Steps only shape the slot table. Module payloads are opaque JSON and are
//! never rewritten by a schema step.

use super::{DbError, DbResult, SLOT_TABLE};
use log::info;
use rusqlite::{Connection, OptionalExtension};

struct SchemaStep {
    version: u32,
    name: &'static str,
    sql: &'static str,
}

const STEPS: &[SchemaStep] = &[SchemaStep {
    version: 1,
    name: "kv_slots",
    sql: include_str!("0001_kv_slots.sql"),
}];

/// Highest schema version this build can write.
pub fn latest_version() -> u32 {
    STEPS.iter().map(|step| step.version).max().unwrap_or(0)
}

/// Current `PRAGMA user_version` of `conn`.
pub fn schema_version(conn: &Connection) -> DbResult<u32> {
    Ok(conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?)
}

/// Runs every step newer than the stored version in one transaction, then
/// checks that the slot table is present.
pub fn apply_migrations(conn: &mut Connection) -> DbResult<()> {
    let found = schema_version(conn)?;
    let supported = latest_version();
    if found > supported {
        return Err(DbError::SchemaTooNew { found, supported });
    }

    let pending = STEPS
        .iter()
        .filter(|step| step.version > found)
        .collect::<Vec<_>>();
    if !pending.is_empty() {
        let tx = conn.transaction()?;
        for step in &pending {
            tx.execute_batch(step.sql)
                .and_then(|()| tx.pragma_update(None, "user_version", step.version))
                .map_err(|source| DbError::MigrationFailed {
                    version: step.version,
                    step: step.name,
                    source,
                })?;
            info!(
                "event=db_migrate module=db status=ok version={} step={}",
                step.version, step.name
            );
        }
        tx.commit()?;
    }

    ensure_slot_table(conn, supported)
}

fn ensure_slot_table(conn: &Connection, version: u32) -> DbResult<()> {
    let present = conn
        .query_row(
            "SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1;",
            [SLOT_TABLE],
            |_| Ok(()),
        )
        .optional()?
        .is_some();
    if present {
        Ok(())
    } else {
        Err(DbError::SlotTableMissing { version })
    }
}
