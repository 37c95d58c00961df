use rusqlite::Connection;
use sahpathi_core::db::migrations::{latest_version, schema_version};
use sahpathi_core::db::{open_db, open_db_in_memory, DbError, SLOT_TABLE};
use sahpathi_core::store::{KeyValueStore, SqliteKeyValueStore, NOTES_KEY};

#[test]
fn open_db_in_memory_creates_slot_table() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn).unwrap(), latest_version());
    assert_table_exists(&conn, SLOT_TABLE);
}

#[test]
fn reopening_database_keeps_slots() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sahpathi.sqlite3");

    let first = open_db(&path).unwrap();
    SqliteKeyValueStore::new(&first)
        .set(NOTES_KEY, "[]")
        .unwrap();
    drop(first);

    let second = open_db(&path).unwrap();
    assert_eq!(schema_version(&second).unwrap(), latest_version());
    assert_eq!(
        SqliteKeyValueStore::new(&second).get(NOTES_KEY).unwrap(),
        Some("[]".to_string())
    );
}

#[test]
fn opening_database_with_newer_schema_version_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.sqlite3");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    let err = open_db(&path).unwrap_err();
    assert_eq!(err.code(), "schema_too_new");
    match err {
        DbError::SchemaTooNew { found, supported } => {
            assert_eq!(found, 999);
            assert_eq!(supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn current_schema_without_slot_table_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stripped.sqlite3");

    drop(open_db(&path).unwrap());
    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("DROP TABLE kv_slots;").unwrap();
    drop(conn);

    match open_db(&path).unwrap_err() {
        DbError::SlotTableMissing { version } => assert_eq!(version, latest_version()),
        other => panic!("unexpected error: {other}"),
    }
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "table {table_name} does not exist");
}
