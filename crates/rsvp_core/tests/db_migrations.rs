use rsvp_core::db::migrations::latest_version;
use rsvp_core::db::{open_db, open_db_in_memory, DbError};
use rusqlite::Connection;

#[test]
fn open_db_in_memory_applies_all_migrations() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn), latest_version());
    for table in ["users", "events", "invitations", "attendances"] {
        assert_table_exists(&conn, table);
    }
}

#[test]
fn opening_same_database_twice_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rsvp.db");

    let first = open_db(&path).unwrap();
    first
        .execute(
            "INSERT INTO users (uuid, name) VALUES ('00000000-0000-4000-8000-000000000001', 'jen');",
            [],
        )
        .unwrap();
    drop(first);

    let second = open_db(&path).unwrap();
    assert_eq!(schema_version(&second), latest_version());
    let users: i64 = second
        .query_row("SELECT COUNT(*) FROM users;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(users, 1);
}

#[test]
fn opening_database_with_newer_schema_version_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    match open_db(&path).unwrap_err() {
        DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, 999);
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn opening_version_one_database_adds_join_tables_and_keeps_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("v1.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch(
        "CREATE TABLE users (
            uuid TEXT PRIMARY KEY NOT NULL,
            name TEXT NOT NULL CHECK (length(trim(name)) > 0),
            created_at INTEGER NOT NULL DEFAULT (strftime('%s', 'now') * 1000)
         );
         CREATE TABLE events (
            uuid TEXT PRIMARY KEY NOT NULL,
            owner_uuid TEXT NOT NULL REFERENCES users(uuid),
            description TEXT NOT NULL DEFAULT '',
            event_date TEXT NULL,
            created_at INTEGER NOT NULL DEFAULT (strftime('%s', 'now') * 1000)
         );
         INSERT INTO users (uuid, name) VALUES ('u1', 'jen');
         PRAGMA user_version = 1;",
    )
    .unwrap();
    drop(conn);

    let upgraded = open_db(&path).unwrap();
    assert_eq!(schema_version(&upgraded), latest_version());
    assert_table_exists(&upgraded, "invitations");
    assert_table_exists(&upgraded, "attendances");
    let name: String = upgraded
        .query_row("SELECT name FROM users WHERE uuid = 'u1';", [], |row| row.get(0))
        .unwrap();
    assert_eq!(name, "jen");
}

#[test]
fn schema_rejects_duplicate_join_pairs() {
    let conn = open_db_in_memory().unwrap();
    conn.execute_batch(
        "INSERT INTO users (uuid, name) VALUES ('u1', 'jen');
         INSERT INTO events (uuid, owner_uuid, description) VALUES ('e1', 'u1', 'party');
         INSERT INTO attendances (uuid, event_uuid, attendee_uuid) VALUES ('a1', 'e1', 'u1');",
    )
    .unwrap();

    let duplicate = conn.execute(
        "INSERT INTO attendances (uuid, event_uuid, attendee_uuid) VALUES ('a2', 'e1', 'u1');",
        [],
    );
    assert!(duplicate.is_err());
}

#[test]
fn schema_rejects_blank_user_names() {
    let conn = open_db_in_memory().unwrap();

    let result = conn.execute("INSERT INTO users (uuid, name) VALUES ('u1', '   ');", []);
    assert!(result.is_err());
}

fn schema_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
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
