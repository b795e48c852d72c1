//! SQLite connection handling and schema management.

use rusqlite::Connection;
use tokio_rusqlite::Connection as AsyncConnection;

/// Open the database file inside the given directory with foreign
/// keys enabled.
pub async fn async_db(db_path: &str) -> Result<AsyncConnection, tokio_rusqlite::Error> {
    let db = AsyncConnection::open(format!("{}/bookd.db", db_path)).await?;
    db.call(|conn| {
        conn.pragma_update(None, "foreign_keys", "ON")?;
        Ok(())
    })
    .await?;
    Ok(db)
}

/// Create all tables and indexes. Every statement is idempotent so
/// this is safe to run against an existing database.
pub fn initialize_db(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS user (
            id TEXT PRIMARY KEY,
            username TEXT NOT NULL UNIQUE,
            password_hash BLOB NOT NULL,
            password_salt BLOB NOT NULL,
            created_at DATETIME DEFAULT CURRENT_TIMESTAMP
        );

        CREATE TABLE IF NOT EXISTS session (
            token TEXT PRIMARY KEY,
            user_id TEXT NOT NULL REFERENCES user(id) ON DELETE CASCADE,
            created_at DATETIME DEFAULT CURRENT_TIMESTAMP
        );

        CREATE TABLE IF NOT EXISTS appointment (
            id TEXT PRIMARY KEY,
            owner_id TEXT NOT NULL REFERENCES user(id) ON DELETE CASCADE,
            date TEXT NOT NULL,
            first_name TEXT NOT NULL,
            last_name TEXT NOT NULL,
            all_day INTEGER NOT NULL DEFAULT 0,
            created_at DATETIME DEFAULT CURRENT_TIMESTAMP
        );

        CREATE INDEX IF NOT EXISTS idx_appointment_owner_date
            ON appointment(owner_id, date);",
    )
}

/// Bring an existing database up to the current schema. The schema
/// only ever grows so re-running the create statements is enough.
pub fn migrate_db(conn: &Connection) -> rusqlite::Result<()> {
    initialize_db(conn)
}
