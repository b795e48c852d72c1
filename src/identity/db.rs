//! User and session rows.

use rusqlite::{Connection, OptionalExtension, params};

use super::models::{Session, User};

/// A user row with its password material.
pub struct UserRecord {
    pub user: User,
    pub password_hash: Vec<u8>,
    pub password_salt: Vec<u8>,
}

/// A session row with its age precomputed by SQLite, both timestamps
/// being UTC.
pub struct SessionRecord {
    pub user_id: String,
    pub age_hours: i64,
}

pub fn insert_user(
    conn: &Connection,
    user: &User,
    password_hash: &[u8],
    password_salt: &[u8],
) -> rusqlite::Result<usize> {
    conn.execute(
        "INSERT INTO user (id, username, password_hash, password_salt)
         VALUES (?1, ?2, ?3, ?4)",
        params![user.id, user.username, password_hash, password_salt],
    )
}

pub fn find_user_by_username(
    conn: &Connection,
    username: &str,
) -> rusqlite::Result<Option<UserRecord>> {
    conn.query_row(
        "SELECT id, username, password_hash, password_salt FROM user WHERE username = ?",
        [username],
        |row| {
            Ok(UserRecord {
                user: User {
                    id: row.get(0)?,
                    username: row.get(1)?,
                },
                password_hash: row.get(2)?,
                password_salt: row.get(3)?,
            })
        },
    )
    .optional()
}

pub fn insert_session(conn: &Connection, session: &Session) -> rusqlite::Result<usize> {
    conn.execute(
        "INSERT INTO session (token, user_id) VALUES (?1, ?2)",
        params![session.token, session.user_id],
    )
}

pub fn find_session(conn: &Connection, token: &str) -> rusqlite::Result<Option<SessionRecord>> {
    conn.query_row(
        "SELECT user_id,
                CAST((julianday('now') - julianday(created_at)) * 24 AS INTEGER)
         FROM session WHERE token = ?",
        [token],
        |row| {
            Ok(SessionRecord {
                user_id: row.get(0)?,
                age_hours: row.get(1)?,
            })
        },
    )
    .optional()
}

pub fn remove_session(conn: &Connection, token: &str) -> rusqlite::Result<usize> {
    conn.execute("DELETE FROM session WHERE token = ?", [token])
}
