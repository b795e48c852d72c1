//! Accounts and bearer sessions.
//!
//! The rest of the app asks one question here: which user, if any,
//! does this token belong to? Passwords are stored as PBKDF2-HMAC
//! hashes with per-user salts and compared in constant time.

pub mod db;
pub mod models;

pub use models::{Session, User};

use base64::Engine;
use pbkdf2::pbkdf2_hmac;
use rand::RngCore;
use sha2::Sha256;
use subtle::ConstantTimeEq;
use thiserror::Error;
use tokio_rusqlite::Connection;
use uuid::Uuid;

const PBKDF2_ITERATIONS: u32 = 600_000;
const KEY_LENGTH: usize = 32;
const SALT_LENGTH: usize = 16;
const TOKEN_LENGTH: usize = 32;

#[derive(Debug, Error, PartialEq)]
pub enum IdentityError {
    #[error("Incorrect username or password")]
    InvalidCredentials,

    #[error("Username is required")]
    InvalidUsername,

    #[error("Username is already taken")]
    UsernameTaken,

    #[error("Database error: {0}")]
    Storage(String),
}

impl From<rusqlite::Error> for IdentityError {
    fn from(err: rusqlite::Error) -> Self {
        IdentityError::Storage(err.to_string())
    }
}

impl From<tokio_rusqlite::Error> for IdentityError {
    fn from(err: tokio_rusqlite::Error) -> Self {
        match err {
            tokio_rusqlite::Error::Other(inner) => match inner.downcast::<IdentityError>() {
                Ok(domain) => *domain,
                Err(other) => IdentityError::Storage(other.to_string()),
            },
            other => IdentityError::Storage(other.to_string()),
        }
    }
}

fn call_err(err: IdentityError) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Other(Box::new(err))
}

pub fn hash_password(password: &str, salt: &[u8]) -> Vec<u8> {
    let mut key = vec![0u8; KEY_LENGTH];
    pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, PBKDF2_ITERATIONS, &mut key);
    key
}

pub fn verify_password(password: &str, salt: &[u8], expected: &[u8]) -> bool {
    let derived = hash_password(password, salt);
    derived.as_slice().ct_eq(expected).into()
}

pub fn generate_salt() -> [u8; SALT_LENGTH] {
    let mut salt = [0u8; SALT_LENGTH];
    rand::thread_rng().fill_bytes(&mut salt);
    salt
}

/// An opaque url-safe bearer token.
pub fn generate_token() -> String {
    let mut bytes = [0u8; TOKEN_LENGTH];
    rand::thread_rng().fill_bytes(&mut bytes);
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(bytes)
}

/// Register a new account with a unique username.
pub async fn create_user(
    db: &Connection,
    username: &str,
    password: &str,
) -> Result<User, IdentityError> {
    let username = username.trim().to_string();
    if username.is_empty() {
        return Err(IdentityError::InvalidUsername);
    }

    let salt = generate_salt();
    let hash = hash_password(password, &salt);
    let user = User {
        id: Uuid::new_v4().to_string(),
        username,
    };

    let created = db
        .call(move |conn| {
            if db::find_user_by_username(conn, &user.username)?.is_some() {
                return Err(call_err(IdentityError::UsernameTaken));
            }
            db::insert_user(conn, &user, &hash, &salt)?;
            Ok(user)
        })
        .await?;

    Ok(created)
}

pub async fn find_user(db: &Connection, username: &str) -> Result<Option<User>, IdentityError> {
    let username = username.trim().to_string();
    let record = db
        .call(move |conn| Ok(db::find_user_by_username(conn, &username)?))
        .await?;
    Ok(record.map(|r| r.user))
}

/// Verify credentials and mint a new session token.
pub async fn login(
    db: &Connection,
    username: &str,
    password: &str,
) -> Result<Session, IdentityError> {
    let username = username.trim().to_string();
    let password = password.to_string();

    let session = db
        .call(move |conn| {
            let Some(record) = db::find_user_by_username(conn, &username)? else {
                return Err(call_err(IdentityError::InvalidCredentials));
            };

            if !verify_password(&password, &record.password_salt, &record.password_hash) {
                return Err(call_err(IdentityError::InvalidCredentials));
            }

            let session = Session {
                token: generate_token(),
                user_id: record.user.id,
            };
            db::insert_session(conn, &session)?;
            Ok(session)
        })
        .await?;

    Ok(session)
}

/// Discard a session token. Unknown tokens are a no-op so logout is
/// idempotent.
pub async fn logout(db: &Connection, token: &str) -> Result<(), IdentityError> {
    let token = token.to_string();
    db.call(move |conn| {
        db::remove_session(conn, &token)?;
        Ok(())
    })
    .await?;
    Ok(())
}

/// Resolve a bearer token to a user id. Sessions older than
/// `ttl_hours` count as absent and are cleaned up on the way out.
pub async fn authenticated_user(
    db: &Connection,
    token: Option<&str>,
    ttl_hours: i64,
) -> Result<Option<String>, IdentityError> {
    let Some(token) = token else {
        return Ok(None);
    };
    let token = token.to_string();

    let user_id = db
        .call(move |conn| match db::find_session(conn, &token)? {
            Some(session) if session.age_hours < ttl_hours => Ok(Some(session.user_id)),
            Some(_) => {
                db::remove_session(conn, &token)?;
                Ok(None)
            }
            None => Ok(None),
        })
        .await?;

    Ok(user_id)
}
