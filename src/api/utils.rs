//! Shared helpers for API handlers.

use std::sync::{Arc, RwLock};

use http::{HeaderMap, header};

use crate::api::state::AppState;
use crate::identity::authenticated_user;

type SharedState = Arc<RwLock<AppState>>;

/// Pull the bearer token out of the Authorization header, if any.
pub fn bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(|token| token.to_string())
}

/// Resolve the acting user for a request. `None` means the request
/// carries no live session; each operation decides whether that is
/// an error.
pub async fn acting_user(
    state: &SharedState,
    headers: &HeaderMap,
) -> Result<Option<String>, crate::api::public::ApiError> {
    let (db, ttl_hours) = {
        let shared_state = state.read().unwrap();
        (shared_state.db.clone(), shared_state.config.session_ttl_hours)
    };

    let token = bearer_token(headers);
    let user_id = authenticated_user(&db, token.as_deref(), ttl_hours).await?;
    Ok(user_id)
}
