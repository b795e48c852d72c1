//! Router for the auth API

use std::sync::{Arc, RwLock};

use axum::{Router, extract::State, http::HeaderMap, response::Json, routing::post};
use serde_json::{Value, json};

use super::public;
use crate::api::state::AppState;
use crate::api::utils::bearer_token;
use crate::identity;

type SharedState = Arc<RwLock<AppState>>;

/// Trade credentials for a bearer token
async fn login_handler(
    State(state): State<SharedState>,
    Json(payload): Json<public::LoginRequest>,
) -> Result<Json<public::LoginResponse>, crate::api::public::ApiError> {
    let db = state.read().unwrap().db.clone();
    let session = identity::login(&db, &payload.username, &payload.password).await?;

    Ok(Json(public::LoginResponse {
        token: session.token,
        user_id: session.user_id,
    }))
}

/// Discard the session carried by the Authorization header. Requests
/// without a token are a no-op.
async fn logout_handler(
    State(state): State<SharedState>,
    headers: HeaderMap,
) -> Result<Json<Value>, crate::api::public::ApiError> {
    let db = state.read().unwrap().db.clone();

    if let Some(token) = bearer_token(&headers) {
        identity::logout(&db, &token).await?;
    }

    Ok(Json(json!({ "success": true })))
}

/// Create the auth router
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/login", post(login_handler))
        .route("/logout", post(logout_handler))
}
