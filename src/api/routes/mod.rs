//! API routes module

pub mod appointments;
pub mod auth;

use std::sync::{Arc, RwLock};

use crate::api::state::AppState;
use axum::Router;

type SharedState = Arc<RwLock<AppState>>;

/// Create the combined API router
pub fn router() -> Router<SharedState> {
    Router::new()
        // Session routes
        .nest("/auth", auth::router())
        // Appointment CRUD plus the live change stream
        .nest("/appointments", appointments::router())
}
