//! Router for the appointments API

use std::convert::Infallible;
use std::sync::{Arc, RwLock};
use std::time::Duration;

use axum::{
    Router,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Json, sse::Event, sse::KeepAlive, sse::Sse},
    routing::{get, put},
};
use axum_extra::extract::Query;
use chrono::NaiveDate;
use tokio_stream::StreamExt as _;
use tokio_stream::wrappers::BroadcastStream;

use super::public;
use crate::api::state::{AppState, AppointmentEvent, ChangeAction};
use crate::api::utils::acting_user;
use crate::appointments::{
    Appointment, AppointmentData, AppointmentError, create_appointment, list_appointments,
    remove_appointment, update_appointment,
};

type SharedState = Arc<RwLock<AppState>>;

fn publish_event(state: &SharedState, event: AppointmentEvent) {
    // Nobody listening is fine
    let _ = state.read().unwrap().events.send(event);
}

/// Build the stored form of an appointment from a client payload, for
/// the change event. Mirrors what the service persisted: trimmed
/// fields and the date zero-padded.
fn event_appointment(id: &str, owner_id: &str, data: &AppointmentData) -> Appointment {
    let data = data.trimmed();
    // The payload already passed validation, so the date parses
    let date = NaiveDate::parse_from_str(&data.date, "%Y-%m-%d")
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or(data.date);
    Appointment {
        id: id.to_string(),
        owner_id: owner_id.to_string(),
        date,
        first_name: data.first_name,
        last_name: data.last_name,
        all_day: data.all_day,
    }
}

/// List the acting user's appointments, optionally filtered by a name
/// prefix
async fn list_handler(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Query(params): Query<public::ListQuery>,
) -> Result<Json<public::ListResponse>, crate::api::public::ApiError> {
    let db = state.read().unwrap().db.clone();
    let user = acting_user(&state, &headers).await?;
    let appointments = list_appointments(&db, user.as_deref(), params.search.as_deref()).await?;

    Ok(Json(public::ListResponse { appointments }))
}

/// Create an appointment owned by the acting user
async fn create_handler(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Json(payload): Json<AppointmentData>,
) -> Result<(StatusCode, Json<public::CreateResponse>), crate::api::public::ApiError> {
    let db = state.read().unwrap().db.clone();
    let user = acting_user(&state, &headers).await?;
    let id = create_appointment(&db, user.as_deref(), &payload).await?;

    if let Some(owner_id) = user {
        publish_event(
            &state,
            AppointmentEvent {
                action: ChangeAction::Created,
                id: id.clone(),
                appointment: Some(event_appointment(&id, &owner_id, &payload)),
                owner_id,
            },
        );
    }

    Ok((StatusCode::CREATED, Json(public::CreateResponse { id })))
}

/// Update an appointment owned by the acting user
async fn update_handler(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(payload): Json<AppointmentData>,
) -> Result<Json<public::UpdateResponse>, crate::api::public::ApiError> {
    let db = state.read().unwrap().db.clone();
    let user = acting_user(&state, &headers).await?;
    let updated = update_appointment(&db, &id, user.as_deref(), &payload).await?;

    if let Some(owner_id) = user {
        publish_event(
            &state,
            AppointmentEvent {
                action: ChangeAction::Updated,
                id: id.clone(),
                appointment: Some(event_appointment(&id, &owner_id, &payload)),
                owner_id,
            },
        );
    }

    Ok(Json(public::UpdateResponse { updated }))
}

/// Remove an appointment owned by the acting user
async fn remove_handler(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<Json<public::RemoveResponse>, crate::api::public::ApiError> {
    let db = state.read().unwrap().db.clone();
    let user = acting_user(&state, &headers).await?;
    let removed = remove_appointment(&db, &id, user.as_deref()).await?;

    if let Some(owner_id) = user {
        publish_event(
            &state,
            AppointmentEvent {
                action: ChangeAction::Removed,
                id: id.clone(),
                appointment: None,
                owner_id,
            },
        );
    }

    Ok(Json(public::RemoveResponse { removed }))
}

/// Stream the acting user's appointment changes as server-sent events
async fn events_handler(
    State(state): State<SharedState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, crate::api::public::ApiError> {
    let Some(owner_id) = acting_user(&state, &headers).await? else {
        return Err(AppointmentError::Unauthenticated.into());
    };

    let events = state.read().unwrap().events.subscribe();

    // The receiver rides inside the response body, so a disconnecting
    // client drops its subscription along with the stream. A lagged
    // receiver skips what it missed.
    let sse_stream = BroadcastStream::new(events).filter_map(move |event| match event {
        Ok(event) if event.owner_id == owner_id => serde_json::to_string(&event)
            .ok()
            .map(|chunk| Ok::<Event, Infallible>(Event::default().data(chunk))),
        _ => None,
    });

    let resp = Sse::new(sse_stream)
        .keep_alive(
            KeepAlive::default()
                .text("keep-alive")
                .interval(Duration::from_secs(15)),
        )
        .into_response();

    Ok(resp)
}

/// Create the appointments router
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/", get(list_handler).post(create_handler))
        .route("/events", get(events_handler))
        .route("/{id}", put(update_handler).delete(remove_handler))
}
