use serde::Serialize;
use tokio::sync::broadcast;
use tokio_rusqlite::Connection;

use crate::appointments::Appointment;
use crate::core::AppConfig;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeAction {
    Created,
    Updated,
    Removed,
}

/// A change to one appointment, fanned out to the owner's live
/// subscribers. Removals carry only the id since the row is gone.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentEvent {
    pub action: ChangeAction,
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub appointment: Option<Appointment>,
    // Routing only, never sent over the wire
    #[serde(skip)]
    pub owner_id: String,
}

pub struct AppState {
    pub db: Connection,
    pub config: AppConfig,
    // Fan-out channel for appointment change events
    pub events: broadcast::Sender<AppointmentEvent>,
}

impl AppState {
    pub fn new(db: Connection, config: AppConfig) -> Self {
        let (events, _) = broadcast::channel(256);
        Self { db, config, events }
    }
}
