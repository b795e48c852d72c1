//! Public types for the appointments API
use serde::{Deserialize, Serialize};

use crate::appointments::Appointment;

/// Query parameters for listing appointments
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Case-insensitive prefix matched against first or last names
    pub search: Option<String>,
}

/// Response containing the acting user's appointments in date order
#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub appointments: Vec<Appointment>,
}

/// Response to creating an appointment
#[derive(Debug, Serialize)]
pub struct CreateResponse {
    pub id: String,
}

/// Response to updating an appointment
#[derive(Debug, Serialize)]
pub struct UpdateResponse {
    pub updated: usize,
}

/// Response to removing an appointment
#[derive(Debug, Serialize)]
pub struct RemoveResponse {
    pub removed: usize,
}
