//! Ownership checks for mutating operations.

use rusqlite::Connection;

use super::db;
use super::error::AppointmentError;
use super::models::Appointment;

/// Load an appointment and confirm `user_id` owns it. A missing row
/// is always `NotFound`; ownership is only checked on rows that
/// exist.
pub fn authorized_appointment(
    conn: &Connection,
    id: &str,
    user_id: &str,
) -> Result<Appointment, AppointmentError> {
    let appointment = db::find_by_id(conn, id)?.ok_or(AppointmentError::NotFound)?;

    if appointment.owner_id != user_id {
        return Err(AppointmentError::NotAuthorized);
    }

    Ok(appointment)
}
