//! Appointment operations. Each mutation runs its authorization and
//! conflict checks inside the same transaction as the write, so a
//! concurrent request cannot double-book between check and commit.

use tokio_rusqlite::Connection;

use super::authorize::authorized_appointment;
use super::conflict::check_for_conflicts;
use super::db as storage;
use super::error::AppointmentError;
use super::models::{Appointment, AppointmentData};
use super::validate::validate_appointment;

/// Wrap a domain error so it survives a `Connection::call` boundary.
fn call_err(err: AppointmentError) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Other(Box::new(err))
}

/// Trim the payload and rewrite the date in canonical form. Assumes
/// the payload already validated.
fn normalized(data: &AppointmentData, date: chrono::NaiveDate) -> AppointmentData {
    let mut data = data.trimmed();
    data.date = date.format("%Y-%m-%d").to_string();
    data
}

/// Create an appointment owned by the acting user and return its id.
pub async fn create_appointment(
    db: &Connection,
    acting_user: Option<&str>,
    data: &AppointmentData,
) -> Result<String, AppointmentError> {
    let user_id = acting_user
        .ok_or(AppointmentError::Unauthenticated)?
        .to_string();

    let date = validate_appointment(data)?;
    let data = normalized(data, date);

    let id = db
        .call(move |conn| {
            let tx = conn.transaction()?;
            check_for_conflicts(&tx, &data, None, &user_id).map_err(call_err)?;
            let id = storage::insert(&tx, &user_id, &data)?;
            tx.commit()?;
            Ok(id)
        })
        .await?;

    Ok(id)
}

/// Replace the client-editable fields of an owned appointment. The
/// conflict scope excludes the appointment itself so keeping the same
/// date never self-conflicts. Returns the number of rows changed.
pub async fn update_appointment(
    db: &Connection,
    id: &str,
    acting_user: Option<&str>,
    data: &AppointmentData,
) -> Result<usize, AppointmentError> {
    let user_id = acting_user
        .ok_or(AppointmentError::Unauthenticated)?
        .to_string();

    let date = validate_appointment(data)?;
    let data = normalized(data, date);
    let id = id.to_string();

    let updated = db
        .call(move |conn| {
            let tx = conn.transaction()?;
            authorized_appointment(&tx, &id, &user_id).map_err(call_err)?;
            check_for_conflicts(&tx, &data, Some(&id), &user_id).map_err(call_err)?;
            let updated = storage::update(&tx, &id, &data)?;
            tx.commit()?;
            Ok(updated)
        })
        .await?;

    Ok(updated)
}

/// Remove an owned appointment. Returns the number of rows deleted.
pub async fn remove_appointment(
    db: &Connection,
    id: &str,
    acting_user: Option<&str>,
) -> Result<usize, AppointmentError> {
    let user_id = acting_user
        .ok_or(AppointmentError::Unauthenticated)?
        .to_string();
    let id = id.to_string();

    let removed = db
        .call(move |conn| {
            let tx = conn.transaction()?;
            authorized_appointment(&tx, &id, &user_id).map_err(call_err)?;
            let removed = storage::remove(&tx, &id)?;
            tx.commit()?;
            Ok(removed)
        })
        .await?;

    Ok(removed)
}

/// The acting user's appointments in date order, optionally filtered
/// to names starting with `name_prefix`.
pub async fn list_appointments(
    db: &Connection,
    acting_user: Option<&str>,
    name_prefix: Option<&str>,
) -> Result<Vec<Appointment>, AppointmentError> {
    let user_id = acting_user
        .ok_or(AppointmentError::Unauthenticated)?
        .to_string();
    let prefix = name_prefix.map(str::to_string);

    let appointments = db
        .call(move |conn| Ok(storage::list_for_owner(conn, &user_id, prefix.as_deref())?))
        .await?;

    Ok(appointments)
}
