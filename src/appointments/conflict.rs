//! The all-day exclusivity rule.
//!
//! Within one owner's book, an all-day appointment owns its date: it
//! cannot be added when the date holds anything, and nothing can be
//! added when the date holds an all-day appointment. Regular
//! appointments coexist freely.

use rusqlite::Connection;

use super::db;
use super::error::AppointmentError;
use super::models::{Appointment, AppointmentData};

/// Apply the exclusivity rule to a candidate against the rows already
/// on its date. `existing` must already be scoped to the owner and
/// date, minus the appointment being updated.
pub fn conflict_with_existing(
    all_day: bool,
    existing: &[Appointment],
) -> Option<AppointmentError> {
    let has_all_day = existing.iter().any(|a| a.all_day);
    let has_any = !existing.is_empty();

    if all_day && has_any {
        Some(AppointmentError::ConflictAllDay)
    } else if !all_day && has_all_day {
        Some(AppointmentError::ConflictRegular)
    } else {
        None
    }
}

/// Query the candidate's date scope and apply the rule. Must run in
/// the same transaction as the mutation that follows it, otherwise a
/// concurrent write can slip in between check and mutation.
pub fn check_for_conflicts(
    conn: &Connection,
    data: &AppointmentData,
    exclude_id: Option<&str>,
    user_id: &str,
) -> Result<(), AppointmentError> {
    let existing = db::find_on_date(conn, user_id, &data.date, exclude_id)?;

    match conflict_with_existing(data.all_day, &existing) {
        Some(conflict) => Err(conflict),
        None => Ok(()),
    }
}
