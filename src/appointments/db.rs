//! Appointment storage. Plain `rusqlite` functions over a borrowed
//! connection so the service can compose them inside one transaction.
//!
//! Dates are stored in canonical `YYYY-MM-DD` form, which makes date
//! equality and chronological ordering plain string operations.

use rusqlite::{Connection, OptionalExtension, Row, params};
use uuid::Uuid;

use super::models::{Appointment, AppointmentData};

fn appointment_from_row(row: &Row) -> rusqlite::Result<Appointment> {
    Ok(Appointment {
        id: row.get(0)?,
        owner_id: row.get(1)?,
        date: row.get(2)?,
        first_name: row.get(3)?,
        last_name: row.get(4)?,
        all_day: row.get(5)?,
    })
}

pub fn find_by_id(conn: &Connection, id: &str) -> rusqlite::Result<Option<Appointment>> {
    conn.query_row(
        "SELECT id, owner_id, date, first_name, last_name, all_day
         FROM appointment WHERE id = ?",
        [id],
        appointment_from_row,
    )
    .optional()
}

/// Every appointment one owner has on one date, minus the excluded
/// id. Passing no exclusion matches everything on the date.
pub fn find_on_date(
    conn: &Connection,
    owner_id: &str,
    date: &str,
    exclude_id: Option<&str>,
) -> rusqlite::Result<Vec<Appointment>> {
    let mut stmt = conn.prepare(
        "SELECT id, owner_id, date, first_name, last_name, all_day
         FROM appointment
         WHERE owner_id = ?1 AND date = ?2 AND id != ?3",
    )?;
    let rows = stmt
        .query_map(
            params![owner_id, date, exclude_id.unwrap_or("")],
            appointment_from_row,
        )?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(rows)
}

pub fn insert(
    conn: &Connection,
    owner_id: &str,
    data: &AppointmentData,
) -> rusqlite::Result<String> {
    let id = Uuid::new_v4().to_string();
    conn.execute(
        "INSERT INTO appointment (id, owner_id, date, first_name, last_name, all_day)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            id,
            owner_id,
            data.date,
            data.first_name,
            data.last_name,
            data.all_day
        ],
    )?;
    Ok(id)
}

/// Overwrite the client-editable fields. The owner column is left
/// untouched so ownership can never change through an update.
pub fn update(conn: &Connection, id: &str, data: &AppointmentData) -> rusqlite::Result<usize> {
    conn.execute(
        "UPDATE appointment
         SET date = ?1, first_name = ?2, last_name = ?3, all_day = ?4
         WHERE id = ?5",
        params![data.date, data.first_name, data.last_name, data.all_day, id],
    )
}

pub fn remove(conn: &Connection, id: &str) -> rusqlite::Result<usize> {
    conn.execute("DELETE FROM appointment WHERE id = ?", [id])
}

/// An owner's appointments in chronological order, ties resolved by
/// insertion order. A non-empty prefix restricts the result to rows
/// where the first or last name starts with it, case-insensitively.
pub fn list_for_owner(
    conn: &Connection,
    owner_id: &str,
    name_prefix: Option<&str>,
) -> rusqlite::Result<Vec<Appointment>> {
    match name_prefix {
        Some(prefix) if !prefix.trim().is_empty() => {
            let pattern = format!("{}%", escape_like(prefix.trim()));
            let mut stmt = conn.prepare(
                r"SELECT id, owner_id, date, first_name, last_name, all_day
                 FROM appointment
                 WHERE owner_id = ?1
                   AND (first_name LIKE ?2 ESCAPE '\' OR last_name LIKE ?2 ESCAPE '\')
                 ORDER BY date ASC, rowid ASC",
            )?;
            let rows = stmt
                .query_map(params![owner_id, pattern], appointment_from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(rows)
        }
        _ => {
            let mut stmt = conn.prepare(
                "SELECT id, owner_id, date, first_name, last_name, all_day
                 FROM appointment
                 WHERE owner_id = ?1
                 ORDER BY date ASC, rowid ASC",
            )?;
            let rows = stmt
                .query_map([owner_id], appointment_from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(rows)
        }
    }
}

pub fn count_all(conn: &Connection) -> rusqlite::Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM appointment", [], |row| row.get(0))
}

/// Escape `%`, `_`, and the escape character itself so user input
/// matches literally inside a LIKE pattern.
fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
