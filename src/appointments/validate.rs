//! Field-level validation for appointment payloads.

use chrono::{NaiveDate, Utc};

use super::error::AppointmentError;
use super::models::AppointmentData;

pub(crate) const DATE_REQUIRED: &str = "Date is required.";
pub(crate) const DATE_MALFORMED: &str = "Date must be formatted as YYYY-MM-DD.";
pub(crate) const DATE_IN_PAST: &str = "Date cannot be in the past.";

/// Check a candidate payload against today's date in UTC. Returns the
/// parsed date so callers can store it in canonical form.
pub fn validate_appointment(data: &AppointmentData) -> Result<NaiveDate, AppointmentError> {
    validate_appointment_at(data, Utc::now().date_naive())
}

/// Checks run date, then first name, then last name, and the first
/// failure wins. Today's date is scheduleable.
pub fn validate_appointment_at(
    data: &AppointmentData,
    today: NaiveDate,
) -> Result<NaiveDate, AppointmentError> {
    let raw_date = data.date.trim();
    if raw_date.is_empty() {
        return Err(AppointmentError::InvalidDate(DATE_REQUIRED));
    }

    let date = NaiveDate::parse_from_str(raw_date, "%Y-%m-%d")
        .map_err(|_| AppointmentError::InvalidDate(DATE_MALFORMED))?;

    if date < today {
        return Err(AppointmentError::InvalidDate(DATE_IN_PAST));
    }

    if data.first_name.trim().is_empty() {
        return Err(AppointmentError::InvalidFirstName);
    }

    if data.last_name.trim().is_empty() {
        return Err(AppointmentError::InvalidLastName);
    }

    Ok(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2030, 6, 15).unwrap()
    }

    fn payload(date: &str, first: &str, last: &str) -> AppointmentData {
        AppointmentData {
            date: date.to_string(),
            first_name: first.to_string(),
            last_name: last.to_string(),
            all_day: false,
        }
    }

    #[test]
    fn it_accepts_a_future_date() {
        let data = payload("2030-06-16", "Ada", "Lovelace");
        assert_eq!(
            validate_appointment_at(&data, today()),
            Ok(NaiveDate::from_ymd_opt(2030, 6, 16).unwrap())
        );
    }

    #[test]
    fn it_accepts_todays_date() {
        let data = payload("2030-06-15", "Ada", "Lovelace");
        assert!(validate_appointment_at(&data, today()).is_ok());
    }

    #[test]
    fn it_rejects_an_empty_date() {
        let data = payload("   ", "Ada", "Lovelace");
        assert_eq!(
            validate_appointment_at(&data, today()),
            Err(AppointmentError::InvalidDate(DATE_REQUIRED))
        );
    }

    #[test]
    fn it_rejects_a_malformed_date() {
        for date in ["tomorrow", "2030-13-01", "2030-06-15T10:00", "06-16-2030"] {
            let data = payload(date, "Ada", "Lovelace");
            assert_eq!(
                validate_appointment_at(&data, today()),
                Err(AppointmentError::InvalidDate(DATE_MALFORMED)),
                "{date} should not parse"
            );
        }
    }

    #[test]
    fn it_rejects_a_past_date() {
        let data = payload("2030-06-14", "Ada", "Lovelace");
        assert_eq!(
            validate_appointment_at(&data, today()),
            Err(AppointmentError::InvalidDate(DATE_IN_PAST))
        );
    }

    #[test]
    fn it_rejects_a_blank_first_name() {
        let data = payload("2030-06-16", "  ", "Lovelace");
        assert_eq!(
            validate_appointment_at(&data, today()),
            Err(AppointmentError::InvalidFirstName)
        );
    }

    #[test]
    fn it_rejects_a_blank_last_name() {
        let data = payload("2030-06-16", "Ada", "");
        assert_eq!(
            validate_appointment_at(&data, today()),
            Err(AppointmentError::InvalidLastName)
        );
    }

    #[test]
    fn it_reports_the_date_error_before_name_errors() {
        let data = payload("2030-01-01", "", "");
        assert_eq!(
            validate_appointment_at(&data, today()),
            Err(AppointmentError::InvalidDate(DATE_IN_PAST))
        );
    }

    #[test]
    fn it_reports_the_first_name_before_the_last_name() {
        let data = payload("2030-06-16", "", "");
        assert_eq!(
            validate_appointment_at(&data, today()),
            Err(AppointmentError::InvalidFirstName)
        );
    }
}
