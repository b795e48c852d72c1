//! Everything that can go wrong with an appointment operation.
//!
//! The `Display` text of each variant is the user-facing message, so
//! API handlers can return errors verbatim.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum AppointmentError {
    /// The request carried no valid session.
    #[error("You must be logged in.")]
    Unauthenticated,

    /// Missing, malformed, or past date. Carries the exact message
    /// for the failure.
    #[error("{0}")]
    InvalidDate(&'static str),

    #[error("First name is required.")]
    InvalidFirstName,

    #[error("Last name is required.")]
    InvalidLastName,

    #[error("Appointment not found")]
    NotFound,

    #[error("You cannot modify or remove this appointment")]
    NotAuthorized,

    /// An all-day appointment cannot share its date with anything else.
    #[error("There is already another appointment on this date")]
    ConflictAllDay,

    /// A regular appointment cannot land on a date holding an all-day one.
    #[error("There is already an all-day appointment on this date")]
    ConflictRegular,

    #[error("Database error: {0}")]
    Storage(String),
}

impl AppointmentError {
    /// Stable machine-readable code for API clients.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Unauthenticated => "UNAUTHENTICATED",
            Self::InvalidDate(_) => "INVALID_DATE",
            Self::InvalidFirstName => "INVALID_FIRST_NAME",
            Self::InvalidLastName => "INVALID_LAST_NAME",
            Self::NotFound => "NOT_FOUND",
            Self::NotAuthorized => "NOT_AUTHORIZED",
            Self::ConflictAllDay => "CONFLICT_ALL_DAY",
            Self::ConflictRegular => "CONFLICT_REGULAR",
            Self::Storage(_) => "STORAGE",
        }
    }
}

impl From<rusqlite::Error> for AppointmentError {
    fn from(err: rusqlite::Error) -> Self {
        AppointmentError::Storage(err.to_string())
    }
}

/// Recover a domain error smuggled through a `Connection::call`
/// boundary as `tokio_rusqlite::Error::Other`. Anything else becomes
/// a storage error.
impl From<tokio_rusqlite::Error> for AppointmentError {
    fn from(err: tokio_rusqlite::Error) -> Self {
        match err {
            tokio_rusqlite::Error::Other(inner) => match inner.downcast::<AppointmentError>() {
                Ok(domain) => *domain,
                Err(other) => AppointmentError::Storage(other.to_string()),
            },
            other => AppointmentError::Storage(other.to_string()),
        }
    }
}
