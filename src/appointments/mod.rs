//! The appointment book core: validation, ownership checks, the
//! all-day conflict rule, and the operations that compose them.

pub mod authorize;
pub mod conflict;
pub mod db;
pub mod error;
pub mod models;
pub mod service;
pub mod validate;

pub use error::AppointmentError;
pub use models::{Appointment, AppointmentData};
pub use service::{
    create_appointment, list_appointments, remove_appointment, update_appointment,
};
