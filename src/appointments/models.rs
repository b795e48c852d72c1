use serde::{Deserialize, Serialize};

/// A stored appointment. `owner_id` is set from the acting user at
/// creation time and is never accepted from clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: String,
    pub owner_id: String,
    pub date: String,
    pub first_name: String,
    pub last_name: String,
    pub all_day: bool,
}

/// The client-supplied fields of an appointment, shared by create
/// and update. Fields missing from a payload deserialize as empty so
/// validation reports them instead of the JSON layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppointmentData {
    pub date: String,
    pub first_name: String,
    pub last_name: String,
    pub all_day: bool,
}

impl AppointmentData {
    /// The form that gets persisted: surrounding whitespace stripped
    /// from every text field.
    pub fn trimmed(&self) -> Self {
        Self {
            date: self.date.trim().to_string(),
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            all_day: self.all_day,
        }
    }
}
