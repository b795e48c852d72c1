pub mod public;
pub mod routes;
mod server;
mod state;
mod utils;

pub use server::{app, serve};
pub use state::{AppState, AppointmentEvent, ChangeAction};
