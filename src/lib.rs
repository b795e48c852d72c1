//! A small appointment book: per-user appointments with an all-day
//! exclusivity rule, served over an HTTP API with live change events.

pub mod api;
pub mod appointments;
pub mod cli;
pub mod core;
pub mod identity;
pub mod seed;
