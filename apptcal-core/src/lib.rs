//! Core types for apptcal.
//!
//! This crate owns everything with real invariants:
//! - `Appointment` and the `CategoryTable` that names its categories
//! - `AppointmentManager`, the in-memory collection with code generation
//! - `store` for the pipe-delimited appointments file
//! - `config` for the user's config.toml

pub mod appointment;
pub mod category;
pub mod code;
pub mod config;
pub mod error;
pub mod manager;
pub mod store;

pub use appointment::Appointment;
pub use category::CategoryTable;
pub use error::{AppointmentError, AppointmentResult};
pub use manager::AppointmentManager;
