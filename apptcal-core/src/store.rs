//! Flat-file storage for appointments.
//!
//! One appointment per line, pipe-delimited:
//!
//! ```text
//! code|yyyy-MM-dd|HH:mm|HH:mm|description
//! W001|2025-03-20|15:00|16:00|Quarterly review
//! ```
//!
//! The end time shares the start date. The category is not stored; it is
//! rebuilt from the code's first letter through the category table.

use std::borrow::Cow;
use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::appointment::Appointment;
use crate::category::CategoryTable;
use crate::error::AppointmentResult;

pub const DEFAULT_FILE_NAME: &str = "appointments.txt";

const FIELD_SEPARATOR: char = '|';
const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

/// Why a stored line could not be turned into an appointment.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RecordError {
    #[error("expected 5 fields, found {0}")]
    FieldCount(usize),

    #[error("invalid date/time '{0}'")]
    DateTime(String),
}

/// Parse a single stored line.
pub fn parse_record(line: &str, categories: &CategoryTable) -> Result<Appointment, RecordError> {
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    let [code, date, start, end, description] = fields.as_slice() else {
        return Err(RecordError::FieldCount(fields.len()));
    };

    let date = NaiveDate::parse_from_str(date, DATE_FORMAT)
        .map_err(|_| RecordError::DateTime((*date).to_string()))?;
    let start = parse_time(start)?;
    let end = parse_time(end)?;

    Ok(Appointment::new(
        *code,
        NaiveDateTime::new(date, start),
        NaiveDateTime::new(date, end),
        *description,
        categories.category_for_code(code),
    ))
}

fn parse_time(s: &str) -> Result<NaiveTime, RecordError> {
    NaiveTime::parse_from_str(s, TIME_FORMAT).map_err(|_| RecordError::DateTime(s.to_string()))
}

/// Parse file content, skipping lines that don't hold a valid record.
pub fn parse_records(content: &str, categories: &CategoryTable) -> Vec<Appointment> {
    let mut appointments = Vec::new();

    for (index, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        match parse_record(line, categories) {
            Ok(appointment) => appointments.push(appointment),
            Err(e @ RecordError::FieldCount(_)) => {
                debug!(line = index + 1, "skipping record: {e}");
            }
            Err(e @ RecordError::DateTime(_)) => {
                warn!(line = index + 1, "skipping record: {e}");
            }
        }
    }

    appointments
}

/// Format one appointment as a stored line (without trailing newline).
pub fn format_record(appointment: &Appointment) -> String {
    format!(
        "{}|{}|{}|{}|{}",
        appointment.code(),
        appointment.start_time().format(DATE_FORMAT),
        appointment.start_time().format(TIME_FORMAT),
        appointment.end_time().format(TIME_FORMAT),
        appointment.description()
    )
}

/// Format a whole collection as file content.
pub fn format_records(appointments: &[Appointment]) -> String {
    appointments
        .iter()
        .map(|a| format!("{}\n", format_record(a)))
        .collect()
}

/// Load all appointments from `path`. A missing file is an empty collection.
///
/// Bytes that aren't valid UTF-8 are replaced rather than failing the
/// whole load, so one bad line can't hide the rest of the file.
pub fn load(path: &Path, categories: &CategoryTable) -> AppointmentResult<Vec<Appointment>> {
    if !path.exists() {
        debug!(path = %path.display(), "no appointments file yet");
        return Ok(Vec::new());
    }

    let bytes = std::fs::read(path)?;
    let content = String::from_utf8_lossy(&bytes);
    if let Cow::Owned(_) = content {
        warn!(path = %path.display(), "appointments file is not valid UTF-8, bad bytes replaced");
    }
    let appointments = parse_records(&content, categories);

    info!(
        path = %path.display(),
        count = appointments.len(),
        "loaded appointments"
    );
    Ok(appointments)
}

/// Write all appointments to `path`, replacing its content.
pub fn save(path: &Path, appointments: &[Appointment]) -> AppointmentResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    std::fs::write(path, format_records(appointments))?;

    info!(
        path = %path.display(),
        count = appointments.len(),
        "saved appointments"
    );
    Ok(())
}
