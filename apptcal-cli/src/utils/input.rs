//! Parsing and validation of user-entered values.

use anyhow::{Context, Result};
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

pub const CANCEL_KEYWORD: &str = "cancel";

/// Whether the user typed the cancel keyword.
pub fn is_cancel(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case(CANCEL_KEYWORD)
}

/// Parse YYYY-MM-DD.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|_| anyhow::anyhow!("Invalid date format. Please use YYYY-MM-DD."))
}

/// Parse HH:MM (24h).
pub fn parse_time(input: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(input.trim(), "%H:%M")
        .map_err(|_| anyhow::anyhow!("Invalid time format. Please use HH:MM."))
}

/// Parse a duration like "30m" or "1h 30m".
pub fn parse_duration(input: &str) -> Result<Duration> {
    let std_dur = humantime::parse_duration(input.trim())
        .map_err(|e| anyhow::anyhow!("Could not parse duration \"{}\": {}", input, e))?;
    Duration::from_std(std_dur).context("Duration too large")
}

/// A new appointment's date may be today but not earlier.
pub fn check_date_not_past(date: NaiveDate, today: NaiveDate) -> Result<NaiveDate> {
    if date < today {
        anyhow::bail!("Date cannot be in the past. Please enter today's date or a future date.");
    }
    Ok(date)
}

/// A new appointment's start must not be in the past.
pub fn check_start(start: NaiveDateTime, now: NaiveDateTime) -> Result<NaiveDateTime> {
    if start < now {
        anyhow::bail!("Time cannot be in the past. Please enter a future time.");
    }
    Ok(start)
}

/// The end must be on the start's day and not before the start.
///
/// Only the end's time of day is stored, so an appointment cannot run
/// past midnight.
pub fn check_end(start: NaiveDateTime, end: NaiveDateTime) -> Result<NaiveDateTime> {
    if end < start {
        anyhow::bail!("End time must be after the start time.");
    }
    if end.date() != start.date() {
        anyhow::bail!("Appointments must end on the day they start.");
    }
    Ok(end)
}

/// Descriptions are stored pipe-delimited, one per line.
pub fn check_description(input: &str) -> Result<String> {
    if input.contains('|') {
        anyhow::bail!("Description cannot contain '|'.");
    }
    if input.contains(['\n', '\r']) {
        anyhow::bail!("Description must be a single line.");
    }
    Ok(input.trim().to_string())
}
