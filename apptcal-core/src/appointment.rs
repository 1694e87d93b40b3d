//! The appointment record.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Display format for start/end times (e.g. "2025-03-20 15:00").
pub const DATETIME_DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";

/// A single time-boxed appointment.
///
/// The code is fixed at construction; the remaining fields can be
/// updated in place. Whoever builds the appointment is responsible for
/// `end_time >= start_time` and for the category matching the code's
/// leading letter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    code: String,
    start_time: NaiveDateTime,
    end_time: NaiveDateTime,
    description: String,
    category: String,
}

impl Appointment {
    pub fn new(
        code: impl Into<String>,
        start_time: NaiveDateTime,
        end_time: NaiveDateTime,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Appointment {
            code: code.into(),
            start_time,
            end_time,
            description: description.into(),
            category: category.into(),
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn start_time(&self) -> NaiveDateTime {
        self.start_time
    }

    pub fn end_time(&self) -> NaiveDateTime {
        self.end_time
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Full-word category name, e.g. "Work".
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Calendar date the appointment starts on.
    pub fn date(&self) -> NaiveDate {
        self.start_time.date()
    }

    /// The category letter: first character of the code.
    pub fn category_code(&self) -> Option<char> {
        self.code.chars().next()
    }

    pub fn set_start_time(&mut self, start_time: NaiveDateTime) {
        self.start_time = start_time;
    }

    pub fn set_end_time(&mut self, end_time: NaiveDateTime) {
        self.end_time = end_time;
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
    }
}

impl fmt::Display for Appointment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} - {} to {}: {} ({})",
            self.code,
            self.start_time.format(DATETIME_DISPLAY_FORMAT),
            self.end_time.format(DATETIME_DISPLAY_FORMAT),
            self.description,
            self.category
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_category_code_is_first_letter_of_code() {
        let app = Appointment::new("M042", at(2025, 3, 20, 9, 0), at(2025, 3, 20, 9, 30), "Dentist", "Medical");
        assert_eq!(app.category_code(), Some('M'));
        assert_eq!(app.date(), NaiveDate::from_ymd_opt(2025, 3, 20).unwrap());
    }

    #[test]
    fn test_setters_update_in_place() {
        let mut app = Appointment::new("W001", at(2025, 3, 20, 9, 0), at(2025, 3, 20, 10, 0), "Standup", "Work");
        app.set_start_time(at(2025, 3, 21, 9, 0));
        app.set_end_time(at(2025, 3, 21, 9, 15));
        app.set_description("Retro");
        app.set_category("Other");

        assert_eq!(app.code(), "W001");
        assert_eq!(app.start_time(), at(2025, 3, 21, 9, 0));
        assert_eq!(app.end_time(), at(2025, 3, 21, 9, 15));
        assert_eq!(app.description(), "Retro");
        assert_eq!(app.category(), "Other");
    }

    #[test]
    fn test_display_format() {
        let app = Appointment::new("P003", at(2025, 3, 20, 18, 0), at(2025, 3, 20, 19, 30), "Dinner", "Personal");
        assert_eq!(
            app.to_string(),
            "P003 - 2025-03-20 18:00 to 2025-03-20 19:30: Dinner (Personal)"
        );
    }
}
