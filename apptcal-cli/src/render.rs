//! TUI rendering traits for apptcal types.
//!
//! Extension traits that add colored terminal rendering to apptcal-core
//! types using owo_colors.

use apptcal_core::Appointment;
use apptcal_core::appointment::DATETIME_DISPLAY_FORMAT;
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Appointment {
    fn render(&self) -> String {
        format!(
            "{} {} {} {}: {} {}",
            self.code().cyan().bold(),
            self.start_time().format(DATETIME_DISPLAY_FORMAT),
            "to".dimmed(),
            self.end_time().format(DATETIME_DISPLAY_FORMAT),
            self.description(),
            format!("({})", self.category()).dimmed()
        )
    }
}

/// Render a numbered list line, e.g. "3. W001 2025-03-20 15:00 to ...".
/// `position` is 1-based across the whole list, not the page.
pub fn render_numbered(position: usize, appointment: &Appointment) -> String {
    format!("{:>3}. {}", position, appointment.render())
}

pub fn render_heading(text: &str) -> String {
    format!("--- {} ---", text).bold().to_string()
}
