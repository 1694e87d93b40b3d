use anyhow::Result;
use apptcal_core::{Appointment, AppointmentManager};
use chrono::NaiveDateTime;
use owo_colors::OwoColorize;

use crate::render::Render;

/// What to show as "upcoming": today's appointments if there are any,
/// otherwise the next one after now.
#[derive(Debug, PartialEq)]
pub enum Upcoming {
    Today(Vec<Appointment>),
    Next(Appointment),
    Nothing,
}

pub fn upcoming(manager: &AppointmentManager, now: NaiveDateTime) -> Upcoming {
    let today = manager.for_day(now.date());
    if !today.is_empty() {
        return Upcoming::Today(today);
    }

    match manager.next_upcoming(now) {
        Some(next) => Upcoming::Next(next),
        None => Upcoming::Nothing,
    }
}

pub fn render_upcoming(upcoming: &Upcoming) -> Vec<String> {
    match upcoming {
        Upcoming::Today(appointments) => {
            let mut lines = vec!["Today's appointments:".bold().to_string()];
            lines.extend(appointments.iter().map(|a| format!("  {}", a.render())));
            lines
        }
        Upcoming::Next(appointment) => vec![
            "Next upcoming appointment:".bold().to_string(),
            format!("  {}", appointment.render()),
        ],
        Upcoming::Nothing => vec!["No upcoming appointments.".dimmed().to_string()],
    }
}

pub fn run(manager: &AppointmentManager, now: NaiveDateTime) -> Result<()> {
    for line in render_upcoming(&upcoming(manager, now)) {
        println!("{}", line);
    }
    Ok(())
}
