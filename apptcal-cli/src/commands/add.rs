use anyhow::Result;
use apptcal_core::{Appointment, AppointmentManager};
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use owo_colors::OwoColorize;

use crate::commands::list::resolve_category;
use crate::session::Session;
use crate::utils::input::{
    check_date_not_past, check_description, check_end, check_start, parse_date, parse_duration,
    parse_time,
};

/// Fields for a new appointment, already parsed.
#[derive(Debug, Clone)]
pub struct NewAppointment {
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub description: String,
    /// Category letter or name
    pub category: String,
}

/// Validate, assign a fresh code and add to the manager.
///
/// Whether the start lies in the past is left to the caller, since the
/// interactive flow checks it while prompting.
pub fn create(manager: &mut AppointmentManager, new: NewAppointment) -> Result<Appointment> {
    let (letter, name) = resolve_category(manager.categories(), &new.category)?;
    let name = name.to_string();

    let start = NaiveDateTime::new(new.date, new.start);
    let end = check_end(start, NaiveDateTime::new(new.date, new.end))?;
    let description = check_description(&new.description)?;

    let code = manager.generate_code(&letter.to_string())?;
    let appointment = Appointment::new(code, start, end, description, name);
    manager.add(appointment.clone());

    tracing::info!(code = appointment.code(), "created appointment");
    Ok(appointment)
}

#[derive(Debug)]
pub struct AddArgs {
    pub date: String,
    pub start: String,
    pub end: Option<String>,
    pub duration: Option<String>,
    pub description: String,
    pub category: String,
}

/// Resolve the end time from --end, --duration, or the one hour default.
fn end_time(start: NaiveDateTime, end: Option<&str>, duration: Option<&str>) -> Result<NaiveTime> {
    let end = match (end, duration) {
        (Some(end), _) => NaiveDateTime::new(start.date(), parse_time(end)?),
        (None, Some(duration)) => start + parse_duration(duration)?,
        (None, None) => start + Duration::hours(1),
    };
    Ok(check_end(start, end)?.time())
}

pub fn run(session: &mut Session, args: AddArgs, now: NaiveDateTime) -> Result<()> {
    let date = check_date_not_past(parse_date(&args.date)?, now.date())?;
    let start = check_start(NaiveDateTime::new(date, parse_time(&args.start)?), now)?;
    let end = end_time(start, args.end.as_deref(), args.duration.as_deref())?;

    let appointment = create(
        &mut session.manager,
        NewAppointment {
            date,
            start: start.time(),
            end,
            description: args.description,
            category: args.category,
        },
    )?;

    session.save()?;

    println!(
        "{}",
        format!("  Appointment added. Code: {}", appointment.code()).green()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2030, 6, 1).unwrap()
    }

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn new_appointment(category: &str) -> NewAppointment {
        NewAppointment {
            date: date(),
            start: time(9, 0),
            end: time(10, 0),
            description: "Planning".to_string(),
            category: category.to_string(),
        }
    }

    #[test]
    fn test_create_assigns_sequential_codes() {
        let mut manager = AppointmentManager::default();

        let first = create(&mut manager, new_appointment("Work")).unwrap();
        let second = create(&mut manager, new_appointment("w")).unwrap();
        let third = create(&mut manager, new_appointment("Medical")).unwrap();

        assert_eq!(first.code(), "W001");
        assert_eq!(first.category(), "Work");
        assert_eq!(second.code(), "W002");
        assert_eq!(third.code(), "M001");
        assert_eq!(third.category(), "Medical");
        assert_eq!(manager.len(), 3);
    }

    #[test]
    fn test_create_rejects_unknown_category() {
        let mut manager = AppointmentManager::default();
        assert!(create(&mut manager, new_appointment("Wrk")).is_err());
        assert!(manager.is_empty());
    }

    #[test]
    fn test_create_rejects_end_before_start() {
        let mut manager = AppointmentManager::default();
        let mut new = new_appointment("W");
        new.end = time(8, 0);
        assert!(create(&mut manager, new).is_err());
        assert!(manager.is_empty());
        // A rejected appointment doesn't consume a code.
        assert_eq!(manager.counter('W'), 0);
    }

    #[test]
    fn test_create_rejects_pipe_in_description() {
        let mut manager = AppointmentManager::default();
        let mut new = new_appointment("P");
        new.description = "a|b".to_string();
        assert!(create(&mut manager, new).is_err());
    }

    #[test]
    fn test_end_time_defaults_to_one_hour() {
        let start = NaiveDateTime::new(date(), time(9, 0));
        assert_eq!(end_time(start, None, None).unwrap(), time(10, 0));
        assert_eq!(end_time(start, None, Some("45m")).unwrap(), time(9, 45));
        assert_eq!(end_time(start, Some("11:30"), Some("45m")).unwrap(), time(11, 30));
    }

    #[test]
    fn test_end_time_cannot_cross_midnight() {
        let start = NaiveDateTime::new(date(), time(23, 0));
        assert!(end_time(start, None, Some("2h")).is_err());
    }
}
