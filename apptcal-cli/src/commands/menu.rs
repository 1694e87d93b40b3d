//! The interactive console menu.

use anyhow::Result;
use apptcal_core::{Appointment, AppointmentManager};
use chrono::{Local, NaiveDateTime};
use dialoguer::{Input, Select};
use owo_colors::OwoColorize;

use crate::commands::add::{self, NewAppointment};
use crate::commands::next::{render_upcoming, upcoming};
use crate::pager::Pager;
use crate::render::{render_heading, render_numbered};
use crate::session::Session;
use crate::utils::input::{
    check_date_not_past, check_description, check_end, check_start, parse_date, parse_time,
};
use crate::utils::tui::{clear_screen, pause, prompt_until};

const MAIN_MENU: [&str; 6] = [
    "View all appointments",
    "View appointments by category",
    "View appointments for a specific day",
    "Add new appointment",
    "Delete appointment",
    "Exit",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PagerAction {
    Prev,
    Next,
    Delete,
    Back,
}

impl PagerAction {
    fn label(self) -> &'static str {
        match self {
            PagerAction::Prev => "Previous page",
            PagerAction::Next => "Next page",
            PagerAction::Delete => "Delete an appointment",
            PagerAction::Back => "Back to main menu",
        }
    }
}

/// Actions available on the current page.
fn pager_actions(pager: &Pager, is_empty: bool) -> Vec<PagerAction> {
    let mut actions = Vec::new();
    if pager.has_next() {
        actions.push(PagerAction::Next);
    }
    if pager.has_prev() {
        actions.push(PagerAction::Prev);
    }
    if !is_empty {
        actions.push(PagerAction::Delete);
    }
    actions.push(PagerAction::Back);
    actions
}

fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

pub fn run(session: &mut Session, page_size: usize) -> Result<()> {
    loop {
        clear_screen();
        println!("{}", render_heading("Upcoming Appointments"));
        for line in render_upcoming(&upcoming(&session.manager, now())) {
            println!("{}", line);
        }
        println!();

        let choice = Select::new()
            .with_prompt("Appointment Calendar")
            .items(&MAIN_MENU)
            .default(0)
            .interact()?;

        match choice {
            0 => browse(session, "All Appointments", page_size, |m| m.all())?,
            1 => view_by_category(session, page_size)?,
            2 => view_day(session, page_size)?,
            3 => add_appointment(session)?,
            4 => delete_appointment(session, page_size)?,
            _ => break,
        }
    }

    println!("Exiting the application. Goodbye!");
    Ok(())
}

/// Paginated view over whatever `fetch` returns. The list is fetched
/// again after a delete.
fn browse<F>(session: &mut Session, title: &str, page_size: usize, fetch: F) -> Result<()>
where
    F: Fn(&AppointmentManager) -> Vec<Appointment>,
{
    let mut appointments = fetch(&session.manager);
    let mut pager = Pager::new(appointments.len(), page_size);

    loop {
        clear_screen();
        println!(
            "{}",
            render_heading(&format!(
                "{} (Page {} of {})",
                title,
                pager.page_number(),
                pager.page_count()
            ))
        );

        if appointments.is_empty() {
            println!("{}", "No appointments found".dimmed());
        }
        for i in pager.range() {
            println!("{}", render_numbered(i + 1, &appointments[i]));
        }
        println!();

        let actions = pager_actions(&pager, appointments.is_empty());
        let labels: Vec<&str> = actions.iter().map(|a| a.label()).collect();
        let choice = Select::new()
            .with_prompt("Menu Options")
            .items(&labels)
            .default(0)
            .interact()?;

        match actions[choice] {
            PagerAction::Next => pager.next(),
            PagerAction::Prev => pager.prev(),
            PagerAction::Delete => {
                perform_delete(session)?;
                appointments = fetch(&session.manager);
                pager.set_total(appointments.len());

                if appointments.is_empty() {
                    println!("No more appointments to delete.");
                    pause("Press Enter to return to main menu...")?;
                    return Ok(());
                }
            }
            PagerAction::Back => return Ok(()),
        }
    }
}

/// Ask for a category. None means the user went back to the main menu.
fn select_category(manager: &AppointmentManager) -> Result<Option<(char, String)>> {
    let categories: Vec<(char, String)> = manager
        .categories()
        .iter()
        .map(|(letter, name)| (letter, name.to_string()))
        .collect();

    let mut labels: Vec<String> = categories
        .iter()
        .map(|(letter, name)| format!("{} - {}", letter, name))
        .collect();
    labels.push("Back to main menu".to_string());

    let choice = Select::new()
        .with_prompt("Select a category")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(categories.get(choice).cloned())
}

fn view_by_category(session: &mut Session, page_size: usize) -> Result<()> {
    clear_screen();
    println!("{}", render_heading("View Appointments by Category"));

    let Some((_, name)) = select_category(&session.manager)? else {
        return Ok(());
    };

    if session.manager.by_category(&name).is_empty() {
        println!("No appointments found for category: {}", name);
        return pause("Press Enter to continue...");
    }

    let title = format!("{} Appointments", name);
    browse(session, &title, page_size, |m| m.by_category(&name))
}

fn view_day(session: &mut Session, page_size: usize) -> Result<()> {
    clear_screen();
    println!("{}", render_heading("Appointments for a Specific Day"));

    let Some(date) = prompt_until("Enter date (YYYY-MM-DD)", parse_date)? else {
        return Ok(());
    };

    let title = format!("Appointments on {}", date.format("%a %b %-d, %Y"));
    browse(session, &title, page_size, |m| m.for_day(date))
}

fn add_appointment(session: &mut Session) -> Result<()> {
    clear_screen();
    println!("{}", render_heading("Add New Appointment"));
    println!("{}", "(Enter 'cancel' at any prompt to abort)".dimmed());

    let Some(date) = prompt_until("Enter date (YYYY-MM-DD)", |s| {
        check_date_not_past(parse_date(s)?, now().date())
    })?
    else {
        return Ok(());
    };

    let Some(start) = prompt_until("Enter start time (HH:MM)", |s| {
        check_start(NaiveDateTime::new(date, parse_time(s)?), now())
    })?
    else {
        return Ok(());
    };

    let Some(end) = prompt_until("Enter end time (HH:MM)", |s| {
        check_end(start, NaiveDateTime::new(date, parse_time(s)?))
    })?
    else {
        return Ok(());
    };

    let Some(description) = prompt_until("Enter description", check_description)? else {
        return Ok(());
    };

    let Some((letter, _)) = select_category(&session.manager)? else {
        return Ok(());
    };

    let new = NewAppointment {
        date,
        start: start.time(),
        end: end.time(),
        description,
        category: letter.to_string(),
    };

    match add::create(&mut session.manager, new) {
        Ok(appointment) => println!(
            "{}",
            format!("Appointment added successfully. Code: {}", appointment.code()).green()
        ),
        Err(e) => eprintln!("{}", e.to_string().red()),
    }

    pause("Press Enter to return to main menu...")
}

fn delete_appointment(session: &mut Session, page_size: usize) -> Result<()> {
    if session.manager.is_empty() {
        println!("There are no appointments to delete.");
        return pause("Press Enter to continue...");
    }

    browse(session, "Delete Appointment", page_size, |m| m.all())
}

fn perform_delete(session: &mut Session) -> Result<()> {
    let code: String = Input::new()
        .with_prompt("  Enter appointment code to delete")
        .allow_empty(true)
        .interact_text()?;

    if session.manager.delete(code.trim()) {
        println!("{}", "Appointment deleted successfully.".green());
    } else {
        println!("{}", "Appointment not found.".yellow());
    }

    pause("Press Enter to continue...")
}
