use anyhow::{Context, Result};
use apptcal_core::{Appointment, AppointmentManager, CategoryTable};
use chrono::NaiveDate;
use owo_colors::OwoColorize;

use crate::render::render_numbered;

#[derive(Debug, Default)]
pub struct ListFilter {
    /// Category letter or name
    pub category: Option<String>,
    pub date: Option<NaiveDate>,
    pub sorted: bool,
}

/// Resolve a user-supplied category (letter or name) to its letter and full name.
pub fn resolve_category<'a>(categories: &'a CategoryTable, input: &str) -> Result<(char, &'a str)> {
    categories.resolve(input).ok_or_else(|| {
        let available: Vec<String> = categories
            .iter()
            .map(|(letter, name)| format!("{} ({})", letter, name))
            .collect();
        anyhow::anyhow!(
            "Category '{}' not found. Available: {}",
            input,
            available.join(", ")
        )
    })
}

pub fn select(manager: &AppointmentManager, filter: &ListFilter) -> Result<Vec<Appointment>> {
    let mut appointments = if filter.sorted {
        manager.sorted()
    } else {
        manager.all()
    };

    if let Some(date) = filter.date {
        appointments.retain(|a| a.date() == date);
    }

    if let Some(category) = &filter.category {
        let (_, name) = resolve_category(manager.categories(), category)?;
        appointments.retain(|a| a.category().eq_ignore_ascii_case(name));
    }

    Ok(appointments)
}

pub fn run(manager: &AppointmentManager, filter: ListFilter, json: bool) -> Result<()> {
    let appointments = select(manager, &filter)?;

    if json {
        let out = serde_json::to_string_pretty(&appointments)
            .context("Failed to serialize appointments")?;
        println!("{}", out);
        return Ok(());
    }

    if appointments.is_empty() {
        println!("{}", "No appointments found".dimmed());
        return Ok(());
    }

    for (i, appointment) in appointments.iter().enumerate() {
        println!("{}", render_numbered(i + 1, appointment));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn at(d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    fn manager() -> AppointmentManager {
        let mut manager = AppointmentManager::default();
        let rows = [
            ("W001", at(22, 9), "Work"),
            ("P001", at(20, 18), "Personal"),
            ("W002", at(20, 9), "Work"),
            ("M001", at(21, 11), "Medical"),
        ];
        for (code, start, category) in rows {
            manager.add(Appointment::new(
                code,
                start,
                start + chrono::Duration::hours(1),
                "test",
                category,
            ));
        }
        manager
    }

    fn codes(list: &[Appointment]) -> Vec<&str> {
        list.iter().map(|a| a.code()).collect()
    }

    #[test]
    fn test_no_filter_keeps_insertion_order() {
        let list = select(&manager(), &ListFilter::default()).unwrap();
        assert_eq!(codes(&list), vec!["W001", "P001", "W002", "M001"]);
    }

    #[test]
    fn test_sorted_orders_by_start() {
        let filter = ListFilter { sorted: true, ..Default::default() };
        let list = select(&manager(), &filter).unwrap();
        assert_eq!(codes(&list), vec!["W002", "P001", "M001", "W001"]);
    }

    #[test]
    fn test_filters_combine() {
        let filter = ListFilter {
            category: Some("w".to_string()),
            date: Some(NaiveDate::from_ymd_opt(2025, 3, 20).unwrap()),
            sorted: false,
        };
        let list = select(&manager(), &filter).unwrap();
        assert_eq!(codes(&list), vec!["W002"]);
    }

    #[test]
    fn test_category_by_full_name() {
        let filter = ListFilter { category: Some("medical".to_string()), ..Default::default() };
        let list = select(&manager(), &filter).unwrap();
        assert_eq!(codes(&list), vec!["M001"]);
    }

    #[test]
    fn test_unknown_category_is_an_error() {
        let filter = ListFilter { category: Some("Z".to_string()), ..Default::default() };
        let err = select(&manager(), &filter).unwrap_err();
        assert!(err.to_string().contains("Available: W (Work)"));
    }
}
