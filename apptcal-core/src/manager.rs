//! In-memory appointment collection.

use std::collections::{HashMap, HashSet};

use chrono::{NaiveDate, NaiveDateTime};
use tracing::debug;

use crate::appointment::Appointment;
use crate::category::{CategoryTable, letter_of};
use crate::code::next_free_code;
use crate::error::{AppointmentError, AppointmentResult};

/// Owns the appointment collection and the per-category code counters.
///
/// # Invariants
/// - For every letter, the counter is at least the number of appointments
///   whose code starts with that letter.
/// - A generated code never equals the code of an appointment currently
///   in the collection.
/// - Counters never shrink; deleting an appointment leaves a gap.
#[derive(Debug, Clone)]
pub struct AppointmentManager {
    categories: CategoryTable,
    appointments: Vec<Appointment>,
    counters: HashMap<char, u32>,
}

impl Default for AppointmentManager {
    fn default() -> Self {
        Self::new(CategoryTable::standard())
    }
}

impl AppointmentManager {
    pub fn new(categories: CategoryTable) -> Self {
        let counters = categories.letters().map(|l| (l, 0)).collect();
        AppointmentManager {
            categories,
            appointments: Vec::new(),
            counters,
        }
    }

    pub fn categories(&self) -> &CategoryTable {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.appointments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.appointments.is_empty()
    }

    /// Append an appointment. Counters are left alone.
    pub fn add(&mut self, appointment: Appointment) {
        debug!(code = appointment.code(), "adding appointment");
        self.appointments.push(appointment);
    }

    /// Snapshot of every appointment in insertion order.
    pub fn all(&self) -> Vec<Appointment> {
        self.appointments.clone()
    }

    /// Appointments starting on `date`, in insertion order.
    pub fn for_day(&self, date: NaiveDate) -> Vec<Appointment> {
        self.appointments
            .iter()
            .filter(|a| a.date() == date)
            .cloned()
            .collect()
    }

    /// Appointments whose category name matches `name` (case-insensitive).
    pub fn by_category(&self, name: &str) -> Vec<Appointment> {
        self.appointments
            .iter()
            .filter(|a| a.category().eq_ignore_ascii_case(name))
            .cloned()
            .collect()
    }

    /// The appointment with the earliest start strictly after `now`.
    /// On equal start times the one added first wins.
    pub fn next_upcoming(&self, now: NaiveDateTime) -> Option<Appointment> {
        self.appointments
            .iter()
            .filter(|a| a.start_time() > now)
            .min_by_key(|a| a.start_time())
            .cloned()
    }

    /// Snapshot sorted by start time; ties keep insertion order.
    pub fn sorted(&self) -> Vec<Appointment> {
        let mut sorted = self.appointments.clone();
        sorted.sort_by_key(|a| a.start_time());
        sorted
    }

    /// Remove every appointment whose code matches, ignoring case.
    /// Returns true if anything was removed.
    pub fn delete(&mut self, code: &str) -> bool {
        let before = self.appointments.len();
        self.appointments
            .retain(|a| !a.code().eq_ignore_ascii_case(code.trim()));
        let removed = before - self.appointments.len();

        debug!(code, removed, "delete appointment");
        removed > 0
    }

    /// Replace the whole collection and rebuild the counters from it.
    pub fn replace_all(&mut self, appointments: Vec<Appointment>) {
        self.appointments = appointments;

        self.counters.clear();
        for letter in self.categories.letters() {
            self.counters.insert(letter, 0);
        }
        for letter in self.appointments.iter().filter_map(|a| a.category_code()) {
            *self.counters.entry(letter).or_insert(0) += 1;
        }

        debug!(
            count = self.appointments.len(),
            counters = ?self.counters,
            "replaced appointment collection"
        );
    }

    /// Reserve the next free code for a category, given by letter ("W")
    /// or name ("Work").
    pub fn generate_code(&mut self, category: &str) -> AppointmentResult<String> {
        let letter = letter_of(category)
            .ok_or_else(|| AppointmentError::InvalidCategory(category.to_string()))?;
        let start = self.counters.get(&letter).copied().unwrap_or(0);

        let existing: HashSet<&str> = self.appointments.iter().map(|a| a.code()).collect();
        let (code, counter) = next_free_code(letter, start, &existing);

        self.counters.insert(letter, counter);
        Ok(code)
    }

    /// Current counter for a letter, matched exactly.
    pub fn counter(&self, letter: char) -> u32 {
        self.counters.get(&letter).copied().unwrap_or(0)
    }
}
