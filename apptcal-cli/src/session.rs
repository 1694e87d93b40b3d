//! One load/serve/save cycle over the appointments file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use apptcal_core::{AppointmentManager, CategoryTable, store};
use owo_colors::OwoColorize;

pub struct Session {
    pub manager: AppointmentManager,
    path: PathBuf,
    load_failed: bool,
}

impl Session {
    /// Load the appointments file into a fresh manager.
    ///
    /// A file that can't be read is reported and the session starts with
    /// an empty collection. Such a session will not save over the file.
    pub fn open(path: PathBuf, categories: CategoryTable) -> Self {
        let mut manager = AppointmentManager::new(categories);
        let mut load_failed = false;

        match store::load(&path, manager.categories()) {
            Ok(appointments) => manager.replace_all(appointments),
            Err(e) => {
                load_failed = true;
                tracing::error!(path = %path.display(), "failed to load appointments: {e}");
                eprintln!(
                    "{}",
                    format!("Error loading appointments from {}: {}", path.display(), e).red()
                );
            }
        }

        Session {
            manager,
            path,
            load_failed,
        }
    }

    pub fn save(&self) -> Result<()> {
        if self.load_failed {
            anyhow::bail!(
                "Refusing to overwrite {}: it could not be read at startup",
                self.path.display()
            );
        }
        store::save(&self.path, &self.manager.all())
            .with_context(|| format!("Failed to save appointments to {}", self.path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use apptcal_core::Appointment;
    use chrono::NaiveDate;

    #[test]
    fn test_open_missing_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let session = Session::open(dir.path().join("appointments.txt"), CategoryTable::standard());
        assert!(session.manager.is_empty());
    }

    #[test]
    fn test_open_unreadable_path_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        // A directory can't be read as a file.
        let session = Session::open(dir.path().to_path_buf(), CategoryTable::standard());
        assert!(session.manager.is_empty());
    }

    #[test]
    fn test_save_refused_after_failed_load() {
        let dir = tempfile::tempdir().unwrap();
        let session = Session::open(dir.path().to_path_buf(), CategoryTable::standard());

        let err = session.save().unwrap_err();
        assert!(err.to_string().contains("Refusing to overwrite"));
        assert!(dir.path().is_dir());
    }

    #[test]
    fn test_invalid_utf8_line_survives_save() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("appointments.txt");
        std::fs::write(
            &path,
            b"W001|2030-01-01|09:00|10:00|Standup\nP001|2030-01-02|09:00|10:00|Caf\xe9\n",
        )
        .unwrap();

        let session = Session::open(path.clone(), CategoryTable::standard());
        assert_eq!(session.manager.len(), 2);
        session.save().unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("W001|2030-01-01|09:00|10:00|Standup"));

        let reopened = Session::open(path, CategoryTable::standard());
        let codes: Vec<_> = reopened
            .manager
            .all()
            .iter()
            .map(|a| a.code().to_string())
            .collect();
        assert_eq!(codes, vec!["W001", "P001"]);
    }

    #[test]
    fn test_save_and_reopen_keeps_codes_unique() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("appointments.txt");

        let mut session = Session::open(path.clone(), CategoryTable::standard());
        let start = NaiveDate::from_ymd_opt(2030, 5, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        let code = session.manager.generate_code("W").unwrap();
        session.manager.add(Appointment::new(
            code,
            start,
            start + chrono::Duration::hours(1),
            "Kickoff",
            "Work",
        ));
        session.save().unwrap();

        let mut reopened = Session::open(path, CategoryTable::standard());
        assert_eq!(reopened.manager.len(), 1);
        assert_eq!(reopened.manager.all()[0].category(), "Work");
        assert_eq!(reopened.manager.generate_code("Work").unwrap(), "W002");
    }
}
