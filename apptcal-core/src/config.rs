//! User configuration at ~/.config/apptcal/config.toml

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use config::{Config, File};
use serde::{Deserialize, Serialize};

use crate::category::CategoryTable;
use crate::error::{AppointmentError, AppointmentResult};
use crate::store::DEFAULT_FILE_NAME;

const DEFAULT_PAGE_SIZE: usize = 10;

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_FILE_NAME)
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    /// Where appointments are stored. `~` is expanded; relative paths
    /// resolve against the working directory.
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Appointments per page in the interactive lists.
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Category letter -> name. Work/Personal/Medical/Other when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<BTreeMap<String, String>>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            data_file: default_data_file(),
            page_size: DEFAULT_PAGE_SIZE,
            categories: None,
        }
    }
}

impl AppConfig {
    pub fn config_path() -> AppointmentResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| AppointmentError::Config("Could not determine config directory".into()))?
            .join("apptcal");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the user's config, writing a commented default file on first run.
    pub fn load() -> AppointmentResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> AppointmentResult<Self> {
        let config: AppConfig = Config::builder()
            .add_source(File::from(path).required(false))
            .build()
            .map_err(|e| AppointmentError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| AppointmentError::Config(e.to_string()))?;

        if config.page_size == 0 {
            return Err(AppointmentError::Config(
                "page_size must be at least 1".into(),
            ));
        }

        Ok(config)
    }

    /// The data file with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        let expanded = shellexpand::tilde(&self.data_file.to_string_lossy()).into_owned();
        PathBuf::from(expanded)
    }

    pub fn category_table(&self) -> AppointmentResult<CategoryTable> {
        match &self.categories {
            Some(map) => CategoryTable::from_map(map),
            None => Ok(CategoryTable::standard()),
        }
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> AppointmentResult<()> {
        let contents = format!(
            "\
# apptcal configuration

# Where appointments are stored:
# data_file = \"{}\"

# Appointments per page in the interactive menu:
# page_size = {}

# Categories (letter = name). Codes are the letter plus a number, e.g. W001.
# [categories]
# W = \"Work\"
# P = \"Personal\"
# M = \"Medical\"
# O = \"Other\"
",
            DEFAULT_FILE_NAME, DEFAULT_PAGE_SIZE
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppointmentError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| AppointmentError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_file_loads_as_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("apptcal").join("config.toml");

        AppConfig::create_default_config(&path).unwrap();
        let config = AppConfig::load_from(&path).unwrap();

        assert_eq!(config.data_file, PathBuf::from(DEFAULT_FILE_NAME));
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(config.category_table().unwrap(), CategoryTable::standard());
    }

    #[test]
    fn test_missing_file_loads_as_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_custom_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "data_file = \"/tmp/appts.txt\"\npage_size = 5\n\n[categories]\nS = \"Study\"\n",
        )
        .unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.data_path(), PathBuf::from("/tmp/appts.txt"));
        assert_eq!(config.page_size, 5);

        let table = config.category_table().unwrap();
        assert_eq!(table.name_for('S'), Some("Study"));
        assert_eq!(table.name_for('W'), None);
    }

    #[test]
    fn test_zero_page_size_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "page_size = 0\n").unwrap();

        assert!(AppConfig::load_from(&path).is_err());
    }

    #[test]
    fn test_data_path_expands_tilde() {
        let config = AppConfig {
            data_file: PathBuf::from("~/appointments.txt"),
            ..AppConfig::default()
        };
        assert!(!config.data_path().to_string_lossy().starts_with('~'));
    }
}
