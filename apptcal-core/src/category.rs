//! Category table: maps a category letter to its full name.

use std::collections::BTreeMap;

use crate::error::{AppointmentError, AppointmentResult};

/// Name given to appointments whose code starts with a letter outside the table.
pub const UNKNOWN_CATEGORY: &str = "Unknown";

/// The set of categories appointments can be filed under.
///
/// Each entry is an uppercase letter (the code prefix) and a full name.
/// Order is preserved for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTable {
    entries: Vec<(char, String)>,
}

impl Default for CategoryTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl CategoryTable {
    /// Work, Personal, Medical, Other.
    pub fn standard() -> Self {
        CategoryTable {
            entries: vec![
                ('W', "Work".to_string()),
                ('P', "Personal".to_string()),
                ('M', "Medical".to_string()),
                ('O', "Other".to_string()),
            ],
        }
    }

    /// Build a table from `letter -> name` pairs, e.g. the `[categories]`
    /// section of config.toml.
    ///
    /// Keys must be a single alphabetic character; they are uppercased.
    pub fn from_map(map: &BTreeMap<String, String>) -> AppointmentResult<Self> {
        let mut entries: Vec<(char, String)> = Vec::with_capacity(map.len());

        for (key, name) in map {
            let mut chars = key.trim().chars();
            let letter = match (chars.next(), chars.next()) {
                (Some(c), None) if c.is_alphabetic() => c.to_ascii_uppercase(),
                _ => return Err(AppointmentError::InvalidCategory(key.clone())),
            };

            if entries.iter().any(|(l, _)| *l == letter) {
                return Err(AppointmentError::Config(format!(
                    "Category letter '{}' is defined twice",
                    letter
                )));
            }
            if name.trim().is_empty() {
                return Err(AppointmentError::Config(format!(
                    "Category '{}' has an empty name",
                    letter
                )));
            }

            entries.push((letter, name.trim().to_string()));
        }

        if entries.is_empty() {
            return Err(AppointmentError::Config(
                "At least one category must be configured".into(),
            ));
        }

        Ok(CategoryTable { entries })
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, &str)> {
        self.entries.iter().map(|(l, n)| (*l, n.as_str()))
    }

    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.entries.iter().map(|(l, _)| *l)
    }

    pub fn name_for(&self, letter: char) -> Option<&str> {
        let letter = letter.to_ascii_uppercase();
        self.entries
            .iter()
            .find(|(l, _)| *l == letter)
            .map(|(_, n)| n.as_str())
    }

    /// Category name for a stored code, falling back to "Unknown".
    ///
    /// The leading letter must match exactly: counters are kept per exact
    /// letter, so "w001" is not a Work code.
    pub fn category_for_code(&self, code: &str) -> &str {
        code.chars()
            .next()
            .and_then(|c| self.entries.iter().find(|(l, _)| *l == c))
            .map(|(_, n)| n.as_str())
            .unwrap_or(UNKNOWN_CATEGORY)
    }

    /// Look up a category by letter ("w") or by full name ("work").
    pub fn resolve(&self, input: &str) -> Option<(char, &str)> {
        let input = input.trim();
        let mut chars = input.chars();

        if let (Some(c), None) = (chars.next(), chars.next()) {
            return self.name_for(c).map(|n| (c.to_ascii_uppercase(), n));
        }

        self.iter().find(|(_, n)| n.eq_ignore_ascii_case(input))
    }
}

/// Derive a category letter from a name or letter: first character, uppercased.
pub fn letter_of(category: &str) -> Option<char> {
    category
        .trim()
        .chars()
        .next()
        .map(|c| c.to_ascii_uppercase())
}
