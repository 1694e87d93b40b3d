//! Appointment code generation.
//!
//! Codes look like `W001`: the category letter followed by a counter
//! zero-padded to three digits. Counters past 999 simply widen (`W1000`).

use std::collections::HashSet;

/// Format a code from a category letter and counter value.
pub fn format_code(letter: char, counter: u32) -> String {
    format!("{}{:03}", letter, counter)
}

/// Find the first free code for `letter` after `start_counter`.
///
/// Tries `start_counter + 1`, `start_counter + 2`, ... until the formatted
/// code is not in `existing`. Returns the free code together with the
/// counter value that produced it, so the caller's counter advances past
/// every value that was tried.
pub fn next_free_code(letter: char, start_counter: u32, existing: &HashSet<&str>) -> (String, u32) {
    let mut counter = start_counter.saturating_add(1);

    loop {
        let code = format_code(letter, counter);
        if !existing.contains(code.as_str()) {
            return (code, counter);
        }
        counter = counter.saturating_add(1);
    }
}
