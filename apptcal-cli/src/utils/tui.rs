use anyhow::Result;
use dialoguer::Input;
use owo_colors::OwoColorize;
use std::io::Write;

use super::input::is_cancel;

pub fn clear_screen() {
    print!("\x1B[H\x1B[2J");
    let _ = std::io::stdout().flush();
}

/// Block until the user presses Enter.
pub fn pause(message: &str) -> Result<()> {
    let _: String = Input::new()
        .with_prompt(format!("  {}", message.dimmed()))
        .allow_empty(true)
        .show_default(false)
        .interact_text()?;
    Ok(())
}

/// Prompt until `parse` accepts the input. Returns None if the user types "cancel".
pub fn prompt_until<T, F>(prompt: &str, parse: F) -> Result<Option<T>>
where
    F: Fn(&str) -> Result<T>,
{
    loop {
        let input: String = Input::new()
            .with_prompt(format!("  {}", prompt))
            .allow_empty(true)
            .interact_text()?;

        if is_cancel(&input) {
            return Ok(None);
        }

        match parse(&input) {
            Ok(value) => return Ok(Some(value)),
            Err(e) => {
                eprintln!("  {}", e.to_string().red());
            }
        }
    }
}
