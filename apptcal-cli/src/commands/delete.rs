use anyhow::Result;
use owo_colors::OwoColorize;

use crate::session::Session;

pub fn run(session: &mut Session, code: &str) -> Result<()> {
    let code = code.trim();

    if !session.manager.delete(code) {
        println!("{}", format!("  Appointment '{}' not found.", code).yellow());
        return Ok(());
    }

    session.save()?;
    println!("{}", format!("  Deleted {}", code.to_uppercase()).green());
    Ok(())
}
