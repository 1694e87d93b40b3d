mod commands;
mod logging;
mod pager;
mod render;
mod session;
mod utils;

use std::path::PathBuf;

use anyhow::Result;
use apptcal_core::CategoryTable;
use apptcal_core::config::AppConfig;
use chrono::Local;
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;

use commands::add::AddArgs;
use commands::list::ListFilter;
use session::Session;
use utils::input::parse_date;

#[derive(Parser)]
#[command(name = "apptcal")]
#[command(about = "Track appointments in a local text file")]
struct Cli {
    /// Appointments file (overrides data_file in config.toml)
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive menu (the default when no command is given)
    Menu,
    /// List appointments
    List {
        /// Only this category (letter or name, e.g. "W" or "work")
        #[arg(short, long)]
        category: Option<String>,

        /// Only appointments on this date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,

        /// Sort by start time instead of insertion order
        #[arg(short, long)]
        sorted: bool,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show today's appointments, or the next upcoming one
    Next,
    /// Add an appointment
    Add {
        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: String,

        /// Start time (HH:MM)
        #[arg(short, long)]
        start: String,

        /// End time (HH:MM)
        #[arg(short, long, conflicts_with = "duration")]
        end: Option<String>,

        /// Duration instead of an end time (e.g. "30m", "1h 30m"); defaults to 1 hour
        #[arg(long)]
        duration: Option<String>,

        /// Description
        #[arg(short = 'm', long)]
        description: String,

        /// Category letter or name (e.g. "W" or "work")
        #[arg(short, long)]
        category: String,
    },
    /// Delete an appointment by code (case-insensitive)
    Delete { code: String },
}

fn main() -> Result<()> {
    logging::init();

    let cli = Cli::parse();
    let config = load_config();
    let categories = category_table(&config);
    let path = cli.file.unwrap_or_else(|| config.data_path());

    let mut session = Session::open(path, categories);
    let now = Local::now().naive_local();

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => {
            let result = commands::menu::run(&mut session, config.page_size);

            // Save even if the menu ended with an error (e.g. stdin closed).
            if let Err(e) = session.save() {
                tracing::error!("{e:#}");
                eprintln!("{}", format!("Error saving appointments: {e:#}").red());
            }
            result
        }
        Commands::List {
            category,
            date,
            sorted,
            json,
        } => {
            let filter = ListFilter {
                category,
                date: date.as_deref().map(parse_date).transpose()?,
                sorted,
            };
            commands::list::run(&session.manager, filter, json)
        }
        Commands::Next => commands::next::run(&session.manager, now),
        Commands::Add {
            date,
            start,
            end,
            duration,
            description,
            category,
        } => commands::add::run(
            &mut session,
            AddArgs {
                date,
                start,
                end,
                duration,
                description,
                category,
            },
            now,
        ),
        Commands::Delete { code } => commands::delete::run(&mut session, &code),
    }
}

/// Config problems are reported and the defaults are used.
fn load_config() -> AppConfig {
    AppConfig::load().unwrap_or_else(|e| {
        tracing::warn!("{e}");
        eprintln!("{}", format!("Using default configuration: {e}").yellow());
        AppConfig::default()
    })
}

fn category_table(config: &AppConfig) -> CategoryTable {
    config.category_table().unwrap_or_else(|e| {
        tracing::warn!("{e}");
        eprintln!("{}", format!("Using default categories: {e}").yellow());
        CategoryTable::standard()
    })
}
