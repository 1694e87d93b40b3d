pub mod input;
pub mod tui;
