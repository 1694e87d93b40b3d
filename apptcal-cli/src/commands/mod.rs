pub mod add;
pub mod delete;
pub mod list;
pub mod menu;
pub mod next;
