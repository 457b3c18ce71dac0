//! Presentation layer for the race standings tool.
//!
//! Renders query results as plain-text tables or JSON and drives the
//! interactive numbered menu. Nothing in here exits the process; the menu
//! returns once the user asks to leave or input runs out.

pub mod json_view;
pub mod menu;
pub mod query;
pub mod table_view;

pub use menu::{run_menu, MenuOutcome};
pub use query::Query;
