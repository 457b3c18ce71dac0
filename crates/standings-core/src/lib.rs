//! Shared types for the race standings tool.
//!
//! Holds the season/driver data model, the error enum used by every crate in
//! the workspace, number formatting helpers and the command-line settings.

pub mod error;
pub mod formatting;
pub mod models;
pub mod settings;

pub use error::{Result, StandingsError};
pub use models::{Dataset, DriverResult, Season};
