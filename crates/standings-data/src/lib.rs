//! Data layer for the race standings tool.
//!
//! Loads a results file into an immutable [`Dataset`](standings_core::Dataset)
//! and answers the per-season and per-driver aggregation queries over it.

pub mod aggregator;
pub mod reader;

pub use aggregator::SeasonAggregator;
pub use reader::{load, LoadSummary, Loaded};
