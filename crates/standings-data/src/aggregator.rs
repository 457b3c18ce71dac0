//! Per-season and per-driver aggregation over a loaded [`Dataset`].
//!
//! Every query borrows the dataset immutably and allocates its own result,
//! so the same dataset can be queried from several threads at once.

use std::collections::BTreeMap;

use standings_core::models::{Dataset, DriverResult, Season};

/// Stateless helper that answers the standings queries.
pub struct SeasonAggregator;

impl SeasonAggregator {
    /// First listed driver of every season that has at least one entry.
    pub fn winners(dataset: &Dataset) -> BTreeMap<Season, &DriverResult> {
        dataset
            .iter()
            .filter_map(|(season, results)| results.first().map(|winner| (season, winner)))
            .collect()
    }

    /// The season's results in source order, or `None` if it was not loaded.
    ///
    /// Callers that want a standings table sort with
    /// [`DriverResult::standing_cmp`].
    pub fn season_results(dataset: &Dataset, season: Season) -> Option<&[DriverResult]> {
        dataset.get(season)
    }

    /// Sum of the `wins` field per season.
    ///
    /// The input carries no race count, so "total races" is the number of
    /// races won by the drivers listed for that season.
    pub fn total_races_by_year(dataset: &Dataset) -> BTreeMap<Season, u64> {
        dataset
            .iter()
            .map(|(season, results)| {
                let total: u64 = results.iter().map(|r| u64::from(r.wins)).sum();
                (season, total)
            })
            .collect()
    }

    /// Mean points per listed driver; `0.0` for a season with no entries.
    pub fn average_points_by_year(dataset: &Dataset) -> BTreeMap<Season, f64> {
        dataset
            .iter()
            .map(|(season, results)| {
                let average = if results.is_empty() {
                    0.0
                } else {
                    sum_points(results) / results.len() as f64
                };
                (season, average)
            })
            .collect()
    }

    /// Total points per season, most recent season first.
    pub fn total_points_by_year(dataset: &Dataset) -> Vec<(Season, f64)> {
        dataset
            .iter()
            .rev()
            .map(|(season, results)| (season, sum_points(results)))
            .collect()
    }

    /// Points summed across all seasons for every driver whose name contains
    /// `query`, ignoring case. Keyed by the exact driver name.
    pub fn driver_points(dataset: &Dataset, query: &str) -> BTreeMap<String, f64> {
        let needle = query.to_lowercase();

        dataset
            .iter()
            .flat_map(|(_, results)| results.iter())
            .filter(|r| r.name.to_lowercase().contains(&needle))
            .fold(BTreeMap::new(), |mut totals, r| {
                *totals.entry(r.name.clone()).or_insert(0.0) += r.points;
                totals
            })
    }
}

fn sum_points(results: &[DriverResult]) -> f64 {
    results.iter().map(|r| r.points).sum()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
