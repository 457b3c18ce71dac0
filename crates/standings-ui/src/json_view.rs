//! JSON rendering of the standings queries for scripted use.

use serde_json::{json, Value};
use standings_core::models::Dataset;
use standings_core::Result;
use standings_data::SeasonAggregator;

use crate::query::Query;

/// Run `query` against `dataset` and build its JSON value.
///
/// Season-keyed maps become objects keyed by the year string; the season
/// total list keeps its descending order as an array of objects.
pub fn to_value(dataset: &Dataset, query: &Query) -> Result<Value> {
    let value = match query {
        Query::Winners => serde_json::to_value(SeasonAggregator::winners(dataset))?,
        Query::SeasonResults(season) => json!({
            "season": season,
            "results": SeasonAggregator::season_results(dataset, *season),
        }),
        Query::TotalRaces => serde_json::to_value(SeasonAggregator::total_races_by_year(dataset))?,
        Query::AveragePoints => {
            serde_json::to_value(SeasonAggregator::average_points_by_year(dataset))?
        }
        Query::TotalPoints => Value::Array(
            SeasonAggregator::total_points_by_year(dataset)
                .into_iter()
                .map(|(season, points)| json!({ "season": season, "points": points }))
                .collect(),
        ),
        Query::DriverPoints(needle) => {
            serde_json::to_value(SeasonAggregator::driver_points(dataset, needle))?
        }
    };
    Ok(value)
}

/// Pretty-printed JSON for `query`, newline-terminated.
pub fn render(dataset: &Dataset, query: &Query) -> Result<String> {
    let mut text = serde_json::to_string_pretty(&to_value(dataset, query)?)?;
    text.push('\n');
    Ok(text)
}
