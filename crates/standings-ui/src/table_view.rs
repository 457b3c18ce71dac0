//! Plain-text table rendering for the standings queries.
//!
//! Columns are padded by display width so accented driver names line up.

use std::collections::BTreeMap;

use standings_core::formatting::{format_number, format_points};
use standings_core::models::{Dataset, DriverResult, Season};
use standings_data::SeasonAggregator;
use unicode_width::UnicodeWidthStr;

use crate::query::Query;

/// Shown instead of an empty table.
pub const NO_DATA: &str = "No data available.";

#[derive(Debug, Clone, Copy, PartialEq)]
enum Align {
    Left,
    Right,
}

/// A titled table of pre-formatted cells.
#[derive(Debug, Clone)]
pub struct TextTable {
    title: String,
    headers: Vec<(&'static str, Align)>,
    rows: Vec<Vec<String>>,
}

impl TextTable {
    fn new(title: impl Into<String>, headers: Vec<(&'static str, Align)>) -> Self {
        Self {
            title: title.into(),
            headers,
            rows: Vec::new(),
        }
    }

    fn push(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Render the title, header, separator and rows. An empty table renders
    /// as the title followed by [`NO_DATA`].
    pub fn render(&self) -> String {
        let mut out = format!("{}\n", self.title);
        if self.rows.is_empty() {
            out.push_str(NO_DATA);
            out.push('\n');
            return out;
        }

        let widths: Vec<usize> = self
            .headers
            .iter()
            .enumerate()
            .map(|(i, (header, _))| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(i))
                    .map(|cell| cell.width())
                    .chain(std::iter::once(header.width()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let header_cells: Vec<String> = self.headers.iter().map(|(h, _)| h.to_string()).collect();
        out.push_str(&self.format_row(&header_cells, &widths));
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        out.push_str(&rule.join("  "));
        out.push('\n');
        for row in &self.rows {
            out.push_str(&self.format_row(row, &widths));
        }
        out
    }

    fn format_row(&self, cells: &[String], widths: &[usize]) -> String {
        let padded: Vec<String> = cells
            .iter()
            .zip(widths)
            .zip(&self.headers)
            .map(|((cell, width), (_, align))| {
                let fill = " ".repeat(width.saturating_sub(cell.width()));
                match align {
                    Align::Left => format!("{cell}{fill}"),
                    Align::Right => format!("{fill}{cell}"),
                }
            })
            .collect();
        format!("{}\n", padded.join("  ").trim_end())
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Run `query` against `dataset` and render the result as a text table.
pub fn render(dataset: &Dataset, query: &Query) -> String {
    let title = query.title();
    let table = match query {
        Query::Winners => winners_table(title, &SeasonAggregator::winners(dataset)),
        Query::SeasonResults(season) => season_results_table(
            title,
            SeasonAggregator::season_results(dataset, *season).unwrap_or_default(),
        ),
        Query::TotalRaces => total_races_table(title, &SeasonAggregator::total_races_by_year(dataset)),
        Query::AveragePoints => {
            average_points_table(title, &SeasonAggregator::average_points_by_year(dataset))
        }
        Query::TotalPoints => {
            total_points_table(title, &SeasonAggregator::total_points_by_year(dataset))
        }
        Query::DriverPoints(needle) => {
            driver_points_table(title, &SeasonAggregator::driver_points(dataset, needle))
        }
    };
    table.render()
}

pub fn winners_table(title: String, winners: &BTreeMap<Season, &DriverResult>) -> TextTable {
    let mut table = TextTable::new(
        title,
        vec![
            ("Season", Align::Left),
            ("Winner", Align::Left),
            ("Points", Align::Right),
            ("Wins", Align::Right),
        ],
    );
    for (season, winner) in winners.iter().rev() {
        table.push(vec![
            season.to_string(),
            winner.name.clone(),
            format_points(winner.points),
            winner.wins.to_string(),
        ]);
    }
    table
}

/// Results sorted into standings order (points, then wins, descending).
pub fn season_results_table(title: String, results: &[DriverResult]) -> TextTable {
    let mut sorted: Vec<&DriverResult> = results.iter().collect();
    sorted.sort_by(|a, b| a.standing_cmp(b));

    let mut table = TextTable::new(
        title,
        vec![
            ("Pos", Align::Right),
            ("Driver", Align::Left),
            ("Points", Align::Right),
            ("Wins", Align::Right),
        ],
    );
    for (pos, result) in sorted.iter().enumerate() {
        table.push(vec![
            (pos + 1).to_string(),
            result.name.clone(),
            format_points(result.points),
            result.wins.to_string(),
        ]);
    }
    table
}

pub fn total_races_table(title: String, races: &BTreeMap<Season, u64>) -> TextTable {
    let mut table = TextTable::new(title, vec![("Season", Align::Left), ("Races", Align::Right)]);
    for (season, total) in races.iter().rev() {
        table.push(vec![season.to_string(), total.to_string()]);
    }
    table
}

pub fn average_points_table(title: String, averages: &BTreeMap<Season, f64>) -> TextTable {
    let mut table = TextTable::new(
        title,
        vec![("Season", Align::Left), ("Average points", Align::Right)],
    );
    for (season, average) in averages.iter().rev() {
        table.push(vec![season.to_string(), format_number(*average, 2)]);
    }
    table
}

pub fn total_points_table(title: String, totals: &[(Season, f64)]) -> TextTable {
    let mut table = TextTable::new(
        title,
        vec![("Season", Align::Left), ("Total points", Align::Right)],
    );
    for (season, total) in totals {
        table.push(vec![season.to_string(), format_points(*total)]);
    }
    table
}

/// Highest total first; equal totals keep name order.
pub fn driver_points_table(title: String, points: &BTreeMap<String, f64>) -> TextTable {
    let mut sorted: Vec<(&String, &f64)> = points.iter().collect();
    sorted.sort_by(|a, b| b.1.total_cmp(a.1));

    let mut table = TextTable::new(
        title,
        vec![("Driver", Align::Left), ("Points", Align::Right)],
    );
    for (name, total) in sorted {
        table.push(vec![name.clone(), format_points(*total)]);
    }
    table
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dataset {
        [
            (
                2023,
                vec![
                    DriverResult::new("Max Verstappen", 575.0, 19),
                    DriverResult::new("Sergio Perez", 285.0, 2),
                    DriverResult::new("Lewis Hamilton", 234.0, 0),
                ],
            ),
            (
                2021,
                vec![
                    DriverResult::new("Lewis Hamilton", 387.5, 8),
                    DriverResult::new("Max Verstappen", 395.5, 10),
                ],
            ),
        ]
        .into_iter()
        .collect()
    }

    fn lines(text: &str) -> Vec<&str> {
        text.lines().collect()
    }

    // ── TextTable ─────────────────────────────────────────────────────────────

    #[test]
    fn test_empty_table_renders_no_data() {
        let table = TextTable::new("Empty", vec![("Season", Align::Left)]);
        assert_eq!(table.render(), "Empty\nNo data available.\n");
    }

    #[test]
    fn test_columns_padded_by_display_width() {
        let mut table = TextTable::new(
            "T",
            vec![("Driver", Align::Left), ("Points", Align::Right)],
        );
        table.push(vec!["Kimi Räikkönen".to_string(), "251".to_string()]);
        table.push(vec!["Max".to_string(), "1,029".to_string()]);

        let rendered = table.render();
        let out = lines(&rendered);
        assert_eq!(out[1], "Driver          Points");
        assert_eq!(out[2], "--------------  ------");
        assert_eq!(out[3], "Kimi Räikkönen     251");
        assert_eq!(out[4], "Max              1,029");
    }

    // ── render ────────────────────────────────────────────────────────────────

    #[test]
    fn test_render_winners_latest_season_first() {
        let rendered = render(&sample(), &Query::Winners);
        let out = lines(&rendered);
        assert_eq!(out[0], "Season winners");
        assert!(out[3].starts_with("2023"));
        assert!(out[3].contains("Max Verstappen"));
        assert!(out[4].starts_with("2021"));
        assert!(out[4].contains("Lewis Hamilton"));
    }

    #[test]
    fn test_render_season_results_sorted_by_points() {
        let rendered = render(&sample(), &Query::SeasonResults(2021));
        let out = lines(&rendered);
        assert!(out[3].contains("Max Verstappen"));
        assert!(out[3].contains("395.5"));
        assert!(out[4].contains("Lewis Hamilton"));
    }

    #[test]
    fn test_render_season_results_unknown_year() {
        let rendered = render(&sample(), &Query::SeasonResults(1999));
        assert_eq!(rendered, "Results for 1999\nNo data available.\n");
    }

    #[test]
    fn test_render_total_races() {
        let rendered = render(&sample(), &Query::TotalRaces);
        let out = lines(&rendered);
        assert_eq!(out[3], "2023       21");
        assert_eq!(out[4], "2021       18");
    }

    #[test]
    fn test_render_average_points() {
        let rendered = render(&sample(), &Query::AveragePoints);
        assert!(rendered.contains("364.67"));
        assert!(rendered.contains("391.50"));
    }

    #[test]
    fn test_render_total_points() {
        let rendered = render(&sample(), &Query::TotalPoints);
        let out = lines(&rendered);
        assert!(out[3].starts_with("2023") && out[3].ends_with("1,094"));
        assert!(out[4].starts_with("2021") && out[4].ends_with("783"));
    }

    #[test]
    fn test_render_driver_points_highest_first() {
        let rendered = render(&sample(), &Query::DriverPoints("max".to_string()));
        assert!(rendered.contains("Max Verstappen"));
        assert!(rendered.contains("970.5"));
        assert!(!rendered.contains("Lewis"));

        let rendered = render(&sample(), &Query::DriverPoints("e".to_string()));
        let out = lines(&rendered);
        assert!(out[3].starts_with("Max Verstappen"));
        assert!(out[4].starts_with("Lewis Hamilton"));
        assert!(out[5].starts_with("Sergio Perez"));
    }

    #[test]
    fn test_render_driver_points_no_match() {
        let rendered = render(&sample(), &Query::DriverPoints("Unknown Driver".to_string()));
        assert!(rendered.ends_with("No data available.\n"));
    }

    #[test]
    fn test_render_empty_dataset() {
        let rendered = render(&Dataset::default(), &Query::Winners);
        assert_eq!(rendered, "Season winners\nNo data available.\n");
    }
}
