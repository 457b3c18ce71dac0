//! Results-file loading for the race standings tool.
//!
//! Each line of the input holds one season:
//!
//! ```text
//! 2023,Max Verstappen: 575 19,Sergio Perez: 285 2
//! ```
//!
//! Lines that do not fit the grammar are dropped and described in the
//! returned diagnostics; a malformed line never fails the whole load.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::Serialize;
use standings_core::models::{Dataset, DriverResult, Season};
use standings_core::{Result, StandingsError};
use tracing::{debug, info, warn};

// ── Public types ──────────────────────────────────────────────────────────────

/// Counters describing one load.
#[derive(Debug, Clone, Serialize)]
pub struct LoadSummary {
    /// When parsing finished.
    pub loaded_at: DateTime<Utc>,
    /// Non-blank lines seen.
    pub lines_read: usize,
    /// Distinct seasons in the resulting dataset.
    pub seasons_loaded: usize,
    /// Lines discarded for structure or entry errors.
    pub lines_rejected: usize,
    /// Accepted lines that replaced an earlier line for the same season.
    pub duplicate_seasons: usize,
}

impl fmt::Display for LoadSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} seasons ({} lines read, {} rejected, {} duplicates replaced) at {}",
            self.seasons_loaded,
            self.lines_read,
            self.lines_rejected,
            self.duplicate_seasons,
            self.loaded_at.format("%Y-%m-%d %H:%M:%S UTC"),
        )
    }
}

/// The output of a load: the dataset plus everything that was rejected.
#[derive(Debug, Clone)]
pub struct Loaded {
    pub dataset: Dataset,
    /// One human-readable message per rejected line or driver entry.
    pub diagnostics: Vec<String>,
    pub summary: LoadSummary,
}

/// Result of parsing a single line.
#[derive(Debug, Clone, PartialEq)]
pub enum LineOutcome {
    /// Every driver entry parsed; the season and its results in source order.
    Season(Season, Vec<DriverResult>),
    /// The line was discarded. Holds at least one diagnostic.
    Rejected(Vec<String>),
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Read and parse the results file at `path`.
///
/// Fails with [`StandingsError::NotFound`] when the path does not exist and
/// [`StandingsError::FileRead`] for any other I/O failure. Rejected lines are
/// logged at `warn` and returned in [`Loaded::diagnostics`].
pub fn load(path: impl AsRef<Path>) -> Result<Loaded> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| StandingsError::from_io(path, e))?;

    let loaded = parse_str(&text);

    for diagnostic in &loaded.diagnostics {
        warn!("{}: {}", path.display(), diagnostic);
    }
    info!("Loaded {} from {}", loaded.summary, path.display());

    Ok(loaded)
}

/// Parse in-memory results text. Blank lines are skipped.
pub fn parse_str(text: &str) -> Loaded {
    let state = text
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .fold(FoldState::default(), |state, (index, line)| {
            state.accept(index + 1, parse_line(line))
        });

    debug!(
        "Parsed {} lines: {} seasons, {} rejected, {} duplicates",
        state.lines_read,
        state.seasons.len(),
        state.lines_rejected,
        state.duplicate_seasons,
    );

    let summary = LoadSummary {
        loaded_at: Utc::now(),
        lines_read: state.lines_read,
        seasons_loaded: state.seasons.len(),
        lines_rejected: state.lines_rejected,
        duplicate_seasons: state.duplicate_seasons,
    };

    Loaded {
        dataset: state.seasons.into_iter().collect(),
        diagnostics: state.diagnostics,
        summary,
    }
}

/// Parse one `<year>,<entry>(,<entry>)*` line.
///
/// The whole line is rejected when the year prefix is missing or not an
/// integer, or when any driver entry fails to parse.
pub fn parse_line(line: &str) -> LineOutcome {
    let Some((prefix, remainder)) = line.split_once(',') else {
        return LineOutcome::Rejected(vec![format!("invalid line structure: {:?}", line.trim())]);
    };
    let Ok(season) = prefix.trim().parse::<Season>() else {
        return LineOutcome::Rejected(vec![format!("invalid line structure: {:?}", line.trim())]);
    };

    let (results, mut diagnostics): (Vec<DriverResult>, Vec<String>) = remainder.split(',').fold(
        (Vec::new(), Vec::new()),
        |(mut results, mut diagnostics), raw| {
            let result = parse_driver_entry(raw);
            if result.is_unknown() {
                diagnostics.push(format!("malformed driver entry: {:?}", raw.trim()));
            }
            results.push(result);
            (results, diagnostics)
        },
    );

    if diagnostics.is_empty() {
        LineOutcome::Season(season, results)
    } else {
        diagnostics.push(format!("malformed entry for season {season}, line discarded"));
        LineOutcome::Rejected(diagnostics)
    }
}

/// Parse a single `<name>: <points> <wins>` entry.
///
/// Never fails: text that does not match yields [`DriverResult::unknown`].
pub fn parse_driver_entry(text: &str) -> DriverResult {
    let Some(caps) = driver_entry_pattern().captures(text.trim()) else {
        return DriverResult::unknown();
    };

    let name = caps[1].trim();
    let points = caps[2].parse::<f64>().ok().filter(|p| p.is_finite());
    let wins = caps[3].parse::<u32>().ok();

    match (points, wins) {
        (Some(points), Some(wins)) if !name.is_empty() => DriverResult::new(name, points, wins),
        _ => DriverResult::unknown(),
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

fn driver_entry_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^([\p{L}\p{N}\s]+): (\d+(?:\.\d+)?) +(\d+)$").expect("regex is valid")
    })
}

/// Accumulator threaded through the line fold in [`parse_str`].
#[derive(Default)]
struct FoldState {
    seasons: BTreeMap<Season, Vec<DriverResult>>,
    diagnostics: Vec<String>,
    lines_read: usize,
    lines_rejected: usize,
    duplicate_seasons: usize,
}

impl FoldState {
    fn accept(mut self, line_no: usize, outcome: LineOutcome) -> Self {
        self.lines_read += 1;
        match outcome {
            LineOutcome::Season(season, results) => {
                if self.seasons.insert(season, results).is_some() {
                    debug!("line {line_no}: season {season} replaces an earlier line");
                    self.duplicate_seasons += 1;
                }
            }
            LineOutcome::Rejected(messages) => {
                self.lines_rejected += 1;
                self.diagnostics
                    .extend(messages.into_iter().map(|m| format!("line {line_no}: {m}")));
            }
        }
        self
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
