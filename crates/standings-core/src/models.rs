use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// A championship year, the dataset's top-level key.
pub type Season = i32;

/// Name carried by the placeholder produced for an unparseable driver entry.
pub const UNKNOWN_DRIVER: &str = "Unknown";

/// One driver's line in a season: name, championship points and wins.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DriverResult {
    /// Driver name as written in the results file.
    pub name: String,
    /// Championship points scored in the season.
    pub points: f64,
    /// Race wins in the season.
    pub wins: u32,
}

impl DriverResult {
    pub fn new(name: impl Into<String>, points: f64, wins: u32) -> Self {
        Self {
            name: name.into(),
            points,
            wins,
        }
    }

    /// The sentinel returned when a driver entry does not match the grammar.
    pub fn unknown() -> Self {
        Self::new(UNKNOWN_DRIVER, 0.0, 0)
    }

    /// `true` for the sentinel produced by [`DriverResult::unknown`].
    pub fn is_unknown(&self) -> bool {
        self.name == UNKNOWN_DRIVER
    }

    /// Standings order: most points first, ties broken by most wins.
    pub fn standing_cmp(&self, other: &Self) -> Ordering {
        other
            .points
            .total_cmp(&self.points)
            .then_with(|| other.wins.cmp(&self.wins))
    }
}

/// Parsed results keyed by season, seasons ascending.
///
/// Built once by the loader and read-only afterwards: there is no API that
/// hands out a mutable reference to the underlying map.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Dataset {
    seasons: BTreeMap<Season, Vec<DriverResult>>,
}

impl Dataset {
    /// Results for `season` in source order, if the season was loaded.
    pub fn get(&self, season: Season) -> Option<&[DriverResult]> {
        self.seasons.get(&season).map(Vec::as_slice)
    }

    /// Iterate `(season, results)` pairs in ascending season order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (Season, &[DriverResult])> + '_ {
        self.seasons
            .iter()
            .map(|(season, results)| (*season, results.as_slice()))
    }

    /// Loaded seasons in ascending order.
    pub fn seasons(&self) -> impl DoubleEndedIterator<Item = Season> + '_ {
        self.seasons.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.seasons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seasons.is_empty()
    }
}

/// Later pairs for the same season replace earlier ones.
impl FromIterator<(Season, Vec<DriverResult>)> for Dataset {
    fn from_iter<I: IntoIterator<Item = (Season, Vec<DriverResult>)>>(iter: I) -> Self {
        Self {
            seasons: iter.into_iter().collect(),
        }
    }
}
