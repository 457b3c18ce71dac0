use standings_core::models::Season;
use standings_core::settings::Settings;
use standings_core::Result;

/// One of the six standings queries, with its parameter where it takes one.
#[derive(Debug, Clone, PartialEq)]
pub enum Query {
    Winners,
    SeasonResults(Season),
    TotalRaces,
    AveragePoints,
    TotalPoints,
    DriverPoints(String),
}

impl Query {
    /// Map the `--view` selection to a query. `None` means the interactive
    /// menu was requested.
    pub fn from_settings(settings: &Settings) -> Result<Option<Self>> {
        settings.validate()?;

        let query = match settings.view.as_str() {
            "winners" => Query::Winners,
            "results" => match settings.year {
                Some(year) => Query::SeasonResults(year),
                None => return Ok(None),
            },
            "races" => Query::TotalRaces,
            "average" => Query::AveragePoints,
            "totals" => Query::TotalPoints,
            "driver" => Query::DriverPoints(settings.driver.clone().unwrap_or_default()),
            _ => return Ok(None),
        };
        Ok(Some(query))
    }

    /// Heading shown above the rendered result.
    pub fn title(&self) -> String {
        match self {
            Query::Winners => "Season winners".to_string(),
            Query::SeasonResults(season) => format!("Results for {season}"),
            Query::TotalRaces => "Total races per season".to_string(),
            Query::AveragePoints => "Average points per season".to_string(),
            Query::TotalPoints => "Total points per season".to_string(),
            Query::DriverPoints(query) => format!("Points for drivers matching {query:?}"),
        }
    }
}
