use clap::{CommandFactory, Parser};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Result, StandingsError};
use crate::models::Season;

/// Results file used when neither the command line nor the last run names one.
pub const DEFAULT_RESULTS_FILE: &str = "results.txt";

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Season winners, results and point totals from a racing results file
#[derive(Parser, Debug, Clone)]
#[command(
    name = "race-standings",
    about = "Season winners, results and point totals from a racing results file",
    version
)]
pub struct Settings {
    /// Results file, one season per line
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// View to show; `menu` starts the interactive menu
    #[arg(long, default_value = "menu", value_parser = ["menu", "winners", "results", "races", "average", "totals", "driver"])]
    pub view: String,

    /// Season for the `results` view
    #[arg(long)]
    pub year: Option<Season>,

    /// Driver name (or part of one) for the `driver` view
    #[arg(long)]
    pub driver: Option<String>,

    /// Output format for single views
    #[arg(long, default_value = "table", value_parser = ["table", "json"])]
    pub format: String,

    /// Logging level
    #[arg(long, default_value = "WARNING", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR"])]
    pub log_level: String,

    /// Log file path
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Clear saved configuration
    #[arg(long)]
    pub clear: bool,
}

// ── LastUsedParams ─────────────────────────────────────────────────────────────

/// Persisted last-used parameters saved to `~/.race-standings/last_used.json`.
#[derive(Debug, Serialize, Deserialize, Default, Clone)]
pub struct LastUsedParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

impl LastUsedParams {
    /// Return the default path to the persisted config file.
    pub fn config_path() -> PathBuf {
        Self::config_path_in(&dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
    }

    /// Return the config path rooted at `base_dir` (used for testing).
    pub fn config_path_in(base_dir: &Path) -> PathBuf {
        base_dir.join(".race-standings").join("last_used.json")
    }

    /// Load persisted params from an explicit path.
    /// Returns `Default` when the file is absent or cannot be parsed.
    pub fn load_from(path: &Path) -> Self {
        let Ok(content) = std::fs::read_to_string(path) else {
            return Self::default();
        };
        serde_json::from_str(&content).unwrap_or_default()
    }

    /// Atomically write params to an explicit path, creating parent
    /// directories if needed.
    pub fn save_to(&self, path: &Path) -> std::result::Result<(), std::io::Error> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;

        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, &json)?;
        std::fs::rename(&tmp, path)?;

        Ok(())
    }

    /// Delete the config file at an explicit path if it exists.
    pub fn clear_at(path: &Path) -> std::result::Result<(), std::io::Error> {
        if path.exists() {
            std::fs::remove_file(path)?;
        }
        Ok(())
    }
}

// ── Settings impl ──────────────────────────────────────────────────────────────

impl Settings {
    /// Parse CLI arguments, merge with last-used params where no explicit CLI
    /// value was provided, and persist the result.
    pub fn load_with_last_used() -> Self {
        Self::load_with_last_used_impl(
            std::env::args_os().collect(),
            &LastUsedParams::config_path(),
        )
    }

    /// Full implementation; accepts args and an explicit config path so that
    /// tests can redirect to a temporary directory.
    pub fn load_with_last_used_impl(
        args: Vec<std::ffi::OsString>,
        config_path: &Path,
    ) -> Self {
        let matches = Settings::command().get_matches_from(args.clone());
        let mut settings = Settings::parse_from(args);

        if settings.debug {
            settings.log_level = "DEBUG".to_string();
        }

        if settings.clear {
            if let Err(e) = LastUsedParams::clear_at(config_path) {
                tracing::warn!("Could not clear {}: {}", config_path.display(), e);
            }
            return settings;
        }

        let last = LastUsedParams::load_from(config_path);

        // CLI always wins over persisted values.
        if settings.file.is_none() {
            settings.file = last.file;
        }
        if !is_arg_explicitly_set(&matches, "format") {
            if let Some(v) = last.format {
                settings.format = v;
            }
        }

        let params = LastUsedParams::from(&settings);
        if let Err(e) = params.save_to(config_path) {
            tracing::debug!("Could not persist settings to {}: {}", config_path.display(), e);
        }

        settings
    }

    /// The results file to load.
    pub fn results_file(&self) -> &Path {
        self.file
            .as_deref()
            .unwrap_or_else(|| Path::new(DEFAULT_RESULTS_FILE))
    }

    /// Check that the selected view has the parameters it needs.
    pub fn validate(&self) -> Result<()> {
        match self.view.as_str() {
            "results" if self.year.is_none() => Err(StandingsError::Config(
                "--view results requires --year".to_string(),
            )),
            "driver" if self.driver.is_none() => Err(StandingsError::Config(
                "--view driver requires --driver".to_string(),
            )),
            _ => Ok(()),
        }
    }
}

// ── Conversion ─────────────────────────────────────────────────────────────────

impl From<&Settings> for LastUsedParams {
    fn from(s: &Settings) -> Self {
        LastUsedParams {
            file: s.file.clone(),
            format: Some(s.format.clone()),
        }
    }
}

/// Returns `true` when `name` was supplied explicitly on the command line
/// (not via default value or environment variable).
fn is_arg_explicitly_set(matches: &clap::ArgMatches, name: &str) -> bool {
    matches.value_source(name) == Some(clap::parser::ValueSource::CommandLine)
}

// ── Tests ──────────────────────────────────────────────────────────────────────
