mod bootstrap;

use std::io::Write;
use std::process::ExitCode;

use anyhow::Result;
use standings_core::settings::Settings;
use standings_data::reader;
use standings_ui::{json_view, run_menu, table_view, Query};

fn main() -> Result<ExitCode> {
    let settings = Settings::load_with_last_used();

    bootstrap::ensure_directories()?;
    bootstrap::setup_logging(&settings.log_level, settings.log_file.as_ref())?;

    tracing::info!("race-standings v{} starting", env!("CARGO_PKG_VERSION"));

    let query = match Query::from_settings(&settings) {
        Ok(query) => query,
        Err(e) => {
            eprintln!("{e}");
            return Ok(ExitCode::from(2));
        }
    };

    let path = settings.results_file();
    let loaded = match reader::load(path) {
        Ok(loaded) => loaded,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("{e}");
            return Ok(ExitCode::FAILURE);
        }
    };

    if loaded.summary.lines_rejected > 0 {
        eprintln!(
            "Skipped {} malformed line(s) in {}",
            loaded.summary.lines_rejected,
            path.display()
        );
    }

    match query {
        None => {
            println!("Loaded {} from {}", loaded.summary, path.display());
            run_menu(&loaded.dataset, std::io::stdin().lock(), std::io::stdout().lock())?;
        }
        Some(query) => {
            if loaded.summary.duplicate_seasons > 0 {
                eprintln!(
                    "Replaced {} duplicate season line(s) in {}",
                    loaded.summary.duplicate_seasons,
                    path.display()
                );
            }
            let text = if settings.format == "json" {
                json_view::render(&loaded.dataset, &query)?
            } else {
                table_view::render(&loaded.dataset, &query)
            };
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(ExitCode::SUCCESS)
}
