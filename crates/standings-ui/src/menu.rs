//! Interactive numbered menu over a loaded dataset.
//!
//! The caller supplies the input and output streams, which keeps the loop
//! usable with stdin/stdout in the binary and with in-memory buffers in tests.

use std::io::{BufRead, Write};

use standings_core::models::{Dataset, Season};
use standings_core::Result;
use tracing::debug;

use crate::query::Query;
use crate::table_view;

const MENU: &str = "\
=== Race Standings ===
1. Season winners
2. Results for a season
3. Total races per season
4. Average points per season
5. Total points per season
6. Points for a driver
0. Exit
";

/// What the outer loop should do after handling one selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOutcome {
    Continue,
    Exit,
}

/// Show the menu and answer selections until the user exits or `input`
/// reaches end of file.
pub fn run_menu<R: BufRead, W: Write>(dataset: &Dataset, mut input: R, mut output: W) -> Result<()> {
    loop {
        write!(output, "\n{MENU}Select an option: ")?;
        output.flush()?;

        let Some(selection) = read_line(&mut input)? else {
            break;
        };
        debug!("Menu selection {:?}", selection);

        if handle_selection(dataset, &selection, &mut input, &mut output)? == MenuOutcome::Exit {
            break;
        }
    }

    writeln!(output, "Goodbye.")?;
    output.flush()?;
    Ok(())
}

/// Answer one menu selection, prompting for a year or driver name when the
/// chosen query needs one.
pub fn handle_selection<R: BufRead, W: Write>(
    dataset: &Dataset,
    selection: &str,
    input: &mut R,
    output: &mut W,
) -> Result<MenuOutcome> {
    let query = match selection {
        "0" | "q" | "quit" | "exit" => return Ok(MenuOutcome::Exit),
        "1" => Query::Winners,
        "2" => {
            let Some(answer) = prompt(input, output, "Enter season year: ")? else {
                return Ok(MenuOutcome::Exit);
            };
            match answer.parse::<Season>() {
                Ok(season) => Query::SeasonResults(season),
                Err(_) => {
                    writeln!(output, "Invalid year: {answer:?}")?;
                    return Ok(MenuOutcome::Continue);
                }
            }
        }
        "3" => Query::TotalRaces,
        "4" => Query::AveragePoints,
        "5" => Query::TotalPoints,
        "6" => {
            let Some(answer) = prompt(input, output, "Enter driver name: ")? else {
                return Ok(MenuOutcome::Exit);
            };
            Query::DriverPoints(answer)
        }
        other => {
            writeln!(output, "Invalid option: {other:?}")?;
            return Ok(MenuOutcome::Continue);
        }
    };

    write!(output, "\n{}", table_view::render(dataset, &query))?;
    Ok(MenuOutcome::Continue)
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Read one trimmed line; `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, text: &str) -> Result<Option<String>> {
    write!(output, "{text}")?;
    output.flush()?;
    read_line(input)
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use standings_core::models::DriverResult;

    fn sample() -> Dataset {
        [
            (
                2023,
                vec![
                    DriverResult::new("Max Verstappen", 575.0, 19),
                    DriverResult::new("Sergio Perez", 285.0, 2),
                ],
            ),
            (
                2022,
                vec![
                    DriverResult::new("Max Verstappen", 454.0, 15),
                    DriverResult::new("Charles Leclerc", 308.0, 3),
                ],
            ),
        ]
        .into_iter()
        .collect()
    }

    fn run(script: &str) -> String {
        let mut output = Vec::new();
        run_menu(&sample(), script.as_bytes(), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    // ── run_menu ──────────────────────────────────────────────────────────────

    #[test]
    fn test_exit_option_ends_loop() {
        let out = run("0\n");
        assert_eq!(out.matches("Select an option:").count(), 1);
        assert!(out.ends_with("Goodbye.\n"));
    }

    #[test]
    fn test_end_of_input_ends_loop() {
        let out = run("");
        assert!(out.contains("1. Season winners"));
        assert!(out.ends_with("Goodbye.\n"));
    }

    #[test]
    fn test_winners_then_exit() {
        let out = run("1\n0\n");
        assert!(out.contains("Season winners\nSeason"));
        assert!(out.contains("Max Verstappen"));
        assert_eq!(out.matches("Select an option:").count(), 2);
    }

    #[test]
    fn test_season_results_prompts_for_year() {
        let out = run("2\n2022\n0\n");
        assert!(out.contains("Enter season year: "));
        assert!(out.contains("Results for 2022"));
        assert!(out.contains("Charles Leclerc"));
    }

    #[test]
    fn test_season_results_unknown_year_shows_no_data() {
        let out = run("2\n1950\n0\n");
        assert!(out.contains("Results for 1950\nNo data available."));
    }

    #[test]
    fn test_invalid_year_continues() {
        let out = run("2\nlast year\n0\n");
        assert!(out.contains("Invalid year: \"last year\""));
        assert_eq!(out.matches("Select an option:").count(), 2);
    }

    #[test]
    fn test_driver_points_prompts_for_name() {
        let out = run("6\nverstappen\n0\n");
        assert!(out.contains("Enter driver name: "));
        assert!(out.contains("1,029"));
    }

    #[test]
    fn test_invalid_option_continues() {
        let out = run("9\n0\n");
        assert!(out.contains("Invalid option: \"9\""));
        assert!(out.ends_with("Goodbye.\n"));
    }

    #[test]
    fn test_end_of_input_during_prompt_exits() {
        let out = run("6\n");
        assert!(out.ends_with("Enter driver name: Goodbye.\n"));
    }

    // ── handle_selection ──────────────────────────────────────────────────────

    #[test]
    fn test_handle_selection_outcomes() {
        let dataset = sample();
        let mut input: &[u8] = b"";
        let mut output = Vec::new();

        assert_eq!(
            handle_selection(&dataset, "3", &mut input, &mut output).unwrap(),
            MenuOutcome::Continue
        );
        assert_eq!(
            handle_selection(&dataset, "q", &mut input, &mut output).unwrap(),
            MenuOutcome::Exit
        );
        assert!(String::from_utf8(output).unwrap().contains("Total races per season"));
    }
}
