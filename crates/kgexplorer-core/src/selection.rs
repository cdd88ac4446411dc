//! Bounded, re-prompting selection over counted candidates.
//!
//! Invalid input (non-numeric or out of range) is never an error value: it
//! is reported on the console and the prompt repeats. `None` results mean
//! either the exit sentinel `0` or closed input.

use kgexplorer_common::config::DEFAULT_SELECTION_BOUND;
use kgexplorer_common::{CandidateRow, QueryExecutionError, SelectionError};
use crate::console::Console;

/// Live maximum from a count-only fetch, or `fallback` when the fetch
/// failed, returned nothing, or returned zero.
pub fn resolve_bound_or(fetched: Result<Vec<CandidateRow>, QueryExecutionError>, fallback: u64) -> u64 {
    match fetched {
        Ok(rows) => match rows.first().map(|r| r.count) {
            Some(count) if count > 0 => count,
            _ => {
                tracing::warn!("Count query returned nothing, using default bound {}", fallback);
                fallback
            }
        },
        Err(e) => {
            tracing::warn!("Failed to fetch live count: {}. Using default bound {}", e, fallback);
            fallback
        }
    }
}

pub fn resolve_bound(fetched: Result<Vec<CandidateRow>, QueryExecutionError>) -> u64 {
    resolve_bound_or(fetched, DEFAULT_SELECTION_BOUND)
}

/// Asks until `1 <= value <= max_value` is entered.
pub fn prompt_bounded_integer(console: &mut dyn Console, max_value: u64, prompt_text: &str) -> Option<u64> {
    let prompt = format!("{} (max {}): ", prompt_text, max_value);
    loop {
        let input = console.read_line(&prompt)?;
        match input.trim().parse::<u64>() {
            Ok(value) if (1..=max_value).contains(&value) => return Some(value),
            Ok(_) => console.write_line(&format!("Please enter a number between 1 and {}.", max_value)),
            Err(_) => console.write_line("Invalid input. Please enter a valid number."),
        }
    }
}

/// Prints `rows` as a numbered list in the order given.
pub fn display_candidates(console: &mut dyn Console, rows: &[CandidateRow], key: &str) {
    let key = capitalize(key);
    for (i, row) in rows.iter().enumerate() {
        console.write_line(&format!("{}: {}: {}, Count: {}", i + 1, key, row.label, row.count));
    }
}

/// Displays `rows` and asks for an index in `[0, rows.len()]`.
/// `0` returns `None`; any other valid index returns that row's label.
pub fn select_candidate(console: &mut dyn Console, rows: &[CandidateRow], key: &str) -> Option<String> {
    display_candidates(console, rows, key);

    let prompt = format!("\nSelect an option (1-{}) or 0 to exit: ", rows.len());
    loop {
        let input = console.read_line(&prompt)?;
        match input.trim().parse::<usize>() {
            Ok(0) => {
                tracing::info!("User chose to exit selection.");
                return None;
            }
            Ok(choice) if choice <= rows.len() => {
                tracing::info!("User selected option {}.", choice);
                return Some(rows[choice - 1].label.clone());
            }
            Ok(_) => console.write_line(&format!("Please select a number between 1 and {}.", rows.len())),
            Err(_) => console.write_line("Invalid input. Please enter a number."),
        }
    }
}

/// Numbered choice without an exit sentinel. A single option is selected
/// without asking. `Ok(None)` only when input is closed.
pub fn select_from_list(
    console: &mut dyn Console,
    options: &[String],
    prompt: &str,
) -> Result<Option<String>, SelectionError> {
    match options {
        [] => return Err(SelectionError::EmptyOptions),
        [only] => {
            tracing::info!("Only one option available. Auto-selecting.");
            return Ok(Some(only.clone()));
        }
        _ => {}
    }

    for (i, option) in options.iter().enumerate() {
        console.write_line(&format!("{}. {}", i + 1, option));
    }

    loop {
        let Some(input) = console.read_line(prompt) else {
            return Ok(None);
        };
        match input.trim().parse::<usize>() {
            Ok(choice) if (1..=options.len()).contains(&choice) => {
                tracing::info!("User selected option {}: {}", choice, options[choice - 1]);
                return Ok(Some(options[choice - 1].clone()));
            }
            Ok(_) => console.write_line(&format!("Please select a number between 1 and {}.", options.len())),
            Err(_) => console.write_line("Invalid input. Please enter a number."),
        }
    }
}

/// Yes/no question; only `y` (any case) confirms.
pub fn confirm(console: &mut dyn Console, prompt: &str) -> bool {
    console
        .read_line(&format!("{} (y/n): ", prompt))
        .map(|answer| answer.trim().eq_ignore_ascii_case("y"))
        .unwrap_or(false)
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
