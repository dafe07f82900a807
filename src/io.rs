//! Plain-text input and report formats.
//!
//! Input: the first non-blank line holds the city count, each following
//! non-blank line holds three whitespace-separated coordinates.
//!
//! ```text
//! 4
//! 0 0 0
//! 1 0 0
//! 1 1 0
//! 0 1 0
//! ```
//!
//! Report: the best fitness with three decimals, then one `x y z` line per
//! city of the reported tour.

use crate::ga::GaResult;
use crate::geometry::City;
use std::fmt;
use std::fs;
use std::path::Path;

/// Errors reading or parsing a city file. Line numbers are 1-based.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("input is empty: expected a city count on the first line")]
    MissingCount,

    #[error("line {line}: invalid city count {value:?}")]
    InvalidCount { line: usize, value: String },

    #[error("line {line}: expected 3 coordinates, found {found}")]
    FieldCount { line: usize, found: usize },

    #[error("line {line}: invalid coordinate {value:?}")]
    InvalidNumber { line: usize, value: String },

    #[error("declared {declared} cities but found {found}")]
    CountMismatch { declared: usize, found: usize },
}

/// Parses the city list from input text.
pub fn parse_cities(input: &str) -> Result<Vec<City>, InputError> {
    let mut lines = input
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty());

    let (count_line, count_text) = lines.next().ok_or(InputError::MissingCount)?;
    let declared: usize = count_text.parse().map_err(|_| InputError::InvalidCount {
        line: count_line,
        value: count_text.to_string(),
    })?;

    let cities = lines
        .map(|(line, text)| parse_city(line, text))
        .collect::<Result<Vec<_>, _>>()?;

    if cities.len() != declared {
        return Err(InputError::CountMismatch {
            declared,
            found: cities.len(),
        });
    }
    Ok(cities)
}

fn parse_city(line: usize, text: &str) -> Result<City, InputError> {
    let fields: Vec<&str> = text.split_whitespace().collect();
    if fields.len() != 3 {
        return Err(InputError::FieldCount {
            line,
            found: fields.len(),
        });
    }
    let mut coords = [0.0f64; 3];
    for (slot, field) in coords.iter_mut().zip(&fields) {
        *slot = field
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| InputError::InvalidNumber {
                line,
                value: field.to_string(),
            })?;
    }
    Ok(City::new(coords[0], coords[1], coords[2]))
}

/// Reads and parses a city file.
pub fn read_cities(path: impl AsRef<Path>) -> Result<Vec<City>, InputError> {
    let text = fs::read_to_string(path)?;
    parse_cities(&text)
}

/// Report view of a finished run: fitness line, then the tour.
pub struct Report<'a>(pub &'a GaResult);

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:.3}", self.0.best_fitness)?;
        for city in &self.0.best_path {
            writeln!(f, "{city}")?;
        }
        Ok(())
    }
}

/// Renders the report text for a finished run.
pub fn render_report(result: &GaResult) -> String {
    Report(result).to_string()
}
