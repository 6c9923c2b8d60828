//! Line parsers for seating preferences and dish constraints.
//!
//! Blank lines are skipped and carriage returns stripped; any other line
//! that doesn't match its pattern is rejected with its 1-based line number.

use std::sync::LazyLock;

use regex::Regex;
use tableforge_core::Happiness;
use thiserror::Error;

static SEATING_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^If (\w+) would be seated next to (\w+) s?he would be (\d+) joy points (less|more) happy\.$",
    )
    .expect("seating pattern is valid")
});

static DISH_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Dish (.+) should only be served after Dish (.+)\.$")
        .expect("dish pattern is valid")
});

/// Input line errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("invalid {kind} definition on line {line_number}: '{line}'")]
    InvalidLine {
        kind: &'static str,
        line_number: usize,
        line: String,
    },

    #[error("joy points out of range on line {line_number}: '{value}'")]
    InvalidNumber { line_number: usize, value: String },
}

/// One directed seating preference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preference {
    pub person: String,
    pub neighbour: String,
    pub happiness: Happiness,
}

/// `dish` is served only after `after`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DishEdge {
    pub dish: String,
    pub after: String,
}

/// Parses lines like
/// `If Alice would be seated next to Bob she would be 54 joy points more happy.`
pub fn parse_preferences(input: &str) -> Result<Vec<Preference>, ParseError> {
    lines(input)
        .map(|(line_number, line)| -> Result<Preference, ParseError> {
            let caps = SEATING_LINE
                .captures(line)
                .ok_or_else(|| invalid("seating", line_number, line))?;

            let points: Happiness = caps[3].parse().map_err(|_| ParseError::InvalidNumber {
                line_number,
                value: caps[3].to_string(),
            })?;
            let happiness = if &caps[4] == "less" { -points } else { points };

            Ok(Preference {
                person: caps[1].to_string(),
                neighbour: caps[2].to_string(),
                happiness,
            })
        })
        .collect()
}

/// Parses lines like
/// `Dish Soup should only be served after Dish Bread.`
pub fn parse_dish_edges(input: &str) -> Result<Vec<DishEdge>, ParseError> {
    lines(input)
        .map(|(line_number, line)| -> Result<DishEdge, ParseError> {
            let caps = DISH_LINE
                .captures(line)
                .ok_or_else(|| invalid("dish order", line_number, line))?;
            Ok(DishEdge {
                dish: caps[1].to_string(),
                after: caps[2].to_string(),
            })
        })
        .collect()
}

fn lines(input: &str) -> impl Iterator<Item = (usize, &str)> {
    input
        .split('\n')
        .map(|line| line.trim_end_matches('\r'))
        .enumerate()
        .map(|(i, line)| (i + 1, line))
        .filter(|(_, line)| !line.is_empty())
}

fn invalid(kind: &'static str, line_number: usize, line: &str) -> ParseError {
    ParseError::InvalidLine {
        kind,
        line_number,
        line: line.to_string(),
    }
}
