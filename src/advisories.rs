//! Advisory analysis - detects weak patterns without rejecting the password.

use std::fmt;

use crate::rules::{char_len, longest_run};

const SEQUENTIAL_DIGITS: &str = "01234567890";
const SEQUENTIAL_LETTERS: &str = "abcdefghijklmnopqrstuvwxyz";
const KEYBOARD_ROWS: [&str; 4] = ["qwertyuiop", "asdfghjkl", "zxcvbnm", "1234567890"];
const PATTERN_WINDOW: usize = 3;
const REPEAT_WARNING_RUN: usize = 3;
const VERY_LONG: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    RepeatedCharacters,
    SequentialDigits,
    SequentialLetters,
    VeryLong,
    KeyboardPattern(String),
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::RepeatedCharacters => f.write_str("Password contains repeated characters"),
            Warning::SequentialDigits => f.write_str("Password contains sequential numbers"),
            Warning::SequentialLetters => f.write_str("Password contains sequential letters"),
            Warning::VeryLong => {
                f.write_str("Very long password - consider using a password manager")
            }
            Warning::KeyboardPattern(p) => write!(f, "Password contains keyboard pattern '{}'", p),
        }
    }
}

/// Every `size`-char window of `row`, in order.
fn windows(row: &str, size: usize) -> impl Iterator<Item = &str> {
    let bounds: Vec<usize> = row.char_indices().map(|(i, _)| i).chain([row.len()]).collect();
    (0..bounds.len().saturating_sub(size)).map(move |i| &row[bounds[i]..bounds[i + size]])
}

fn contains_any_window(haystack: &str, row: &str) -> bool {
    windows(row, PATTERN_WINDOW).any(|w| haystack.contains(w))
}

/// Analyzes the candidate for repetitive, sequential and keyboard patterns.
///
/// Warnings are reported in a fixed order: repeats, sequential digits,
/// sequential letters, length, then keyboard patterns row by row.
pub fn analyze_patterns(candidate: &str) -> Vec<Warning> {
    let lowered = candidate.to_lowercase();
    let mut warnings = Vec::new();

    if longest_run(candidate) >= REPEAT_WARNING_RUN {
        warnings.push(Warning::RepeatedCharacters);
    }

    if contains_any_window(candidate, SEQUENTIAL_DIGITS) {
        warnings.push(Warning::SequentialDigits);
    }

    if contains_any_window(&lowered, SEQUENTIAL_LETTERS) {
        warnings.push(Warning::SequentialLetters);
    }

    if char_len(candidate) >= VERY_LONG {
        warnings.push(Warning::VeryLong);
    }

    for row in KEYBOARD_ROWS {
        for pattern in windows(row, PATTERN_WINDOW) {
            if lowered.contains(pattern) {
                warnings.push(Warning::KeyboardPattern(pattern.to_string()));
            }
        }
    }

    warnings
}
