//! Strength rating - coarse score from length and character variety.

use std::fmt;

use crate::rules::{char_len, is_special};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Strength {
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl Strength {
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=4 => Strength::Weak,
            5..=6 => Strength::Medium,
            7..=8 => Strength::Strong,
            _ => Strength::VeryStrong,
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Strength::Weak => "Weak",
            Strength::Medium => "Medium",
            Strength::Strong => "Strong",
            Strength::VeryStrong => "Very Strong",
        })
    }
}

/// Scores a candidate from 0 to 9.
///
/// Length: +2 at 8 chars, then +1 each at 12, 16 and 20.
/// Variety: +1 each for uppercase, lowercase, digit and special.
pub fn strength_score(candidate: &str) -> u8 {
    let len = char_len(candidate);
    let length_points = [8, 12, 16, 20]
        .iter()
        .zip([2u8, 1, 1, 1])
        .filter(|(threshold, _)| len >= **threshold)
        .map(|(_, points)| points)
        .sum::<u8>();

    let has_upper = candidate.chars().any(char::is_uppercase);
    let has_lower = candidate.chars().any(char::is_lowercase);
    let has_digit = candidate.chars().any(|c| c.is_ascii_digit());
    let has_special = candidate.chars().any(is_special);
    let variety_points = [has_upper, has_lower, has_digit, has_special]
        .iter()
        .filter(|&&b| b)
        .count() as u8;

    length_points + variety_points
}
