//! Repeated character rule - limits runs of one character.

use super::{RuleResult, Violation};
use crate::policy::PasswordPolicy;

/// Length of the longest run of identical consecutive characters.
pub fn longest_run(candidate: &str) -> usize {
    let mut longest = 0;
    let mut current = 0;
    let mut prev: Option<char> = None;

    for c in candidate.chars() {
        if prev == Some(c) {
            current += 1;
        } else {
            current = 1;
            prev = Some(c);
        }
        longest = longest.max(current);
    }
    longest
}

/// Fails when a limit is set and some run is longer than it.
pub fn repeated_character_rule(candidate: &str, policy: &PasswordPolicy) -> RuleResult {
    let limit = policy.max_consecutive_repeats()?;
    let run = longest_run(candidate);
    if run > limit {
        return Some(Violation::RepeatedCharacter { limit, run });
    }
    None
}
