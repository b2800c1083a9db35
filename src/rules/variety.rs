//! Character variety rules - uppercase, lowercase, digits, special chars.

use super::{is_special, RuleResult, Violation};
use crate::policy::PasswordPolicy;

fn require(enabled: bool, candidate: &str, pred: fn(char) -> bool, v: Violation) -> RuleResult {
    if enabled && !candidate.chars().any(pred) {
        return Some(v);
    }
    None
}

pub fn uppercase_rule(candidate: &str, policy: &PasswordPolicy) -> RuleResult {
    require(
        policy.require_uppercase(),
        candidate,
        char::is_uppercase,
        Violation::MissingUppercase,
    )
}

pub fn lowercase_rule(candidate: &str, policy: &PasswordPolicy) -> RuleResult {
    require(
        policy.require_lowercase(),
        candidate,
        char::is_lowercase,
        Violation::MissingLowercase,
    )
}

/// Only ASCII `0-9` count as digits.
pub fn digit_rule(candidate: &str, policy: &PasswordPolicy) -> RuleResult {
    require(
        policy.require_digit(),
        candidate,
        |c| c.is_ascii_digit(),
        Violation::MissingDigit,
    )
}

pub fn special_rule(candidate: &str, policy: &PasswordPolicy) -> RuleResult {
    require(
        policy.require_special(),
        candidate,
        is_special,
        Violation::MissingSpecial,
    )
}
