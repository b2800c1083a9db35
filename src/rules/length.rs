//! Length rules - minimum and maximum character count.

use super::{char_len, RuleResult, Violation};
use crate::policy::PasswordPolicy;

/// Fails when the candidate has fewer characters than the policy minimum.
/// A minimum of 0 never fails.
pub fn min_length_rule(candidate: &str, policy: &PasswordPolicy) -> RuleResult {
    let actual = char_len(candidate);
    if actual < policy.min_length() {
        return Some(Violation::TooShort {
            minimum: policy.min_length(),
            actual,
        });
    }
    None
}

/// Fails when a maximum is set and the candidate exceeds it.
pub fn max_length_rule(candidate: &str, policy: &PasswordPolicy) -> RuleResult {
    let maximum = policy.max_length()?;
    let actual = char_len(candidate);
    if actual > maximum {
        return Some(Violation::TooLong { maximum, actual });
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy(min: usize, max: Option<usize>) -> PasswordPolicy {
        let mut builder = PasswordPolicy::builder().min_length(min);
        if let Some(max) = max {
            builder = builder.max_length(max);
        }
        builder.build().unwrap()
    }

    #[test]
    fn test_min_length_too_short() {
        let result = min_length_rule("Short1!", &policy(8, None));
        assert_eq!(result, Some(Violation::TooShort { minimum: 8, actual: 7 }));
    }

    #[test]
    fn test_min_length_exactly_minimum() {
        assert_eq!(min_length_rule("12345678", &policy(8, None)), None);
    }

    #[test]
    fn test_min_length_zero_accepts_empty() {
        assert_eq!(min_length_rule("", &policy(0, None)), None);
    }

    #[test]
    fn test_min_length_counts_characters_not_bytes() {
        // 4 chars, 8 bytes
        assert!(min_length_rule("ääää", &policy(5, None)).is_some());
        assert_eq!(min_length_rule("ääää", &policy(4, None)), None);
    }

    #[test]
    fn test_max_length_disabled() {
        let long = "A".repeat(500);
        assert_eq!(max_length_rule(&long, &policy(0, None)), None);
    }

    #[test]
    fn test_max_length_exceeded() {
        let long = "A".repeat(150);
        let result = max_length_rule(&long, &policy(8, Some(128)));
        assert_eq!(
            result,
            Some(Violation::TooLong {
                maximum: 128,
                actual: 150
            })
        );
    }

    #[test]
    fn test_max_length_boundary() {
        let exact = "A".repeat(128);
        assert_eq!(max_length_rule(&exact, &policy(8, Some(128))), None);
    }
}
