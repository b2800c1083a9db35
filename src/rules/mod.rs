//! Password policy rules
//!
//! Each rule checks one property of the candidate and is gated by its own
//! policy field. A disabled rule always passes.

mod forbidden;
mod length;
mod repetition;
mod variety;

use std::fmt;

pub use forbidden::forbidden_substring_rule;
pub use length::{max_length_rule, min_length_rule};
pub use repetition::{longest_run, repeated_character_rule};
pub use variety::{digit_rule, lowercase_rule, special_rule, uppercase_rule};

use crate::policy::PasswordPolicy;

/// Result type for rule functions.
/// - `Some(violation)` - Rule failed
/// - `None` - Rule passed or is disabled
pub type RuleResult = Option<Violation>;

/// Signature shared by every rule function.
pub type RuleFn = fn(&str, &PasswordPolicy) -> RuleResult;

/// Rule kinds, in evaluation and reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rule {
    MinLength,
    MaxLength,
    Uppercase,
    Lowercase,
    Digit,
    Special,
    ForbiddenSubstring,
    RepeatedCharacter,
}

impl Rule {
    pub const ALL: [Rule; 8] = [
        Rule::MinLength,
        Rule::MaxLength,
        Rule::Uppercase,
        Rule::Lowercase,
        Rule::Digit,
        Rule::Special,
        Rule::ForbiddenSubstring,
        Rule::RepeatedCharacter,
    ];

    /// Stable identifier used in reports and tests.
    pub fn id(self) -> &'static str {
        match self {
            Rule::MinLength => "length",
            Rule::MaxLength => "max_length",
            Rule::Uppercase => "uppercase",
            Rule::Lowercase => "lowercase",
            Rule::Digit => "digit",
            Rule::Special => "special",
            Rule::ForbiddenSubstring => "forbidden_substring",
            Rule::RepeatedCharacter => "repeated_character",
        }
    }

    /// The function that checks this rule.
    pub fn check_fn(self) -> RuleFn {
        match self {
            Rule::MinLength => min_length_rule,
            Rule::MaxLength => max_length_rule,
            Rule::Uppercase => uppercase_rule,
            Rule::Lowercase => lowercase_rule,
            Rule::Digit => digit_rule,
            Rule::Special => special_rule,
            Rule::ForbiddenSubstring => forbidden_substring_rule,
            Rule::RepeatedCharacter => repeated_character_rule,
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// A failed rule, with the detail needed to explain it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    TooShort { minimum: usize, actual: usize },
    TooLong { maximum: usize, actual: usize },
    MissingUppercase,
    MissingLowercase,
    MissingDigit,
    MissingSpecial,
    ForbiddenSubstring { matched: Vec<String> },
    RepeatedCharacter { limit: usize, run: usize },
}

impl Violation {
    pub fn rule(&self) -> Rule {
        match self {
            Violation::TooShort { .. } => Rule::MinLength,
            Violation::TooLong { .. } => Rule::MaxLength,
            Violation::MissingUppercase => Rule::Uppercase,
            Violation::MissingLowercase => Rule::Lowercase,
            Violation::MissingDigit => Rule::Digit,
            Violation::MissingSpecial => Rule::Special,
            Violation::ForbiddenSubstring { .. } => Rule::ForbiddenSubstring,
            Violation::RepeatedCharacter { .. } => Rule::RepeatedCharacter,
        }
    }

    pub fn id(&self) -> &'static str {
        self.rule().id()
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::TooShort { minimum, .. } => {
                write!(f, "Password must be at least {} characters long", minimum)
            }
            Violation::TooLong { maximum, .. } => {
                write!(f, "Password must be no more than {} characters long", maximum)
            }
            Violation::MissingUppercase => {
                f.write_str("Password must contain at least one uppercase letter")
            }
            Violation::MissingLowercase => {
                f.write_str("Password must contain at least one lowercase letter")
            }
            Violation::MissingDigit => f.write_str("Password must contain at least one digit"),
            Violation::MissingSpecial => {
                f.write_str("Password must contain at least one special character")
            }
            Violation::ForbiddenSubstring { matched } => {
                let quoted: Vec<String> = matched.iter().map(|w| format!("'{}'", w)).collect();
                write!(f, "Password cannot contain {}", quoted.join(", "))
            }
            Violation::RepeatedCharacter { limit, run } => write!(
                f,
                "Password repeats a character {} times in a row (limit {})",
                run, limit
            ),
        }
    }
}

/// Length in characters, not bytes.
pub(crate) fn char_len(candidate: &str) -> usize {
    candidate.chars().count()
}

/// Special characters are printable and neither alphanumeric nor whitespace.
pub(crate) fn is_special(c: char) -> bool {
    !c.is_alphanumeric() && !c.is_whitespace() && !c.is_control()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_order_matches_declaration() {
        let mut sorted = Rule::ALL;
        sorted.sort();
        assert_eq!(sorted, Rule::ALL);
    }

    #[test]
    fn test_rule_ids_are_unique() {
        let mut ids: Vec<&str> = Rule::ALL.iter().map(|r| r.id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), Rule::ALL.len());
    }

    #[test]
    fn test_violation_maps_back_to_rule() {
        let v = Violation::TooShort { minimum: 8, actual: 3 };
        assert_eq!(v.rule(), Rule::MinLength);
        assert_eq!(v.id(), "length");

        let v = Violation::RepeatedCharacter { limit: 2, run: 3 };
        assert_eq!(v.id(), "repeated_character");
    }

    #[test]
    fn test_violation_messages() {
        let v = Violation::TooShort { minimum: 8, actual: 5 };
        assert_eq!(v.to_string(), "Password must be at least 8 characters long");

        let v = Violation::ForbiddenSubstring {
            matched: vec!["admin".to_string(), "123456".to_string()],
        };
        assert_eq!(v.to_string(), "Password cannot contain 'admin', '123456'");
    }

    #[test]
    fn test_is_special() {
        for c in "!@#$%^&*()_+-=[]{}|;:,.<>?/~`'\"\\".chars() {
            assert!(is_special(c), "{:?} should be special", c);
        }
        for c in ['€', '£', '§', '¤', '©'] {
            assert!(is_special(c), "{:?} should be special", c);
        }
        for c in ['a', 'Z', '5', ' ', '\u{a0}', 'é', '٣', '\n', '\u{7f}'] {
            assert!(!is_special(c), "{:?} should not be special", c);
        }
    }

    #[test]
    fn test_char_len_counts_chars() {
        assert_eq!(char_len(""), 0);
        assert_eq!(char_len("abc"), 3);
        assert_eq!(char_len("päss"), 4);
    }
}
