//! Password policy - the immutable set of enabled rules and thresholds.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PolicyError {
    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },
}

impl PolicyError {
    fn invalid(reason: impl Into<String>) -> Self {
        PolicyError::InvalidConfiguration {
            reason: reason.into(),
        }
    }
}

/// Words rejected by [`PasswordPolicy::standard`].
pub const STANDARD_FORBIDDEN: [&str; 3] = ["password", "123456", "qwerty"];

/// Immutable password policy.
///
/// Every rule is disabled in [`PasswordPolicy::default`]; enable the ones you
/// need through [`PasswordPolicy::builder`].
///
/// # Example
///
/// ```rust
/// use pwd_rules::{evaluate, PasswordPolicy};
///
/// let policy = PasswordPolicy::builder()
///     .min_length(8)
///     .require_uppercase(true)
///     .require_digit(true)
///     .build()
///     .expect("valid policy");
///
/// let result = evaluate("password", &policy);
/// assert_eq!(result.rule_ids(), vec!["uppercase", "digit"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasswordPolicy {
    min_length: usize,
    max_length: Option<usize>,
    require_uppercase: bool,
    require_lowercase: bool,
    require_digit: bool,
    require_special: bool,
    forbidden_substrings: Vec<String>,
    max_consecutive_repeats: Option<usize>,
}

impl PasswordPolicy {
    pub fn builder() -> PolicyBuilder {
        PolicyBuilder::default()
    }

    /// General-purpose policy: 8 to 128 characters, all four character
    /// classes, and the [`STANDARD_FORBIDDEN`] words.
    pub fn standard() -> Self {
        // Built by hand: these values satisfy every builder check.
        PasswordPolicy {
            min_length: 8,
            max_length: Some(128),
            require_uppercase: true,
            require_lowercase: true,
            require_digit: true,
            require_special: true,
            forbidden_substrings: STANDARD_FORBIDDEN.iter().map(|w| w.to_string()).collect(),
            max_consecutive_repeats: None,
        }
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    pub fn max_length(&self) -> Option<usize> {
        self.max_length
    }

    pub fn require_uppercase(&self) -> bool {
        self.require_uppercase
    }

    pub fn require_lowercase(&self) -> bool {
        self.require_lowercase
    }

    pub fn require_digit(&self) -> bool {
        self.require_digit
    }

    pub fn require_special(&self) -> bool {
        self.require_special
    }

    /// Forbidden substrings as given, in insertion order. Matching ignores case.
    pub fn forbidden_substrings(&self) -> &[String] {
        &self.forbidden_substrings
    }

    /// Longest allowed run of one character; `None` means no limit.
    pub fn max_consecutive_repeats(&self) -> Option<usize> {
        self.max_consecutive_repeats
    }
}

/// Builder for [`PasswordPolicy`].
///
/// Setters can be chained in any order; consistency is checked once in
/// [`PolicyBuilder::build`].
#[derive(Debug, Clone, Default)]
pub struct PolicyBuilder {
    min_length: usize,
    max_length: Option<usize>,
    require_uppercase: bool,
    require_lowercase: bool,
    require_digit: bool,
    require_special: bool,
    forbidden_substrings: Vec<String>,
    max_consecutive_repeats: Option<usize>,
}

impl PolicyBuilder {
    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = min;
        self
    }

    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    pub fn require_uppercase(mut self, on: bool) -> Self {
        self.require_uppercase = on;
        self
    }

    pub fn require_lowercase(mut self, on: bool) -> Self {
        self.require_lowercase = on;
        self
    }

    pub fn require_digit(mut self, on: bool) -> Self {
        self.require_digit = on;
        self
    }

    pub fn require_special(mut self, on: bool) -> Self {
        self.require_special = on;
        self
    }

    /// Adds forbidden substrings. Can be called more than once.
    pub fn forbid<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.forbidden_substrings
            .extend(words.into_iter().map(Into::into));
        self
    }

    /// Sets the longest allowed run of one character. `0` disables the rule.
    pub fn max_consecutive_repeats(mut self, max: usize) -> Self {
        self.max_consecutive_repeats = if max == 0 { None } else { Some(max) };
        self
    }

    /// Validates the collected options and freezes them into a policy.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError::InvalidConfiguration`] if:
    /// - the maximum length is below the minimum length
    /// - a forbidden substring is empty
    ///
    /// Forbidden substrings are kept verbatim. Entries that differ only in
    /// case collapse to the first one given.
    pub fn build(self) -> Result<PasswordPolicy, PolicyError> {
        if let Some(max) = self.max_length {
            if max < self.min_length {
                return Err(PolicyError::invalid(format!(
                    "maximum length {} is below minimum length {}",
                    max, self.min_length
                )));
            }
        }

        let mut forbidden: Vec<String> = Vec::with_capacity(self.forbidden_substrings.len());
        let mut seen: Vec<String> = Vec::with_capacity(self.forbidden_substrings.len());
        for word in self.forbidden_substrings {
            if word.is_empty() {
                return Err(PolicyError::invalid("forbidden substrings must not be empty"));
            }
            let key = word.to_lowercase();
            if !seen.contains(&key) {
                seen.push(key);
                forbidden.push(word);
            }
        }

        let policy = PasswordPolicy {
            min_length: self.min_length,
            max_length: self.max_length,
            require_uppercase: self.require_uppercase,
            require_lowercase: self.require_lowercase,
            require_digit: self.require_digit,
            require_special: self.require_special,
            forbidden_substrings: forbidden,
            max_consecutive_repeats: self.max_consecutive_repeats,
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            "Password policy built: min_length={}, max_length={:?}, {} forbidden substrings",
            policy.min_length,
            policy.max_length,
            policy.forbidden_substrings.len()
        );

        Ok(policy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_disables_everything() {
        let policy = PasswordPolicy::default();
        assert_eq!(policy.min_length(), 0);
        assert_eq!(policy.max_length(), None);
        assert!(!policy.require_uppercase());
        assert!(!policy.require_lowercase());
        assert!(!policy.require_digit());
        assert!(!policy.require_special());
        assert!(policy.forbidden_substrings().is_empty());
        assert_eq!(policy.max_consecutive_repeats(), None);
    }

    #[test]
    fn test_builder_matches_default_when_untouched() {
        let policy = PasswordPolicy::builder().build().unwrap();
        assert_eq!(policy, PasswordPolicy::default());
    }

    #[test]
    fn test_builder_rejects_max_below_min() {
        let result = PasswordPolicy::builder().min_length(12).max_length(8).build();
        match result {
            Err(PolicyError::InvalidConfiguration { reason }) => {
                assert!(reason.contains("below minimum"));
            }
            other => panic!("Expected InvalidConfiguration, got {:?}", other),
        }
    }

    #[test]
    fn test_builder_accepts_equal_bounds() {
        let policy = PasswordPolicy::builder()
            .min_length(10)
            .max_length(10)
            .build()
            .unwrap();
        assert_eq!(policy.max_length(), Some(10));
    }

    #[test]
    fn test_builder_rejects_empty_forbidden_substring() {
        let result = PasswordPolicy::builder().forbid(["admin", ""]).build();
        assert!(matches!(result, Err(PolicyError::InvalidConfiguration { .. })));
    }

    #[test]
    fn test_builder_keeps_forbidden_substrings_verbatim() {
        let policy = PasswordPolicy::builder()
            .forbid(["ADMIN", " user ", "admin"])
            .forbid(vec!["Test".to_string()])
            .build()
            .unwrap();
        assert_eq!(policy.forbidden_substrings(), ["ADMIN", " user ", "Test"]);
    }

    #[test]
    fn test_builder_keeps_whitespace_in_forbidden_substring() {
        let policy = PasswordPolicy::builder().forbid([" 123"]).build().unwrap();
        assert_eq!(policy.forbidden_substrings(), [" 123"]);

        let result = crate::evaluate("abc123", &policy);
        assert!(result.valid);

        let result = crate::evaluate("abc 123", &policy);
        assert_eq!(result.rule_ids(), vec!["forbidden_substring"]);
    }

    #[test]
    fn test_builder_accepts_whitespace_only_substring() {
        let policy = PasswordPolicy::builder().forbid(["   "]).build().unwrap();
        assert!(crate::evaluate("a b c", &policy).valid);
        assert!(!crate::evaluate("a   b", &policy).valid);
    }

    #[test]
    fn test_zero_repeat_limit_means_no_limit() {
        let policy = PasswordPolicy::builder()
            .max_consecutive_repeats(0)
            .build()
            .unwrap();
        assert_eq!(policy.max_consecutive_repeats(), None);

        let policy = PasswordPolicy::builder()
            .max_consecutive_repeats(2)
            .build()
            .unwrap();
        assert_eq!(policy.max_consecutive_repeats(), Some(2));
    }

    #[test]
    fn test_standard_policy() {
        let policy = PasswordPolicy::standard();
        assert_eq!(policy.min_length(), 8);
        assert_eq!(policy.max_length(), Some(128));
        assert!(policy.require_uppercase() && policy.require_lowercase());
        assert!(policy.require_digit() && policy.require_special());
        assert_eq!(policy.forbidden_substrings(), STANDARD_FORBIDDEN);
    }

    #[test]
    fn test_error_message() {
        let err = PolicyError::invalid("bad bounds");
        assert_eq!(err.to_string(), "Invalid configuration: bad bounds");
    }
}
