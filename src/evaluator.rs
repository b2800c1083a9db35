//! Password rule evaluator - main evaluation logic.

use secrecy::{ExposeSecret, SecretString};

use crate::advisories::{analyze_patterns, Warning};
use crate::policy::PasswordPolicy;
use crate::rules::{Rule, Violation};
use crate::strength::{strength_score, Strength};

/// Outcome of checking one candidate against a policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    /// `true` iff `violations` is empty.
    pub valid: bool,
    /// Failed rules, in [`Rule::ALL`] order.
    pub violations: Vec<Violation>,
    /// Pattern advisories. Never affect `valid`.
    pub warnings: Vec<Warning>,
    pub strength: Strength,
    pub score: u8,
}

impl ValidationResult {
    /// Identifiers of the failed rules, in order.
    pub fn rule_ids(&self) -> Vec<&'static str> {
        self.violations.iter().map(Violation::id).collect()
    }

    pub fn has_violation(&self, rule: Rule) -> bool {
        self.violations.iter().any(|v| v.rule() == rule)
    }

    /// One-line summary of the result.
    pub fn summary(&self) -> String {
        let strength = self.strength.to_string().to_lowercase();
        match (self.valid, self.warnings.len()) {
            (true, 0) => format!("Password is valid and {}", strength),
            (true, n) => format!("Password is valid but {} with {} warning(s)", strength, n),
            (false, _) => format!(
                "Password is invalid with {} error(s)",
                self.violations.len()
            ),
        }
    }
}

/// Checks a candidate against every rule of the policy.
///
/// All rules run; a failing rule never hides a later one. Any string,
/// including the empty one, is a legal candidate.
///
/// # Arguments
/// * `candidate` - The password to check
/// * `policy` - The rules to apply
///
/// # Returns
/// A `ValidationResult` with all violations, warnings and strength.
pub fn evaluate(candidate: &str, policy: &PasswordPolicy) -> ValidationResult {
    let violations: Vec<Violation> = Rule::ALL
        .iter()
        .filter_map(|rule| rule.check_fn()(candidate, policy))
        .collect();

    #[cfg(feature = "tracing")]
    tracing::debug!(
        "Password evaluated: {} violation(s) {:?}",
        violations.len(),
        violations.iter().map(Violation::id).collect::<Vec<_>>()
    );

    let score = strength_score(candidate);

    ValidationResult {
        valid: violations.is_empty(),
        violations,
        warnings: analyze_patterns(candidate),
        strength: Strength::from_score(score),
        score,
    }
}

/// Same as [`evaluate`] for a password held in a [`SecretString`].
pub fn evaluate_secret(candidate: &SecretString, policy: &PasswordPolicy) -> ValidationResult {
    evaluate(candidate.expose_secret(), policy)
}
