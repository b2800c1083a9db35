//! Forbidden substring rule - rejects candidates containing listed words.

use super::{RuleResult, Violation};
use crate::policy::PasswordPolicy;

/// Case-insensitive containment check against every forbidden substring.
///
/// All matching entries are reported as the policy spells them, in policy
/// order. The rule is disabled when the policy has no forbidden substrings.
pub fn forbidden_substring_rule(candidate: &str, policy: &PasswordPolicy) -> RuleResult {
    let forbidden = policy.forbidden_substrings();
    if forbidden.is_empty() {
        return None;
    }

    let lowered = candidate.to_lowercase();
    let matched: Vec<String> = forbidden
        .iter()
        .filter(|w| lowered.contains(&w.to_lowercase()))
        .cloned()
        .collect();

    if matched.is_empty() {
        None
    } else {
        Some(Violation::ForbiddenSubstring { matched })
    }
}
