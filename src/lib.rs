//! Password policy checking library
//!
//! This library checks passwords against an immutable, typed policy and
//! reports every rule that fails, together with pattern warnings and a
//! coarse strength rating.
//!
//! # Features
//!
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_FORBIDDEN_LIST_PATH`: Custom path to the forbidden word list
//!   (default: `./assets/forbidden.txt`)
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_rules::{evaluate_secret, load_forbidden_list, PasswordPolicy};
//! use secrecy::SecretString;
//!
//! // Build the policy once at startup
//! let words = load_forbidden_list().expect("Failed to load forbidden list");
//! let policy = PasswordPolicy::builder()
//!     .min_length(12)
//!     .require_uppercase(true)
//!     .require_digit(true)
//!     .forbid(words)
//!     .build()
//!     .expect("Invalid policy");
//!
//! // Check a password
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let result = evaluate_secret(&password, &policy);
//!
//! println!("{}", result.summary());
//! for violation in &result.violations {
//!     println!("{}: {}", violation.id(), violation);
//! }
//! ```

// Internal modules
mod advisories;
mod evaluator;
mod forbidden_list;
mod policy;
mod rules;
mod strength;

// Public API
pub use advisories::{analyze_patterns, Warning};
pub use evaluator::{evaluate, evaluate_secret, ValidationResult};
pub use forbidden_list::{
    forbidden_list_path, load_forbidden_list, load_forbidden_list_from_path, ForbiddenListError,
    FORBIDDEN_LIST_ENV,
};
pub use policy::{PasswordPolicy, PolicyBuilder, PolicyError, STANDARD_FORBIDDEN};
pub use rules::{Rule, RuleResult, Violation};
pub use strength::{strength_score, Strength};
