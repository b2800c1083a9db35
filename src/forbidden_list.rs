//! Forbidden word list loading
//!
//! Reads the newline-separated list of substrings a policy rejects.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable holding the word list location.
pub const FORBIDDEN_LIST_ENV: &str = "PWD_FORBIDDEN_LIST_PATH";

const DEFAULT_FORBIDDEN_LIST_PATH: &str = "./assets/forbidden.txt";

#[derive(Error, Debug)]
pub enum ForbiddenListError {
    #[error("Forbidden list file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read forbidden list file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Forbidden list file is empty")]
    EmptyFile,
}

/// Returns the forbidden list file path.
///
/// Priority:
/// 1. Environment variable `PWD_FORBIDDEN_LIST_PATH`
/// 2. Default path `./assets/forbidden.txt`
pub fn forbidden_list_path() -> PathBuf {
    std::env::var(FORBIDDEN_LIST_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_FORBIDDEN_LIST_PATH))
}

/// Loads the forbidden list from [`forbidden_list_path`].
///
/// # Example
///
/// ```rust,ignore
/// unsafe { std::env::set_var("PWD_FORBIDDEN_LIST_PATH", "/etc/myapp/forbidden.txt"); }
/// let words = pwd_rules::load_forbidden_list()?;
/// let policy = pwd_rules::PasswordPolicy::builder().forbid(words).build()?;
/// ```
pub fn load_forbidden_list() -> Result<Vec<String>, ForbiddenListError> {
    load_forbidden_list_from_path(forbidden_list_path())
}

/// Loads the forbidden list from a specific file path.
///
/// Lines are trimmed; blank lines and lines starting with `#` are skipped.
/// Entries keep file order and spelling. Case-insensitive de-duplication
/// happens when the policy is built.
///
/// # Errors
///
/// Returns error if:
/// - File does not exist
/// - File cannot be read
/// - File has no entries
pub fn load_forbidden_list_from_path<P: AsRef<Path>>(
    path: P,
) -> Result<Vec<String>, ForbiddenListError> {
    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Forbidden list load FAILED: FileNotFound {:?}", path);
        return Err(ForbiddenListError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;

    let words: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .map(str::to_string)
        .collect();

    if words.is_empty() {
        #[cfg(feature = "tracing")]
        tracing::error!("Forbidden list load FAILED: Empty file {:?}", path);
        return Err(ForbiddenListError::EmptyFile);
    }

    #[cfg(feature = "tracing")]
    tracing::info!("Forbidden list loaded: {} entries from {:?}", words.len(), path);

    Ok(words)
}
