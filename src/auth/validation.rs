//! Input validation shared by board operations.

use crate::{BoardError, Result};

/// Check whether a string is empty or whitespace only.
///
/// # Examples
///
/// ```
/// use databoard::auth::validation::is_blank;
///
/// assert!(is_blank(""));
/// assert!(is_blank("  \t"));
/// assert!(!is_blank("Funny"));
/// ```
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Fail with `EmptyField` if any of the given fields is blank.
///
/// Runs before authentication in every operation that takes strings.
pub fn require_filled(fields: &[&str]) -> Result<()> {
    if fields.iter().any(|field| is_blank(field)) {
        return Err(BoardError::EmptyField);
    }
    Ok(())
}
