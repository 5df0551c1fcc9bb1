//! Owner credentials for a board.
//!
//! Boards embed a `Credentials` value rather than inheriting from a common
//! base, so the two storage strategies share nothing but this component.

use std::fmt;

use tracing::{info, warn};

use super::validation::require_filled;
use crate::{BoardError, Result};

/// The owner name and current password of a board.
///
/// Invariant: both are non-blank for the lifetime of the value. The owner
/// never changes; the password changes only through [`reset_password`].
///
/// [`reset_password`]: Credentials::reset_password
#[derive(Clone)]
pub struct Credentials {
    owner: String,
    password: String,
}

impl Credentials {
    /// Create credentials for a new board.
    ///
    /// # Examples
    ///
    /// ```
    /// use databoard::auth::Credentials;
    ///
    /// let creds = Credentials::new("Luca", "un1c0rn1!").unwrap();
    /// assert_eq!(creds.owner(), "Luca");
    /// assert!(Credentials::new("", "un1c0rn1!").is_err());
    /// ```
    pub fn new(owner: impl Into<String>, password: impl Into<String>) -> Result<Self> {
        let owner = owner.into();
        let password = password.into();
        require_filled(&[&owner, &password])?;
        Ok(Self { owner, password })
    }

    /// Name of the board owner.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Check the supplied password against the stored one.
    ///
    /// Returns `Ok(true)` on success. Fails with `EmptyField` for a blank
    /// password and `Unauthorized` on mismatch.
    pub fn authenticate(&self, password: &str) -> Result<bool> {
        require_filled(&[password])?;
        if password != self.password {
            warn!("Rejected password for board owned by {}", self.owner);
            return Err(BoardError::Unauthorized);
        }
        Ok(true)
    }

    /// Replace the password after authenticating the current one.
    ///
    /// Blank and same-password checks run before authentication. The stored
    /// password is left untouched unless every check passes.
    pub fn reset_password(&mut self, current: &str, new: &str) -> Result<()> {
        require_filled(&[current, new])?;
        if current == new {
            return Err(BoardError::SamePassword);
        }
        self.authenticate(current)?;
        self.password = new.to_string();
        info!("Password reset for board owned by {}", self.owner);
        Ok(())
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("owner", &self.owner)
            .field("password", &"<redacted>")
            .finish()
    }
}
