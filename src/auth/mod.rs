//! Owner authentication for the data board.
//!
//! This module provides the credential component shared by every board
//! implementation, plus the blank-field checks that gate each operation.

mod credentials;
pub mod validation;

pub use credentials::Credentials;
pub use validation::{is_blank, require_filled};
